//! Seams to the host platform: where engine views and window widgets come from

use parking_lot::Mutex;
use skiff_navigation::{EngineError, EngineView};
use skiff_session::{HeadlessUi, WindowId, WindowUi};
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Config;
use crate::events::Notifier;

/// Creates one engine view per tab.
///
/// The view must report progress, URL changes and load completion through
/// `notifier`. It must not start loading anything on its own; the browser
/// issues the first navigation.
pub trait EngineFactory {
    fn create_view(&mut self, notifier: Notifier) -> Result<Box<dyn EngineView>, EngineError>;
}

/// Creates the widget side of a new window
pub trait UiFactory {
    fn create_window_ui(&mut self, window: WindowId, config: &Config) -> Box<dyn WindowUi>;
}

/// Toolkit that keeps every window's widgets in memory, for hosts that
/// render elsewhere and for tests.
#[derive(Debug, Clone, Default)]
pub struct HeadlessToolkit {
    windows: Arc<Mutex<HashMap<WindowId, HeadlessUi>>>,
}

impl HeadlessToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the widgets of `window`
    pub fn ui(&self, window: WindowId) -> Option<HeadlessUi> {
        self.windows.lock().get(&window).cloned()
    }
}

impl UiFactory for HeadlessToolkit {
    fn create_window_ui(&mut self, window: WindowId, _config: &Config) -> Box<dyn WindowUi> {
        let ui = HeadlessUi::new();
        self.windows.lock().insert(window, ui.clone());
        Box::new(ui)
    }
}
