//! Window widget updates
//!
//! The toolkit side of a window (tab bar, address bar, status bar) is driven
//! only through `UiUpdate` values, so the shell never touches widgets
//! directly and a host can forward updates over any channel it likes.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiUpdate {
    WindowShown { title: String },
    WindowClosed,
    TabInserted { index: usize, label: String },
    TabRemoved { index: usize },
    TabSelected { index: usize },
    TabLabel { index: usize, title: String },
    AddressText { index: usize, text: String },
    ProgressShown { percent: u8, message: String },
    ProgressHidden,
}

/// Sink for the widget updates of one window
pub trait WindowUi {
    fn apply(&mut self, update: UiUpdate);
}

/// Widget state as a window would display it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub title: Option<String>,
    pub closed: bool,
    /// Tab bar labels in visual order
    pub labels: Vec<String>,
    /// Address text per tab, in visual order
    pub addresses: Vec<String>,
    pub selected: Option<usize>,
    /// Status bar progress indicator and message
    pub status: Option<(u8, String)>,
    /// Every update received, oldest first
    pub history: Vec<UiUpdate>,
}

impl UiState {
    fn apply(&mut self, update: UiUpdate) {
        match &update {
            UiUpdate::WindowShown { title } => self.title = Some(title.clone()),
            UiUpdate::WindowClosed => {
                self.closed = true;
                self.labels.clear();
                self.addresses.clear();
                self.selected = None;
                self.status = None;
            }
            UiUpdate::TabInserted { index, label } => {
                if *index <= self.labels.len() {
                    self.labels.insert(*index, label.clone());
                    self.addresses.insert(*index, String::new());
                } else {
                    tracing::warn!(index, len = self.labels.len(), "Tab inserted past the end");
                }
            }
            UiUpdate::TabRemoved { index } => {
                if *index < self.labels.len() {
                    self.labels.remove(*index);
                    self.addresses.remove(*index);
                }
                if self.labels.is_empty() {
                    self.selected = None;
                }
            }
            UiUpdate::TabSelected { index } => self.selected = Some(*index),
            UiUpdate::TabLabel { index, title } => {
                if let Some(label) = self.labels.get_mut(*index) {
                    *label = title.clone();
                }
            }
            UiUpdate::AddressText { index, text } => {
                if let Some(address) = self.addresses.get_mut(*index) {
                    *address = text.clone();
                }
            }
            UiUpdate::ProgressShown { percent, message } => {
                self.status = Some((*percent, message.clone()))
            }
            UiUpdate::ProgressHidden => self.status = None,
        }

        self.history.push(update);
    }

    /// Address text of the selected tab, as the single address bar shows it
    pub fn address_bar(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.addresses.get(index))
            .map(String::as_str)
    }
}

/// Window UI without a toolkit: keeps the widget state in memory.
///
/// Clones share the same state, so the registry can own one handle while
/// the host (or a test) inspects another.
#[derive(Debug, Clone, Default)]
pub struct HeadlessUi {
    state: Arc<Mutex<UiState>>,
}

impl HeadlessUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> UiState {
        self.state.lock().clone()
    }

    /// Drop recorded history, keeping the widget state
    pub fn clear_history(&self) {
        self.state.lock().history.clear();
    }
}

impl WindowUi for HeadlessUi {
    fn apply(&mut self, update: UiUpdate) {
        self.state.lock().apply(update);
    }
}
