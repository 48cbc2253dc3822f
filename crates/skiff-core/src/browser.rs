//! Main browser context
//!
//! Owns every window (and through them every tab and engine view), the
//! platform factories and the notification queue. Created at startup,
//! drained by `quit`.

use skiff_navigation::{AddressResolver, EngineView, NavigationCommand};
use skiff_session::{SessionError, Window, WindowId, WindowInfo, WindowRegistry};
use skiff_tabs::{Tab, TabId};

use crate::config::Config;
use crate::error::CoreError;
use crate::events::{EventQueue, Notifier};
use crate::platform::{EngineFactory, UiFactory};
use crate::print::PrintService;
use crate::Result;

/// What closing a tab left behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabClosed {
    /// Other tabs remain; `active` is the window's active index now
    Remaining { active: usize },
    /// That was the last tab, so the window was closed too
    WindowClosed,
}

pub struct Browser {
    pub(crate) config: Config,
    pub(crate) resolver: AddressResolver,
    pub(crate) windows: WindowRegistry,
    engines: Box<dyn EngineFactory>,
    toolkit: Box<dyn UiFactory>,
    pub(crate) printer: Box<dyn PrintService>,
    pub(crate) events: EventQueue,
    running: bool,
}

impl Browser {
    pub fn new(
        config: Config,
        engines: Box<dyn EngineFactory>,
        toolkit: Box<dyn UiFactory>,
        printer: Box<dyn PrintService>,
    ) -> Result<Self> {
        config.validate()?;

        let resolver = AddressResolver::with_default_scheme(config.default_scheme.clone());

        Ok(Self {
            config,
            resolver,
            windows: WindowRegistry::new(),
            engines,
            toolkit,
            printer,
            events: EventQueue::new(),
            running: true,
        })
    }

    /// Open the first window
    pub fn start(&mut self) -> Result<WindowId> {
        let id = self.open_window()?;
        tracing::info!(window_id = %id, "Browser started");
        Ok(id)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn windows(&self) -> &WindowRegistry {
        &self.windows
    }

    pub fn window_info(&self, window: WindowId) -> Result<WindowInfo> {
        Ok(self.windows.get(window)?.info())
    }

    /// Queue engine views post into. Cloning it is how a host hands it to
    /// engine threads.
    pub fn events(&self) -> EventQueue {
        self.events.clone()
    }

    /// False once the last window closed or `quit` ran; the host should
    /// leave its event loop.
    pub fn is_running(&self) -> bool {
        self.running
    }

    // === Window operations ===

    /// Build, show and register a new window with one tab on the home URL.
    /// A window whose first tab cannot be created is never registered.
    pub fn open_window(&mut self) -> Result<WindowId> {
        self.ensure_running()?;

        let id = WindowId::new();
        let tab = self.create_tab(id)?;

        let ui = self.toolkit.create_window_ui(id, &self.config);
        let mut window = Window::new(id, self.config.window_title.clone(), ui);
        window.show();

        let index = window.open_tab(tab);
        NavigationCommand::Load(self.config.home_url.clone()).apply(window.engine_mut(index)?);

        Ok(self.windows.insert(window))
    }

    /// Close a window and release all of its tabs
    pub fn close_window(&mut self, window: WindowId) -> Result<()> {
        let mut closed = self.windows.remove(window)?;
        closed.close();

        if self.windows.is_empty() {
            self.running = false;
            tracing::info!("Last window closed");
        }

        Ok(())
    }

    /// Release every window and tab and stop running
    pub fn quit(&mut self) {
        let mut released = 0;
        for mut window in self.windows.drain() {
            released += window.close();
        }
        self.events.clear();
        self.running = false;

        tracing::info!(released, "Browser quit");
    }

    // === Tab operations ===

    /// Append a tab navigated once to the home URL and make it active
    pub fn open_tab(&mut self, window: WindowId) -> Result<usize> {
        self.ensure_running()?;

        if !self.windows.contains(window) {
            return Err(SessionError::WindowNotFound(window).into());
        }

        let tab = self.create_tab(window)?;
        let home = self.config.home_url.clone();

        let target = self.windows.get_mut(window)?;
        let index = target.open_tab(tab);
        NavigationCommand::Load(home).apply(target.engine_mut(index)?);

        Ok(index)
    }

    /// Close the tab at `index`, releasing its engine view. Closing the last
    /// tab closes the window.
    pub fn close_tab(&mut self, window: WindowId, index: usize) -> Result<TabClosed> {
        let target = self.windows.get_mut(window)?;
        drop(target.close_tab(index)?);

        if target.tab_count() > 0 {
            return Ok(TabClosed::Remaining {
                active: target.active_tab()?,
            });
        }

        self.close_window(window)?;
        Ok(TabClosed::WindowClosed)
    }

    pub fn select_tab(&mut self, window: WindowId, index: usize) -> Result<()> {
        Ok(self.windows.get_mut(window)?.select_tab(index)?)
    }

    pub fn active_tab(&self, window: WindowId) -> Result<usize> {
        Ok(self.windows.get(window)?.active_tab()?)
    }

    /// Engine view of the tab at `index`
    pub fn resolve_engine(&self, window: WindowId, index: usize) -> Result<&dyn EngineView> {
        Ok(self.windows.get(window)?.engine(index)?)
    }

    fn create_tab(&mut self, window: WindowId) -> Result<Tab> {
        let id = TabId::new();
        let notifier = Notifier::new(window, id, self.events.clone());

        let view = self.engines.create_view(notifier).map_err(|e| {
            tracing::error!(window_id = %window, tab_id = %id, error = %e, "Engine view setup failed");
            CoreError::from(e)
        })?;

        Ok(Tab::new(id, view, self.config.new_tab_label.clone()))
    }

    pub(crate) fn ensure_running(&self) -> Result<()> {
        if self.running {
            Ok(())
        } else {
            Err(CoreError::NotRunning)
        }
    }
}
