//! Window data structure
//!
//! Owns the tab strip and the window's widget sink. Each method that changes
//! the strip pushes the matching widget updates before returning, so the
//! visual strip never disagrees with the records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skiff_navigation::EngineView;
use skiff_tabs::{LoadProgress, Tab, TabId, TabInfo, TabStrip};
use uuid::Uuid;

use crate::ui::{UiUpdate, WindowUi};
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(Uuid);

impl WindowId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WindowId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct Window {
    id: WindowId,
    title: String,
    tabs: TabStrip,
    ui: Box<dyn WindowUi>,
    created_at: DateTime<Utc>,
}

impl Window {
    pub fn new(id: WindowId, title: impl Into<String>, ui: Box<dyn WindowUi>) -> Self {
        Self {
            id,
            title: title.into(),
            tabs: TabStrip::new(),
            ui,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn tabs(&self) -> &TabStrip {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn show(&mut self) {
        self.ui.apply(UiUpdate::WindowShown {
            title: self.title.clone(),
        });
    }

    /// Append `tab` to the strip, select it and return its index
    pub fn open_tab(&mut self, tab: Tab) -> usize {
        let label = tab.title().to_string();
        let tab_id = tab.id();

        let index = self.tabs.push(tab);
        self.ui.apply(UiUpdate::TabInserted { index, label });
        self.sync_active();

        tracing::info!(window_id = %self.id, tab_id = %tab_id, index, "Opened tab");

        index
    }

    /// Remove the tab at `index`. The returned record still owns its engine
    /// view; dropping it releases the view.
    pub fn close_tab(&mut self, index: usize) -> Result<Tab> {
        let tab = self.tabs.remove(index)?;
        self.ui.apply(UiUpdate::TabRemoved { index });

        if !self.tabs.is_empty() {
            self.sync_active();
        }

        tracing::info!(
            window_id = %self.id,
            tab_id = %tab.id(),
            index,
            remaining = self.tabs.len(),
            "Closed tab"
        );

        Ok(tab)
    }

    pub fn select_tab(&mut self, index: usize) -> Result<()> {
        self.tabs.select(index)?;
        self.sync_active();
        Ok(())
    }

    pub fn active_tab(&self) -> Result<usize> {
        Ok(self.tabs.active()?)
    }

    pub fn active_tab_id(&self) -> Result<TabId> {
        Ok(self.tabs.active_tab()?.id())
    }

    pub fn tab(&self, index: usize) -> Result<&Tab> {
        Ok(self.tabs.get(index)?)
    }

    pub fn position_of(&self, id: TabId) -> Option<usize> {
        self.tabs.position_of(id)
    }

    pub fn engine(&self, index: usize) -> Result<&dyn EngineView> {
        Ok(self.tabs.engine(index)?)
    }

    pub fn engine_mut(&mut self, index: usize) -> Result<&mut dyn EngineView> {
        Ok(self.tabs.engine_mut(index)?)
    }

    pub fn active_engine_mut(&mut self) -> Result<&mut dyn EngineView> {
        let index = self.tabs.active()?;
        self.engine_mut(index)
    }

    /// Store `text` as the tab's address text and show it in its field
    pub fn set_address_text(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        self.tabs.get_mut(index)?.set_address_text(text.clone());
        self.ui.apply(UiUpdate::AddressText { index, text });
        Ok(())
    }

    pub fn clear_address_text(&mut self, index: usize) -> Result<()> {
        self.set_address_text(index, String::new())
    }

    pub fn set_tab_title(&mut self, index: usize, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        self.tabs.get_mut(index)?.set_title(title.clone());
        self.ui.apply(UiUpdate::TabLabel { index, title });
        Ok(())
    }

    /// Record a progress report for the tab at `index`. The status bar only
    /// follows the active tab.
    pub fn set_tab_progress(&mut self, index: usize, percent: u32) -> Result<LoadProgress> {
        let progress = self.tabs.get_mut(index)?.set_progress(percent);

        if self.tabs.is_active(index) {
            self.show_progress(progress);
        }

        Ok(progress)
    }

    /// Release every tab and tell the toolkit the window is gone. Returns
    /// the number of engine views released.
    pub fn close(&mut self) -> usize {
        let released = self.tabs.drain().len();
        self.ui.apply(UiUpdate::WindowClosed);

        tracing::info!(window_id = %self.id, released, "Closed window");

        released
    }

    pub fn info(&self) -> WindowInfo {
        WindowInfo {
            id: self.id,
            title: self.title.clone(),
            active_tab: self.tabs.active().ok(),
            tabs: self.tabs.infos(),
            created_at: self.created_at,
        }
    }

    /// Point the tab bar, address bar and status bar at the active tab
    fn sync_active(&mut self) {
        let Ok(index) = self.tabs.active() else {
            return;
        };
        let Ok(tab) = self.tabs.get(index) else {
            return;
        };

        let text = tab.address_text().to_string();
        let progress = tab.progress();

        self.ui.apply(UiUpdate::TabSelected { index });
        self.ui.apply(UiUpdate::AddressText { index, text });
        self.show_progress(progress);
    }

    fn show_progress(&mut self, progress: LoadProgress) {
        match (progress.percent(), progress.status_message()) {
            (Some(percent), Some(message)) => {
                self.ui.apply(UiUpdate::ProgressShown { percent, message })
            }
            _ => self.ui.apply(UiUpdate::ProgressHidden),
        }
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("tabs", &self.tabs)
            .finish_non_exhaustive()
    }
}

/// Serializable view of a window for the host UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowInfo {
    pub id: WindowId,
    pub title: String,
    pub active_tab: Option<usize>,
    pub tabs: Vec<TabInfo>,
    pub created_at: DateTime<Utc>,
}
