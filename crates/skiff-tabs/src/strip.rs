//! Tab Strip
//!
//! Ordered tab records for one window plus the active pointer. Index `i` in
//! the strip is tab `i` in the visual strip; the active index is always
//! `Some(i)` with `i < len` while any tab exists, `None` only when empty.

use skiff_navigation::EngineView;

use crate::error::TabError;
use crate::tab::{Tab, TabId, TabInfo};
use crate::Result;

#[derive(Debug, Default)]
pub struct TabStrip {
    tabs: Vec<Tab>,
    active: Option<usize>,
}

impl TabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Append a tab and make it active. Returns its index.
    pub fn push(&mut self, tab: Tab) -> usize {
        self.tabs.push(tab);
        let index = self.tabs.len() - 1;
        self.active = Some(index);
        index
    }

    /// Remove the tab at `index`.
    ///
    /// Active policy: a tab closed before the active one shifts the active
    /// index down; closing the active tab activates the tab that slides into
    /// its place, or the new last tab when it was at the end.
    pub fn remove(&mut self, index: usize) -> Result<Tab> {
        self.check_index(index)?;

        let tab = self.tabs.remove(index);
        let len = self.tabs.len();

        self.active = match self.active {
            _ if len == 0 => None,
            Some(active) if active > index => Some(active - 1),
            Some(active) if active == index => Some(index.min(len - 1)),
            other => other,
        };

        Ok(tab)
    }

    /// Remove every tab, leaving the strip empty
    pub fn drain(&mut self) -> Vec<Tab> {
        self.active = None;
        std::mem::take(&mut self.tabs)
    }

    pub fn select(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.active = Some(index);
        Ok(())
    }

    pub fn active(&self) -> Result<usize> {
        self.active.ok_or(TabError::NoActiveTab)
    }

    pub fn active_tab(&self) -> Result<&Tab> {
        let index = self.active()?;
        self.get(index)
    }

    pub fn active_tab_mut(&mut self) -> Result<&mut Tab> {
        let index = self.active()?;
        self.get_mut(index)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn get(&self, index: usize) -> Result<&Tab> {
        let len = self.tabs.len();
        self.tabs
            .get(index)
            .ok_or(TabError::IndexOutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Tab> {
        let len = self.tabs.len();
        self.tabs
            .get_mut(index)
            .ok_or(TabError::IndexOutOfRange { index, len })
    }

    /// Read-only lookup of the engine view at `index`
    pub fn engine(&self, index: usize) -> Result<&dyn EngineView> {
        Ok(self.get(index)?.engine())
    }

    pub fn engine_mut(&mut self, index: usize) -> Result<&mut dyn EngineView> {
        Ok(self.get_mut(index)?.engine_mut())
    }

    /// Current index of the tab with identity `id`
    pub fn position_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id() == id)
    }

    pub fn find(&self, id: TabId) -> Result<&Tab> {
        self.tabs
            .iter()
            .find(|tab| tab.id() == id)
            .ok_or(TabError::NotFound(id))
    }

    pub fn ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(Tab::id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    pub fn infos(&self) -> Vec<TabInfo> {
        self.tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| tab.info(index, self.is_active(index)))
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.tabs.len() {
            Ok(())
        } else {
            Err(TabError::IndexOutOfRange {
                index,
                len: self.tabs.len(),
            })
        }
    }
}
