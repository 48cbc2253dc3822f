//! Window Registry
//!
//! Owns every live window, in the order they were opened. Windows stay here
//! until they are closed, so nothing shown on screen is dropped early.

use crate::error::SessionError;
use crate::window::{Window, WindowId, WindowInfo};
use crate::Result;

#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: Vec<Window>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, window: Window) -> WindowId {
        let id = window.id();
        self.windows.push(window);

        tracing::info!(window_id = %id, window_count = self.windows.len(), "Registered window");

        id
    }

    pub fn get(&self, id: WindowId) -> Result<&Window> {
        self.windows
            .iter()
            .find(|w| w.id() == id)
            .ok_or(SessionError::WindowNotFound(id))
    }

    pub fn get_mut(&mut self, id: WindowId) -> Result<&mut Window> {
        self.windows
            .iter_mut()
            .find(|w| w.id() == id)
            .ok_or(SessionError::WindowNotFound(id))
    }

    /// Take a window out of the registry; the caller decides how to close it
    pub fn remove(&mut self, id: WindowId) -> Result<Window> {
        let position = self
            .windows
            .iter()
            .position(|w| w.id() == id)
            .ok_or(SessionError::WindowNotFound(id))?;

        Ok(self.windows.remove(position))
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.iter().any(|w| w.id() == id)
    }

    pub fn ids(&self) -> Vec<WindowId> {
        self.windows.iter().map(Window::id).collect()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Remove every window, oldest first
    pub fn drain(&mut self) -> Vec<Window> {
        std::mem::take(&mut self.windows)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }

    pub fn infos(&self) -> Vec<WindowInfo> {
        self.windows.iter().map(Window::info).collect()
    }
}
