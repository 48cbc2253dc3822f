//! Tab record
//!
//! Bundles everything the window shows for one browsing context:
//! - the engine view (owned, released on drop)
//! - address bar text
//! - tab strip label
//! - load progress

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skiff_navigation::EngineView;
use uuid::Uuid;

use crate::progress::LoadProgress;

/// Stable identity of a tab, independent of its position in the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(Uuid);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct Tab {
    id: TabId,
    /// Exclusively owned; no other tab ever holds this view
    engine: Box<dyn EngineView>,
    address_text: String,
    title: String,
    progress: LoadProgress,
    opened_at: DateTime<Utc>,
}

impl Tab {
    pub fn new(id: TabId, engine: Box<dyn EngineView>, title: impl Into<String>) -> Self {
        Self {
            id,
            engine,
            address_text: String::new(),
            title: title.into(),
            progress: LoadProgress::Idle,
            opened_at: Utc::now(),
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn engine(&self) -> &dyn EngineView {
        self.engine.as_ref()
    }

    pub fn engine_mut(&mut self) -> &mut dyn EngineView {
        self.engine.as_mut()
    }

    pub fn address_text(&self) -> &str {
        &self.address_text
    }

    pub fn set_address_text(&mut self, text: impl Into<String>) {
        self.address_text = text.into();
    }

    pub fn clear_address_text(&mut self) {
        self.address_text.clear();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn progress(&self) -> LoadProgress {
        self.progress
    }

    /// Record an engine progress report and return the new state
    pub fn set_progress(&mut self, percent: u32) -> LoadProgress {
        let next = LoadProgress::from_percent(percent);

        if let (Some(prev), Some(now)) = (self.progress.percent(), next.percent()) {
            if now < prev {
                tracing::debug!(tab_id = %self.id, from = prev, to = now, "Load restarted");
            }
        }

        self.progress = next;
        next
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn info(&self, index: usize, is_active: bool) -> TabInfo {
        TabInfo {
            id: self.id,
            index,
            title: self.title.clone(),
            address: self.address_text.clone(),
            progress: self.progress,
            is_active,
            opened_at: self.opened_at,
        }
    }
}

impl std::fmt::Debug for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tab")
            .field("id", &self.id)
            .field("address_text", &self.address_text)
            .field("title", &self.title)
            .field("progress", &self.progress)
            .finish_non_exhaustive()
    }
}

/// Serializable view of a tab for the host UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: TabId,
    pub index: usize,
    pub title: String,
    pub address: String,
    pub progress: LoadProgress,
    pub is_active: bool,
    pub opened_at: DateTime<Utc>,
}
