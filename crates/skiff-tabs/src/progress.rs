//! Load progress
//!
//! ```text
//! Idle
//!   ↓ progress < 100
//! Loading(percent)
//!   ↓ progress == 100
//! Idle
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "state", content = "percent")]
pub enum LoadProgress {
    /// Nothing in flight, or the last load completed
    #[default]
    Idle,
    /// Load in flight, percent in `0..100`
    Loading(u8),
}

impl LoadProgress {
    /// Map an engine progress report onto a state. Values above 100 are
    /// treated as completion.
    pub fn from_percent(percent: u32) -> Self {
        match percent.min(100) {
            100 => LoadProgress::Idle,
            p => LoadProgress::Loading(p as u8),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadProgress::Loading(_))
    }

    pub fn percent(&self) -> Option<u8> {
        match self {
            LoadProgress::Loading(p) => Some(*p),
            LoadProgress::Idle => None,
        }
    }

    /// Status bar text while loading
    pub fn status_message(&self) -> Option<String> {
        self.percent()
            .map(|p| format!("Loading Page ... ({}/100). Please Wait...", p))
    }
}

impl std::fmt::Display for LoadProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadProgress::Idle => write!(f, "idle"),
            LoadProgress::Loading(p) => write!(f, "loading {}%", p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_percent() {
        assert_eq!(LoadProgress::from_percent(0), LoadProgress::Loading(0));
        assert_eq!(LoadProgress::from_percent(55), LoadProgress::Loading(55));
        assert_eq!(LoadProgress::from_percent(100), LoadProgress::Idle);
        assert_eq!(LoadProgress::from_percent(250), LoadProgress::Idle);
    }

    #[test]
    fn test_status_message() {
        assert_eq!(
            LoadProgress::Loading(10).status_message().as_deref(),
            Some("Loading Page ... (10/100). Please Wait...")
        );
        assert!(LoadProgress::Idle.status_message().is_none());
    }
}
