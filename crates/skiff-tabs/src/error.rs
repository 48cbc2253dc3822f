//! Tab error types

use thiserror::Error;

use crate::tab::TabId;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TabError {
    #[error("Tab index {index} out of range ({len} tabs)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Tab not found: {0}")]
    NotFound(TabId),

    #[error("No active tab")]
    NoActiveTab,
}
