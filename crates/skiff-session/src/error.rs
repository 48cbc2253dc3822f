//! Session error types

use thiserror::Error;

use crate::window::WindowId;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Window not found: {0}")]
    WindowNotFound(WindowId),

    #[error("Tab error: {0}")]
    Tab(#[from] skiff_tabs::TabError),
}
