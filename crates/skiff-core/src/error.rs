//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Session error: {0}")]
    Session(#[from] skiff_session::SessionError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] skiff_navigation::NavigationError),

    #[error("Print error: {0}")]
    Print(#[from] crate::print::PrintError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Browser is not running")]
    NotRunning,
}

impl From<skiff_tabs::TabError> for CoreError {
    fn from(err: skiff_tabs::TabError) -> Self {
        CoreError::Session(err.into())
    }
}

impl From<skiff_navigation::EngineError> for CoreError {
    fn from(err: skiff_navigation::EngineError) -> Self {
        CoreError::Navigation(err.into())
    }
}
