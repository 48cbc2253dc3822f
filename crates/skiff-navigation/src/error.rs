//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Address is empty")]
    EmptyInput,

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Failures reported by the web engine while wiring up a new view
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to create engine view: {0}")]
    Setup(String),

    #[error("Failed to connect {signal} notification")]
    Connect { signal: &'static str },
}
