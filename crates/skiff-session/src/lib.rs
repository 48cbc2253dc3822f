//! Skiff Session Management
//!
//! - A Window is a top-level shell instance: one tab strip plus the widgets
//!   (tab bar, address bar, status bar) that mirror it
//! - Every tab mutation goes through the Window so records and widgets move
//!   together
//! - The registry owns all live windows for the process lifetime
//! - Nothing is persisted across runs

mod error;
mod registry;
mod ui;
mod window;

pub use error::SessionError;
pub use registry::WindowRegistry;
pub use ui::{HeadlessUi, UiState, UiUpdate, WindowUi};
pub use window::{Window, WindowId, WindowInfo};

pub type Result<T> = std::result::Result<T, SessionError>;
