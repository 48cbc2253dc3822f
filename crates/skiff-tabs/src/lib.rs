//! Skiff Tab Management
//!
//! A tab is one browsing context: an exclusively owned engine view plus the
//! address text, title and load progress shown for it. Tabs live in a single
//! ordered `TabStrip` per window, so the index a tab has in the strip is the
//! only index there is.

mod error;
mod progress;
mod strip;
mod tab;

pub use error::TabError;
pub use progress::LoadProgress;
pub use strip::TabStrip;
pub use tab::{Tab, TabId, TabInfo};

pub type Result<T> = std::result::Result<T, TabError>;
