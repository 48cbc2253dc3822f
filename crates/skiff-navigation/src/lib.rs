//! Skiff Navigation
//!
//! Everything the shell needs to drive a page without knowing how it is drawn:
//! - the engine view contract (load, back, forward, reload, stop, title, surface)
//! - single navigation commands issued by toolbar and menu actions
//! - address bar input resolution with a default scheme

mod command;
mod engine;
mod error;
mod input;

pub use command::NavigationCommand;
pub use engine::{EngineView, Raster};
pub use error::{EngineError, NavigationError};
pub use input::{AddressResolver, DEFAULT_SCHEME};

pub type Result<T> = std::result::Result<T, NavigationError>;
