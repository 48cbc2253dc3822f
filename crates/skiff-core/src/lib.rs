//! Skiff Core
//!
//! Central coordination layer for the Skiff browser shell.
//! The engine renders and navigates; the core decides which tab an action
//! or a notification belongs to and keeps every window's widgets in step.

mod actions;
mod browser;
mod command;
mod config;
mod controller;
mod error;
mod events;
mod platform;
mod print;
mod reporter;

#[cfg(test)]
mod test_support;

pub use actions::{
    command_for_shortcut, display_shortcut, file_menu, toolbar, Action, MenuEntry, ToolbarItem,
    ADDRESS_PLACEHOLDER,
};
pub use browser::{Browser, TabClosed};
pub use command::{Command, Outcome};
pub use config::{Config, WindowSize};
pub use error::CoreError;
pub use events::{EngineEvent, EngineEventKind, EventQueue, Notifier};
pub use platform::{EngineFactory, HeadlessToolkit, UiFactory};
pub use print::{
    fit_to_page, print_surface, DialogOutcome, OutputFormat, PageRect, PrintError, PrintOutcome,
    PrintService, PrinterConfig,
};

// Re-export core components
pub use skiff_navigation::{
    AddressResolver, EngineError, EngineView, NavigationCommand, NavigationError, Raster,
};
pub use skiff_session::{
    HeadlessUi, SessionError, UiState, UiUpdate, Window, WindowId, WindowInfo, WindowRegistry,
    WindowUi,
};
pub use skiff_tabs::{LoadProgress, Tab, TabError, TabId, TabInfo, TabStrip};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
