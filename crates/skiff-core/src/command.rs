//! Window commands
//!
//! The closed set of actions a window's menus, toolbar, tab bar and address
//! bar can trigger, and what dispatching one produced.

use serde::{Deserialize, Serialize};
use skiff_session::WindowId;

use crate::browser::TabClosed;
use crate::print::PrintOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "arg", rename_all = "snake_case")]
pub enum Command {
    NewWindow,
    NewTab,
    CloseTab(usize),
    SelectTab(usize),
    Back,
    Forward,
    Reload,
    Stop,
    Home,
    /// Text typed into the address bar of the active tab
    EditAddress(String),
    /// Address bar commit (Enter)
    SubmitAddress,
    Print,
    CloseWindow,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done,
    WindowOpened(WindowId),
    TabOpened(usize),
    TabClosed(TabClosed),
    /// Navigation issued to this exact URL
    Navigated(String),
    /// Address text was not a URL; the field was cleared
    AddressCleared,
    Printed(PrintOutcome),
    Quit,
}
