//! Menu and toolbar actions
//!
//! Static description of what the window chrome offers. The toolkit builds
//! its widgets from these tables and dispatches the attached `Command`.

use serde::Serialize;

use crate::command::Command;

pub const ADDRESS_PLACEHOLDER: &str = "Enter Website Address";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub label: &'static str,
    /// Key chord in `Ctrl+X` form
    pub shortcut: Option<&'static str>,
    /// Icon resource name
    pub icon: Option<&'static str>,
    pub command: Command,
}

impl Action {
    fn new(label: &'static str, command: Command) -> Self {
        Self {
            label,
            shortcut: None,
            icon: None,
            command,
        }
    }

    fn shortcut(mut self, keys: &'static str) -> Self {
        self.shortcut = Some(keys);
        self
    }

    fn icon(mut self, name: &'static str) -> Self {
        self.icon = Some(name);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuEntry {
    Action(Action),
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToolbarItem {
    Action(Action),
    AddressBar {
        placeholder: &'static str,
        icon: &'static str,
    },
}

/// The File menu, top to bottom
pub fn file_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::Action(Action::new("New Window", Command::NewWindow).shortcut("Ctrl+N")),
        MenuEntry::Separator,
        MenuEntry::Action(Action::new("New Tab", Command::NewTab).shortcut("Ctrl+T")),
        MenuEntry::Separator,
        MenuEntry::Action(Action::new("Reload Page", Command::Reload).shortcut("Ctrl+R")),
        MenuEntry::Separator,
        MenuEntry::Action(Action::new("Print Page", Command::Print).shortcut("Ctrl+P")),
        MenuEntry::Separator,
        MenuEntry::Action(Action::new("Quit From Browser", Command::Quit).shortcut("Ctrl+Q")),
    ]
}

/// The navigation toolbar, left to right
pub fn toolbar() -> Vec<ToolbarItem> {
    vec![
        ToolbarItem::Action(Action::new("Home", Command::Home).icon("home")),
        ToolbarItem::Action(Action::new("Back", Command::Back).icon("back")),
        ToolbarItem::Action(Action::new("Forward", Command::Forward).icon("forward")),
        ToolbarItem::Action(Action::new("Refresh", Command::Reload).icon("refresh")),
        ToolbarItem::Action(Action::new("Print Page", Command::Print).icon("print")),
        ToolbarItem::AddressBar {
            placeholder: ADDRESS_PLACEHOLDER,
            icon: "find",
        },
        ToolbarItem::Action(Action::new("Stop", Command::Stop).icon("stop")),
    ]
}

/// Shortcut as shown to the user on this platform
pub fn display_shortcut(keys: &str) -> String {
    if cfg!(target_os = "macos") {
        keys.replace("Ctrl+", "Cmd+")
    } else {
        keys.to_string()
    }
}

/// Command bound to a key chord in the File menu.
///
/// Matching ignores case and spaces and treats `Cmd` as `Ctrl`, so
/// `"ctrl + t"` and `"Cmd+T"` both find New Tab.
pub fn command_for_shortcut(keys: &str) -> Option<Command> {
    let wanted = normalize_chord(keys);

    file_menu().into_iter().find_map(|entry| match entry {
        MenuEntry::Action(action)
            if action.shortcut.map(normalize_chord).as_deref() == Some(wanted.as_str()) =>
        {
            Some(action.command)
        }
        _ => None,
    })
}

fn normalize_chord(keys: &str) -> String {
    keys.split('+')
        .map(|part| match part.trim().to_lowercase().as_str() {
            "cmd" | "command" | "control" => "ctrl".to_string(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join("+")
}
