//! Single navigation commands issued against an engine view

use serde::{Deserialize, Serialize};

use crate::engine::EngineView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationCommand {
    Back,
    Forward,
    Reload,
    /// Abort the in-flight load
    Stop,
    /// Load a resolved URL
    Load(String),
}

impl NavigationCommand {
    /// Issue this command on `view`. Exactly one engine call per command.
    pub fn apply(&self, view: &mut dyn EngineView) {
        tracing::debug!(command = %self.as_str(), "Navigation command");

        match self {
            NavigationCommand::Back => view.back(),
            NavigationCommand::Forward => view.forward(),
            NavigationCommand::Reload => view.reload(),
            NavigationCommand::Stop => view.stop(),
            NavigationCommand::Load(url) => view.load(url),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationCommand::Back => "back",
            NavigationCommand::Forward => "forward",
            NavigationCommand::Reload => "reload",
            NavigationCommand::Stop => "stop",
            NavigationCommand::Load(_) => "load",
        }
    }
}

impl std::fmt::Display for NavigationCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavigationCommand::Load(url) => write!(f, "load {}", url),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
