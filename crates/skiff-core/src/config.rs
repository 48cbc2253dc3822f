//! Browser configuration

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::CoreError;
use crate::print::PrinterConfig;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Loaded by new tabs and the Home action
    pub home_url: String,
    pub window_title: String,
    /// Tab strip label until the page reports a title
    pub new_tab_label: String,
    /// Scheme assumed for addresses typed without one
    pub default_scheme: String,
    pub min_window_size: WindowSize,
    pub printer: PrinterConfig,
}

impl Config {
    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.home_url)
            .map_err(|e| CoreError::Config(format!("home_url {:?}: {}", self.home_url, e)))?;

        if self.default_scheme.trim().is_empty() {
            return Err(CoreError::Config(
                "default_scheme cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_url: "https://www.python.org".to_string(),
            window_title: "My Web Browser".to_string(),
            new_tab_label: "New Tab".to_string(),
            default_scheme: skiff_navigation::DEFAULT_SCHEME.to_string(),
            min_window_size: WindowSize {
                width: 400,
                height: 300,
            },
            printer: PrinterConfig::default(),
        }
    }
}
