//! Shell configuration

use serde::{Deserialize, Serialize};

use delta_tabs::TabDefaults;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name template and placeholder body for new tabs
    pub tabs: TabDefaults,
    /// Options handed to the editor widget when it boots
    pub editor: EditorOptions,
    /// Editor text used if no active tab can be found on attach
    pub empty_editor_text: String,
}

impl Config {
    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tabs.name_template.trim().is_empty() {
            return Err(CoreError::Config(
                "tab name template cannot be empty".to_string(),
            ));
        }
        if self.editor.font_size == 0 {
            return Err(CoreError::Config("font size must be positive".to_string()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tabs: TabDefaults::default(),
            editor: EditorOptions::default(),
            empty_editor_text: "-- Start coding here...".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Syntax mode
    pub language: String,
    /// Theme registered by the webview
    pub theme: String,
    pub font_size: u32,
    pub font_family: String,
    pub line_height: u32,
    pub minimap: bool,
    pub minimap_max_column: u32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            language: "lua".to_string(),
            theme: "deltaTheme".to_string(),
            font_size: 11,
            font_family: "'Consolas', 'Monaco', 'Courier New', monospace".to_string(),
            line_height: 16,
            minimap: true,
            minimap_max_column: 60,
        }
    }
}
