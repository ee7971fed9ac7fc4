use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Initial logical window size.
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    /// Start the external engine on the viewport surface.
    #[serde(default = "default_run_engine")]
    pub run_engine: bool,

    /// Forces a scale factor instead of the one reported by the platform.
    #[serde(default)]
    pub dpi_override: Option<f64>,
}

fn default_title() -> String {
    "Kirana".to_string()
}
fn default_width() -> u32 {
    1280
}
fn default_height() -> u32 {
    720
}
fn default_run_engine() -> bool {
    true
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            run_engine: default_run_engine(),
            dpi_override: None,
        }
    }
}

impl ViewportConfig {
    pub fn from_toml_str(path: &str, s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Missing file means defaults; anything else unreadable is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        match fs::read_to_string(path) {
            Ok(s) => Self::from_toml_str(&shown, &s),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read { path: shown, source }),
        }
    }
}
