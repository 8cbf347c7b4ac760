use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::format::{FontFamily, FontSpec};
use crate::app::infrastructure::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

/// User preferences. Read from disk when a settings file exists; the
/// application never writes one itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    #[serde(default = "default_font_family")]
    pub font_family: FontFamily,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_word_wrap")]
    pub word_wrap_enabled: bool,

    #[serde(default = "default_show_toolbar")]
    pub show_toolbar: bool,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::SystemDefault
}

fn default_font_family() -> FontFamily {
    FontFamily::Helvetica
}

fn default_font_size() -> u32 {
    14
}

fn default_word_wrap() -> bool {
    true
}

fn default_show_toolbar() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            word_wrap_enabled: default_word_wrap(),
            show_toolbar: default_show_toolbar(),
        }
    }
}

impl AppSettings {
    pub fn font(&self) -> FontSpec {
        FontSpec::new(self.font_family, self.font_size)
    }

    /// Load settings from the user config directory, or defaults if absent or unreadable.
    pub fn load() -> Self {
        let path = Self::get_config_path();
        match Self::load_from(&path) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Failed to read settings: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Parse the settings file at `path`. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("inkpad");
        path.push("settings.json");
        path
    }
}
