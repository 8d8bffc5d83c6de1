// src/settings.rs

use crate::error::{NotasError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILENAME: &str = "notas.txt";

/// The two persisted options. Re-read from disk at the start of every
/// command; the stored filename is trusted as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub filename: String,
    pub use_external_storage: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            filename: DEFAULT_FILENAME.to_string(),
            use_external_storage: false,
        }
    }
}

/// Standard location of the settings file (~/.config/notas/config.toml).
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or(NotasError::HomeDirNotFound)?;
    Ok(config_dir.join("notas").join("config.toml"))
}

impl Settings {
    pub fn load() -> Result<Settings> {
        Settings::load_from(&config_path()?)
    }

    /// A missing file means the defaults; an unparsable one is an error.
    pub fn load_from(path: &Path) -> Result<Settings> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn storage_label(&self) -> &'static str {
        if self.use_external_storage {
            "external"
        } else {
            "internal"
        }
    }
}
