use json_comments::StripComments;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("HOME directory not found")]
    HomeNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Defaults for the command-line client, read from
/// `~/.licensed-client/settings.json`. Comments are allowed.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub license_key: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
}

impl Settings {
    /// # Errors
    ///
    /// Fails when the home directory is unknown or the file exists but cannot
    /// be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::settings_path()?;
        Self::load_from(&path)
    }

    /// Missing files yield the default settings.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_reader(StripComments::new(content.as_bytes())).map_err(|source| {
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// # Errors
    ///
    /// [`ConfigError::HomeNotFound`] when no home directory can be resolved.
    pub fn settings_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
        Ok(home.join(".licensed-client").join("settings.json"))
    }
}
