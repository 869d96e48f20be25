use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{AppResult, ConfigError};

use super::types::ConfigFile;

/// Looked up in the working directory, in order, when `--config` is absent.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["hydrate.toml", "hydrate.json"];

#[derive(Debug, Clone, Copy)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(OsStr::to_str) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some(ext) => Err(ConfigError::UnsupportedExtension {
                ext: ext.to_owned(),
            }),
            None => Err(ConfigError::MissingExtension),
        }
    }

    fn parse(self, path: &Path, content: &str) -> Result<ConfigFile, ConfigError> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|source| ConfigError::ParseToml {
                path: path.to_path_buf(),
                source,
            }),
            Self::Json => serde_json::from_str(content).map_err(|source| ConfigError::ParseJson {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Loads the explicit config file, or the first default file present.
///
/// # Errors
///
/// Returns an error when the chosen file cannot be read or parsed.
pub fn load_config(explicit: Option<&str>) -> AppResult<Option<ConfigFile>> {
    let path = match explicit {
        Some(path) => PathBuf::from(path),
        None => match DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.is_file())
        {
            Some(found) => found,
            None => return Ok(None),
        },
    };
    debug!("Loading config from {}", path.display());
    load_config_file(&path).map(Some)
}

pub(crate) fn load_config_file(path: &Path) -> AppResult<ConfigFile> {
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(format.parse(path, &content)?)
}
