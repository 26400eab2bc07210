//! Save configuration
//!
//! The save directory is always passed in explicitly; this is the one place
//! a default lives.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SAVE_DIR;
use crate::error::{CharacterError, CharacterResult};

/// Where character saves live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveConfig {
    /// Flat directory holding one `<name>_save.txt` per character
    pub save_directory: PathBuf,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            save_directory: PathBuf::from(DEFAULT_SAVE_DIR),
        }
    }
}

impl SaveConfig {
    pub fn new(save_directory: impl Into<PathBuf>) -> Self {
        Self {
            save_directory: save_directory.into(),
        }
    }

    /// Load config from a JSON file; missing fields use defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> CharacterResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CharacterError::ConfigUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SaveConfig = serde_json::from_str(&json)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_directory() {
        assert_eq!(
            SaveConfig::default().save_directory,
            PathBuf::from("data/save_games")
        );
    }

    #[test]
    fn test_from_json_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, r#"{ "save_directory": "/srv/saves" }"#).unwrap();

        let config = SaveConfig::from_json_file(&path).unwrap();
        assert_eq!(config, SaveConfig::new("/srv/saves"));
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        assert_eq!(SaveConfig::from_json_file(&path).unwrap(), SaveConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = SaveConfig::from_json_file(tmp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CharacterError::ConfigUnreadable { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, "save_directory = 3").unwrap();

        let err = SaveConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(err, CharacterError::ConfigInvalid(_)));
    }
}
