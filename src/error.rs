//! Error types for character operations
//!
//! Every failure is raised where it is detected and handed straight back to
//! the caller. Nothing here retries, prints or recovers.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the factory, persistence and progression operations
#[derive(Debug, Error)]
pub enum CharacterError {
    /// Class name is not one of the known archetypes
    #[error("Invalid character class: {0}")]
    InvalidCharacterClass(String),

    /// No save file exists for the requested name
    #[error("No save file found for {name}")]
    CharacterNotFound { name: String },

    /// Save file exists but could not be read
    #[error("Could not read save file {}: {source}", .path.display())]
    SaveFileCorrupted {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Save file was read but its content is malformed
    #[error("Invalid save data: {0}")]
    InvalidSaveData(String),

    /// Operation requires a living character
    #[error("{name} is dead")]
    CharacterDead { name: String },

    /// Save directory could not be created or listed
    #[error("Save directory unavailable {}: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing or deleting a save file failed
    #[error("Unable to {action} save file {}: {source}", .path.display())]
    StorageWriteFailed {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Argument rejected by a progression or journal operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Item is not in the inventory
    #[error("Item not in inventory: {0}")]
    ItemNotFound(String),

    /// Quest is not in the active quest list
    #[error("Quest is not active: {0}")]
    QuestNotActive(String),

    /// Config file could not be read
    #[error("Could not read config {}: {source}", .path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid JSON for `SaveConfig`
    #[error("Invalid config: {0}")]
    ConfigInvalid(#[from] serde_json::Error),
}

/// Result type for character operations
pub type CharacterResult<T> = Result<T, CharacterError>;

impl CharacterError {
    pub fn invalid_save_data(msg: impl Into<String>) -> Self {
        Self::InvalidSaveData(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::CharacterNotFound { name: name.into() }
    }
}
