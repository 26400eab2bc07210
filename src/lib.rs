//! Quest Chronicles - character records for a small RPG
//!
//! Core modules:
//! - `character`: Class archetypes, record factory, progression and journal
//! - `persistence`: Flat `KEY: value` save files, validation, save directory store
//! - `config`: Save directory configuration
//! - `error`: Error taxonomy shared by every operation

pub mod character;
pub mod config;
pub mod error;
pub mod persistence;

pub use character::{
    Character, CharacterClass, accept_quest, add_gold, add_item, complete_quest,
    create_character, gain_experience, heal_character, is_character_dead, remove_item,
    revive_character,
};
pub use config::SaveConfig;
pub use error::{CharacterError, CharacterResult};
pub use persistence::{
    FieldValue, RawRecord, SaveStore, delete_character, list_saved_characters, load_character,
    save_character, save_exists, validate_character_data,
};

/// Game balance and storage constants
pub mod consts {
    /// Gold every new character starts with
    pub const STARTING_GOLD: i64 = 100;
    /// Level starting point for new characters
    pub const STARTING_LEVEL: i64 = 1;
    /// Experience needed per level (threshold = level * XP_PER_LEVEL)
    pub const XP_PER_LEVEL: i64 = 100;

    /// Stat gains applied on every level-up
    pub const LEVEL_UP_MAX_HEALTH: i64 = 10;
    pub const LEVEL_UP_STRENGTH: i64 = 2;
    pub const LEVEL_UP_MAGIC: i64 = 2;

    /// Default save directory (relative to the working directory)
    pub const DEFAULT_SAVE_DIR: &str = "data/save_games";
    /// Every save file is named `<name>` + this suffix
    pub const SAVE_FILE_SUFFIX: &str = "_save.txt";
}

/// Experience needed to leave `level`, `None` on overflow
#[inline]
pub fn level_threshold(level: i64) -> Option<i64> {
    level.checked_mul(consts::XP_PER_LEVEL)
}
