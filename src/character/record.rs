//! Character record and factory
//!
//! A record is owned by the caller. Saving snapshots it to disk, loading
//! builds a fresh record; the two are only linked by `name`.

use serde::Serialize;

use super::class::CharacterClass;
use crate::consts::*;
use crate::error::{CharacterError, CharacterResult};

/// Full state of one character
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    /// Unique within a save directory, also names the save file
    pub name: String,
    pub class: CharacterClass,
    pub level: i64,
    /// Zero or below means dead
    pub health: i64,
    pub max_health: i64,
    pub strength: i64,
    pub magic: i64,
    /// Progress toward the next level, below `level * XP_PER_LEVEL` after any gain
    pub experience: i64,
    pub gold: i64,
    /// Item ids in acquisition order
    pub inventory: Vec<String>,
    pub active_quests: Vec<String>,
    pub completed_quests: Vec<String>,
}

impl Character {
    /// Build a level-1 character from a class archetype
    pub fn new(name: impl Into<String>, class: CharacterClass) -> Self {
        let base = class.archetype();
        Self {
            name: name.into(),
            class,
            level: STARTING_LEVEL,
            health: base.health,
            max_health: base.health,
            strength: base.strength,
            magic: base.magic,
            experience: 0,
            gold: STARTING_GOLD,
            inventory: Vec::new(),
            active_quests: Vec::new(),
            completed_quests: Vec::new(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

/// Check that a name can be used as a save file stem
///
/// Rejects empty names, path separators, `.`/`..` and line breaks (which
/// would split the `NAME:` line of a save file).
pub fn validate_name(name: &str) -> CharacterResult<()> {
    if name.is_empty() {
        return Err(CharacterError::invalid_argument("Character name cannot be empty"));
    }
    if name == "." || name == ".." {
        return Err(CharacterError::invalid_argument(format!(
            "Character name cannot be {name:?}"
        )));
    }
    if let Some(c) = name.chars().find(|c| matches!(c, '/' | '\\' | '\n' | '\r' | '\0')) {
        return Err(CharacterError::invalid_argument(format!(
            "Character name cannot contain {c:?}"
        )));
    }
    Ok(())
}

/// Create a character from a name and an exact class name
pub fn create_character(name: &str, character_class: &str) -> CharacterResult<Character> {
    let class: CharacterClass = character_class.parse()?;
    validate_name(name)?;
    Ok(Character::new(name, class))
}
