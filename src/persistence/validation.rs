//! Structural validation of loaded save data
//!
//! Checks that every field is present and has the right shape. Values are
//! not range-checked: negative gold or health above max health load fine.

use crate::character::{Character, CharacterClass};
use crate::error::{CharacterError, CharacterResult};

use super::format::{FIELD_ORDER, FieldValue, LIST_FIELDS, NUMERIC_FIELDS, RawRecord};

/// Check presence and types of all record fields
pub fn validate_character_data(raw: &RawRecord) -> CharacterResult<()> {
    for key in FIELD_ORDER {
        if !raw.contains_key(key) {
            return Err(CharacterError::invalid_save_data(format!("Missing field: {key}")));
        }
    }

    for key in NUMERIC_FIELDS {
        if !matches!(raw.get(key), Some(FieldValue::Integer(_))) {
            return Err(CharacterError::invalid_save_data(format!(
                "{key} must be an integer"
            )));
        }
    }

    for key in LIST_FIELDS {
        if !matches!(raw.get(key), Some(FieldValue::List(_))) {
            return Err(CharacterError::invalid_save_data(format!("{key} must be a list")));
        }
    }

    Ok(())
}

/// Validate raw fields and build a record from them
pub fn into_character(mut raw: RawRecord) -> CharacterResult<Character> {
    validate_character_data(&raw)?;

    for key in raw.keys().filter(|k| !FIELD_ORDER.contains(&k.as_str())) {
        log::warn!("Ignoring unknown save field {key:?}");
    }

    let class_name = text(&mut raw, "class")?;
    let class = class_name.parse::<CharacterClass>().map_err(|_| {
        CharacterError::invalid_save_data(format!("Invalid class: {class_name}"))
    })?;

    Ok(Character {
        name: text(&mut raw, "name")?,
        class,
        level: integer(&raw, "level")?,
        health: integer(&raw, "health")?,
        max_health: integer(&raw, "max_health")?,
        strength: integer(&raw, "strength")?,
        magic: integer(&raw, "magic")?,
        experience: integer(&raw, "experience")?,
        gold: integer(&raw, "gold")?,
        inventory: list(&mut raw, "inventory")?,
        active_quests: list(&mut raw, "active_quests")?,
        completed_quests: list(&mut raw, "completed_quests")?,
    })
}

fn text(raw: &mut RawRecord, key: &str) -> CharacterResult<String> {
    match raw.remove(key) {
        Some(FieldValue::Text(s)) => Ok(s),
        Some(other) => Err(CharacterError::invalid_save_data(format!(
            "{key} must be text, found {}",
            other.kind()
        ))),
        None => Err(CharacterError::invalid_save_data(format!("Missing field: {key}"))),
    }
}

fn integer(raw: &RawRecord, key: &str) -> CharacterResult<i64> {
    match raw.get(key) {
        Some(FieldValue::Integer(n)) => Ok(*n),
        _ => Err(CharacterError::invalid_save_data(format!("{key} must be an integer"))),
    }
}

fn list(raw: &mut RawRecord, key: &str) -> CharacterResult<Vec<String>> {
    match raw.remove(key) {
        Some(FieldValue::List(items)) => Ok(items),
        _ => Err(CharacterError::invalid_save_data(format!("{key} must be a list"))),
    }
}
