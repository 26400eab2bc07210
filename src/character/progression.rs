//! Progression: experience, leveling, gold, healing and revival
//!
//! All operations mutate the caller's record in place.

use crate::consts::*;
use crate::error::{CharacterError, CharacterResult};
use crate::level_threshold;

use super::record::Character;

/// Add experience and apply every level-up it pays for
///
/// A large gain can cross several thresholds in one call. Each level-up
/// raises max health, strength and magic, then restores health to full.
/// Negative levels are rejected: the loop would climb one level per pass
/// until the threshold turns positive. The record is left untouched if any
/// stat would overflow.
pub fn gain_experience(character: &mut Character, amount: u32) -> CharacterResult<&mut Character> {
    if character.is_dead() {
        return Err(CharacterError::CharacterDead {
            name: character.name.clone(),
        });
    }
    if character.level < 0 {
        return Err(CharacterError::invalid_argument(format!(
            "level cannot be negative, found {}",
            character.level
        )));
    }

    let mut level = character.level;
    let mut experience = checked(
        character.experience.checked_add(i64::from(amount)),
        "experience",
    )?;
    let mut max_health = character.max_health;
    let mut strength = character.strength;
    let mut magic = character.magic;
    let mut levels_gained = 0;

    loop {
        let threshold = checked(level_threshold(level), "level threshold")?;
        if experience < threshold {
            break;
        }
        experience -= threshold;
        level = checked(level.checked_add(1), "level")?;
        max_health = checked(max_health.checked_add(LEVEL_UP_MAX_HEALTH), "max_health")?;
        strength = checked(strength.checked_add(LEVEL_UP_STRENGTH), "strength")?;
        magic = checked(magic.checked_add(LEVEL_UP_MAGIC), "magic")?;
        levels_gained += 1;
    }

    character.experience = experience;
    if levels_gained > 0 {
        character.level = level;
        character.max_health = max_health;
        character.strength = strength;
        character.magic = magic;
        character.health = max_health;
        log::info!("{} reached level {}", character.name, character.level);
    }

    Ok(character)
}

/// Add (or spend, with a negative amount) gold; returns the new total
pub fn add_gold(character: &mut Character, amount: i64) -> CharacterResult<i64> {
    let new_total = checked(character.gold.checked_add(amount), "gold")?;
    if new_total < 0 {
        return Err(CharacterError::invalid_argument(format!(
            "Gold cannot go negative ({} + {amount})",
            character.gold
        )));
    }
    character.gold = new_total;
    Ok(new_total)
}

/// Heal up to `max_health`; returns the amount actually applied
///
/// Health saturates at the `i64` bounds.
pub fn heal_character(character: &mut Character, amount: i64) -> i64 {
    let missing = character.max_health.saturating_sub(character.health);
    let healed = character.health.saturating_add(amount.min(missing));
    let applied = healed - character.health;
    character.health = healed;
    applied
}

pub fn is_character_dead(character: &Character) -> bool {
    character.is_dead()
}

/// Bring a dead character back at half max health (at least 1)
///
/// Returns false and leaves the record untouched if the character is alive.
pub fn revive_character(character: &mut Character) -> bool {
    if !character.is_dead() {
        return false;
    }
    character.health = (character.max_health / 2).max(1);
    log::info!("{} revived with {} health", character.name, character.health);
    true
}

fn checked(value: Option<i64>, field: &str) -> CharacterResult<i64> {
    value.ok_or_else(|| CharacterError::invalid_argument(format!("{field} overflows")))
}
