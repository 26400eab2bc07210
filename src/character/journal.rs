//! Inventory and quest journal operations

use crate::error::{CharacterError, CharacterResult};

use super::record::Character;

/// Append an item to the inventory
pub fn add_item(character: &mut Character, item: impl Into<String>) {
    character.inventory.push(item.into());
}

/// Remove the first inventory entry matching `item`
pub fn remove_item(character: &mut Character, item: &str) -> CharacterResult<String> {
    let pos = character
        .inventory
        .iter()
        .position(|i| i == item)
        .ok_or_else(|| CharacterError::ItemNotFound(item.to_string()))?;
    Ok(character.inventory.remove(pos))
}

/// Start tracking a quest
pub fn accept_quest(character: &mut Character, quest: impl Into<String>) -> CharacterResult<()> {
    let quest = quest.into();
    if character.active_quests.contains(&quest) {
        return Err(CharacterError::invalid_argument(format!(
            "Quest already active: {quest}"
        )));
    }
    if character.completed_quests.contains(&quest) {
        return Err(CharacterError::invalid_argument(format!(
            "Quest already completed: {quest}"
        )));
    }
    character.active_quests.push(quest);
    Ok(())
}

/// Move an active quest to the completed list
pub fn complete_quest(character: &mut Character, quest: &str) -> CharacterResult<()> {
    let pos = character
        .active_quests
        .iter()
        .position(|q| q == quest)
        .ok_or_else(|| CharacterError::QuestNotActive(quest.to_string()))?;
    let quest = character.active_quests.remove(pos);
    log::debug!("{} completed quest {}", character.name, quest);
    character.completed_quests.push(quest);
    Ok(())
}
