//! Character records and everything that changes them
//!
//! - `class`: fixed archetype table
//! - `record`: the record itself and its factory
//! - `progression`: experience, gold, healing, death and revival
//! - `journal`: inventory and quest lists

pub mod class;
pub mod journal;
pub mod progression;
pub mod record;

pub use class::{CharacterClass, ClassArchetype};
pub use journal::{accept_quest, add_item, complete_quest, remove_item};
pub use progression::{
    add_gold, gain_experience, heal_character, is_character_dead, revive_character,
};
pub use record::{Character, create_character, validate_name};
