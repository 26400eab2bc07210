//! Line-oriented save format
//!
//! One field per line as `KEY: value`, keys uppercase, in record order.
//! List fields are comma-joined, so an element containing a comma does not
//! survive a round trip.

use std::collections::BTreeMap;

use crate::character::Character;
use crate::error::{CharacterError, CharacterResult};

/// Field names in the order they are written
pub const FIELD_ORDER: [&str; 12] = [
    "name",
    "class",
    "level",
    "health",
    "max_health",
    "strength",
    "magic",
    "experience",
    "gold",
    "inventory",
    "active_quests",
    "completed_quests",
];

pub const NUMERIC_FIELDS: [&str; 7] = [
    "level",
    "health",
    "max_health",
    "strength",
    "magic",
    "experience",
    "gold",
];

pub const LIST_FIELDS: [&str; 3] = ["inventory", "active_quests", "completed_quests"];

const LIST_SEPARATOR: char = ',';

/// A parsed but not yet validated field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    List(Vec<String>),
}

impl FieldValue {
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Integer(_) => "integer",
            FieldValue::List(_) => "list",
        }
    }
}

/// Save file contents keyed by lowercase field name
pub type RawRecord = BTreeMap<String, FieldValue>;

/// Serialize a record to the save file text
pub fn encode(character: &Character) -> String {
    let fields: [(&str, String); 12] = [
        ("name", character.name.clone()),
        ("class", character.class.as_str().to_string()),
        ("level", character.level.to_string()),
        ("health", character.health.to_string()),
        ("max_health", character.max_health.to_string()),
        ("strength", character.strength.to_string()),
        ("magic", character.magic.to_string()),
        ("experience", character.experience.to_string()),
        ("gold", character.gold.to_string()),
        ("inventory", join_list(&character.inventory)),
        ("active_quests", join_list(&character.active_quests)),
        ("completed_quests", join_list(&character.completed_quests)),
    ];

    fields
        .iter()
        .map(|(key, value)| format!("{}: {}\n", key.to_uppercase(), value))
        .collect()
}

/// Parse save file text into raw fields
///
/// Keys are lowercased, values trimmed. Numeric fields must parse as
/// integers and list fields are comma-split, with an empty value giving an
/// empty list. Other keys are kept as text.
pub fn decode(text: &str) -> CharacterResult<RawRecord> {
    let mut raw = RawRecord::new();

    for (index, line) in text.lines().enumerate() {
        let (key, value) = line.trim().split_once(':').ok_or_else(|| {
            CharacterError::invalid_save_data(format!("Invalid line format at line {}", index + 1))
        })?;
        let key = key.to_lowercase();
        let value = value.trim();

        let parsed = if LIST_FIELDS.contains(&key.as_str()) {
            FieldValue::List(split_list(value))
        } else if NUMERIC_FIELDS.contains(&key.as_str()) {
            let number = value.parse::<i64>().map_err(|e| {
                CharacterError::invalid_save_data(format!("{key} is not an integer ({value:?}): {e}"))
            })?;
            FieldValue::Integer(number)
        } else {
            FieldValue::Text(value.to_string())
        };

        raw.insert(key, parsed);
    }

    Ok(raw)
}

fn join_list(items: &[String]) -> String {
    items.join(",")
}

fn split_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(LIST_SEPARATOR).map(str::to_string).collect()
}
