//! Class archetypes and their starting stats

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CharacterError;

/// Base stats granted by a class at creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassArchetype {
    pub health: i64,
    pub strength: i64,
    pub magic: i64,
}

/// Playable character classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
    Cleric,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Warrior,
        CharacterClass::Mage,
        CharacterClass::Rogue,
        CharacterClass::Cleric,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "Warrior",
            CharacterClass::Mage => "Mage",
            CharacterClass::Rogue => "Rogue",
            CharacterClass::Cleric => "Cleric",
        }
    }

    /// Starting stats for this class
    pub fn archetype(&self) -> ClassArchetype {
        match self {
            CharacterClass::Warrior => ClassArchetype {
                health: 120,
                strength: 15,
                magic: 5,
            },
            CharacterClass::Mage => ClassArchetype {
                health: 80,
                strength: 8,
                magic: 20,
            },
            CharacterClass::Rogue => ClassArchetype {
                health: 90,
                strength: 12,
                magic: 10,
            },
            CharacterClass::Cleric => ClassArchetype {
                health: 100,
                strength: 10,
                magic: 15,
            },
        }
    }
}

impl FromStr for CharacterClass {
    type Err = CharacterError;

    /// Exact, case-sensitive match on the class name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| CharacterError::InvalidCharacterClass(s.to_string()))
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
