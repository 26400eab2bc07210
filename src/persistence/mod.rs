//! Save/load persistence for character records
//!
//! Features:
//! - Flat `KEY: value` text files, one per character
//! - Structural validation on load
//! - Directory listing and deletion

pub mod format;
pub mod store;
pub mod validation;

pub use format::{FieldValue, RawRecord, decode, encode};
pub use store::{
    SaveStore, delete_character, list_saved_characters, load_character, save_character,
    save_exists, save_path,
};
pub use validation::{into_character, validate_character_data};
