//! Save directory operations
//!
//! A save directory is flat: one `<name>_save.txt` per character. Only
//! saving creates the directory. Writes go straight to the target file, so a
//! failed save can leave it truncated.

use std::fs;
use std::path::{Path, PathBuf};

use crate::character::{Character, validate_name};
use crate::config::SaveConfig;
use crate::consts::SAVE_FILE_SUFFIX;
use crate::error::{CharacterError, CharacterResult};

use super::format::{decode, encode};
use super::validation::into_character;

/// Path of the save file for `name` inside `directory`
///
/// Fails with `InvalidArgument` for names that could leave the directory.
pub fn save_path(name: &str, directory: &Path) -> CharacterResult<PathBuf> {
    validate_name(name)?;
    Ok(directory.join(format!("{name}{SAVE_FILE_SUFFIX}")))
}

/// Write a record to `<directory>/<name>_save.txt`, replacing any previous save
pub fn save_character(character: &Character, directory: impl AsRef<Path>) -> CharacterResult<PathBuf> {
    let directory = directory.as_ref();
    let path = save_path(&character.name, directory)?;
    if !directory.is_dir() {
        fs::create_dir_all(directory).map_err(|source| CharacterError::StorageUnavailable {
            path: directory.to_path_buf(),
            source,
        })?;
        log::debug!("Created save directory {}", directory.display());
    }

    fs::write(&path, encode(character)).map_err(|source| CharacterError::StorageWriteFailed {
        action: "write",
        path: path.clone(),
        source,
    })?;

    log::debug!("Saved {} to {}", character.name, path.display());
    Ok(path)
}

/// Read and validate the save file for `name`
pub fn load_character(name: &str, directory: impl AsRef<Path>) -> CharacterResult<Character> {
    let path = save_path(name, directory.as_ref())?;
    if !path.exists() {
        return Err(CharacterError::not_found(name));
    }

    let text = fs::read_to_string(&path).map_err(|source| CharacterError::SaveFileCorrupted {
        path: path.clone(),
        source,
    })?;

    let character = into_character(decode(&text)?)?;
    log::debug!("Loaded {} from {}", character.name, path.display());
    Ok(character)
}

/// Names of all saved characters, in directory listing order
///
/// A missing directory is an empty roster, not an error.
pub fn list_saved_characters(directory: impl AsRef<Path>) -> CharacterResult<Vec<String>> {
    let directory = directory.as_ref();
    if !directory.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(directory).map_err(|source| CharacterError::StorageUnavailable {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CharacterError::StorageUnavailable {
            path: directory.to_path_buf(),
            source,
        })?;
        let Ok(file_name) = entry.file_name().into_string() else {
            log::warn!("Skipping non UTF-8 entry {:?}", entry.file_name());
            continue;
        };
        if let Some(name) = file_name.strip_suffix(SAVE_FILE_SUFFIX) {
            if !name.is_empty() {
                names.push(name.to_string());
            }
        }
    }

    log::debug!("Found {} saves in {}", names.len(), directory.display());
    Ok(names)
}

/// Remove the save file for `name`
pub fn delete_character(name: &str, directory: impl AsRef<Path>) -> CharacterResult<()> {
    let path = save_path(name, directory.as_ref())?;
    if !path.exists() {
        return Err(CharacterError::not_found(name));
    }

    fs::remove_file(&path).map_err(|source| CharacterError::StorageWriteFailed {
        action: "delete",
        path: path.clone(),
        source,
    })?;

    log::debug!("Deleted save {}", path.display());
    Ok(())
}

pub fn save_exists(name: &str, directory: impl AsRef<Path>) -> bool {
    save_path(name, directory.as_ref()).is_ok_and(|path| path.exists())
}

/// Persistence operations bound to a configured save directory
#[derive(Debug, Clone, Default)]
pub struct SaveStore {
    config: SaveConfig,
}

impl SaveStore {
    pub fn new(config: SaveConfig) -> Self {
        Self { config }
    }

    pub fn directory(&self) -> &Path {
        &self.config.save_directory
    }

    pub fn save(&self, character: &Character) -> CharacterResult<PathBuf> {
        save_character(character, self.directory())
    }

    pub fn load(&self, name: &str) -> CharacterResult<Character> {
        load_character(name, self.directory())
    }

    pub fn list(&self) -> CharacterResult<Vec<String>> {
        list_saved_characters(self.directory())
    }

    pub fn delete(&self, name: &str) -> CharacterResult<()> {
        delete_character(name, self.directory())
    }

    pub fn exists(&self, name: &str) -> bool {
        save_exists(name, self.directory())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{CharacterClass, add_item, create_character, gain_experience};
    use proptest::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_creates_nested_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("data").join("save_games");
        let hero = create_character("Aria", "Mage").unwrap();

        let path = save_character(&hero, &dir).unwrap();
        assert_eq!(path, dir.join("Aria_save.txt"));
        assert!(path.is_file());
    }

    #[test]
    fn test_save_over_file_path_fails() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("saves");
        fs::write(&blocker, "not a directory").unwrap();

        let hero = create_character("Aria", "Mage").unwrap();
        let err = save_character(&hero, &blocker).unwrap_err();
        assert!(matches!(err, CharacterError::StorageUnavailable { .. }));
    }

    #[test]
    fn test_save_overwrites() {
        let tmp = TempDir::new().unwrap();
        let mut hero = create_character("Aria", "Mage").unwrap();
        save_character(&hero, tmp.path()).unwrap();

        hero.gold = 7;
        save_character(&hero, tmp.path()).unwrap();
        assert_eq!(load_character("Aria", tmp.path()).unwrap().gold, 7);
    }

    #[test]
    fn test_round_trip() {
        let tmp = TempDir::new().unwrap();
        let mut hero = create_character("Brom", "Warrior").unwrap();
        gain_experience(&mut hero, 250).unwrap();
        add_item(&mut hero, "axe");
        add_item(&mut hero, "torch");
        hero.active_quests.push("rat_cellar".into());
        hero.completed_quests.push("tutorial".into());
        hero.health = 12;

        save_character(&hero, tmp.path()).unwrap();
        assert_eq!(load_character("Brom", tmp.path()).unwrap(), hero);
    }

    #[test]
    fn test_load_missing() {
        let tmp = TempDir::new().unwrap();
        let err = load_character("Nobody", tmp.path()).unwrap_err();
        assert!(matches!(err, CharacterError::CharacterNotFound { ref name } if name == "Nobody"));
    }

    #[test]
    fn test_load_line_without_colon() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Bad_save.txt"), "NAME: Bad\nthis line is broken\n").unwrap();
        let err = load_character("Bad", tmp.path()).unwrap_err();
        assert!(matches!(err, CharacterError::InvalidSaveData(_)));
    }

    #[test]
    fn test_load_missing_field() {
        let tmp = TempDir::new().unwrap();
        let hero = create_character("Aria", "Rogue").unwrap();
        let text: String = encode(&hero)
            .lines()
            .filter(|l| !l.starts_with("GOLD"))
            .map(|l| format!("{l}\n"))
            .collect();
        fs::write(save_path("Aria", tmp.path()).unwrap(), text).unwrap();

        let err = load_character("Aria", tmp.path()).unwrap_err();
        assert!(err.to_string().contains("Missing field: gold"));
    }

    #[test]
    fn test_load_unreadable_file() {
        let tmp = TempDir::new().unwrap();
        // Not valid UTF-8
        fs::write(save_path("Glitch", tmp.path()).unwrap(), [0xff, 0xfe, 0x00, 0x3a]).unwrap();
        let err = load_character("Glitch", tmp.path()).unwrap_err();
        assert!(matches!(err, CharacterError::SaveFileCorrupted { .. }));
    }

    #[test]
    fn test_save_write_failure() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("Aria_save.txt")).unwrap();

        let hero = create_character("Aria", "Mage").unwrap();
        let err = save_character(&hero, tmp.path()).unwrap_err();
        assert!(matches!(
            err,
            CharacterError::StorageWriteFailed { action: "write", .. }
        ));
    }

    #[test]
    fn test_delete_failure() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("Aria_save.txt")).unwrap();

        let err = delete_character("Aria", tmp.path()).unwrap_err();
        assert!(matches!(
            err,
            CharacterError::StorageWriteFailed { action: "delete", .. }
        ));
        assert!(tmp.path().join("Aria_save.txt").is_dir());
    }

    #[test]
    fn test_unsafe_names_never_touch_disk() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("saves");
        let mut hero = create_character("Aria", "Mage").unwrap();
        hero.name = "../escape".into();

        let err = save_character(&hero, &dir).unwrap_err();
        assert!(matches!(err, CharacterError::InvalidArgument(_)));
        assert!(!dir.exists());
        assert!(!tmp.path().join("escape_save.txt").exists());

        assert!(matches!(
            load_character("../escape", &dir),
            Err(CharacterError::InvalidArgument(_))
        ));
        assert!(matches!(
            delete_character("a/b", &dir),
            Err(CharacterError::InvalidArgument(_))
        ));
        assert!(!save_exists("../escape", &dir));
    }

    #[cfg(unix)]
    #[test]
    fn test_list_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().unwrap();
        save_character(&create_character("Aria", "Cleric").unwrap(), tmp.path()).unwrap();
        let odd = OsStr::from_bytes(b"\xff\xfe_save.txt");
        if fs::write(tmp.path().join(odd), "x").is_err() {
            // Filesystem refuses non UTF-8 names
            return;
        }

        assert_eq!(list_saved_characters(tmp.path()).unwrap(), vec!["Aria"]);
    }

    #[test]
    fn test_list_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let names = list_saved_characters(tmp.path().join("nope")).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_list_only_save_files() {
        let tmp = TempDir::new().unwrap();
        for name in ["Aria", "Brom"] {
            save_character(&create_character(name, "Cleric").unwrap(), tmp.path()).unwrap();
        }
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();

        let mut names = list_saved_characters(tmp.path()).unwrap();
        names.sort();
        assert_eq!(names, vec!["Aria", "Brom"]);
    }

    #[test]
    fn test_delete() {
        let tmp = TempDir::new().unwrap();
        save_character(&create_character("Aria", "Mage").unwrap(), tmp.path()).unwrap();
        assert!(save_exists("Aria", tmp.path()));

        delete_character("Aria", tmp.path()).unwrap();
        assert!(!save_exists("Aria", tmp.path()));

        let err = delete_character("Aria", tmp.path()).unwrap_err();
        assert!(matches!(err, CharacterError::CharacterNotFound { .. }));
    }

    #[test]
    fn test_store_uses_config_directory() {
        let tmp = TempDir::new().unwrap();
        let store = SaveStore::new(SaveConfig {
            save_directory: tmp.path().join("saves"),
        });
        let hero = create_character("Aria", "Mage").unwrap();

        store.save(&hero).unwrap();
        assert!(store.exists("Aria"));
        assert_eq!(store.list().unwrap(), vec!["Aria"]);
        assert_eq!(store.load("Aria").unwrap(), hero);
        store.delete("Aria").unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    fn item() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,10}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_save_load_round_trip(
            name in "[A-Z][a-z]{1,10}",
            class in prop::sample::select(CharacterClass::ALL.to_vec()),
            level in 1i64..50,
            health in -10i64..500,
            gold in 0i64..100_000,
            inventory in prop::collection::vec(item(), 0..5),
            active in prop::collection::vec(item(), 0..3),
            completed in prop::collection::vec(item(), 0..3),
        ) {
            let tmp = TempDir::new().unwrap();
            let mut hero = Character::new(name.clone(), class);
            hero.level = level;
            hero.health = health;
            hero.gold = gold;
            hero.inventory = inventory;
            hero.active_quests = active;
            hero.completed_quests = completed;

            save_character(&hero, tmp.path()).unwrap();
            prop_assert_eq!(load_character(&name, tmp.path()).unwrap(), hero);
        }
    }
}
