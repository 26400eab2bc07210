//! Quest Chronicles entry point
//!
//! Prints every character in the configured save directory as JSON.
//! Usage: `quest-chronicles [CONFIG.json]`

use quest_chronicles::{Character, CharacterResult, SaveConfig, SaveStore};

/// Load every saved character, skipping saves that fail to load
fn roster(store: &SaveStore) -> CharacterResult<Vec<Character>> {
    let mut characters = Vec::new();
    for name in store.list()? {
        match store.load(&name) {
            Ok(character) => characters.push(character),
            Err(e) => log::warn!("Skipping save for {name}: {e}"),
        }
    }
    Ok(characters)
}

fn run() -> CharacterResult<Vec<Character>> {
    let config = match std::env::args().nth(1) {
        Some(path) => SaveConfig::from_json_file(path)?,
        None => SaveConfig::default(),
    };
    log::info!("Using save directory {}", config.save_directory.display());

    roster(&SaveStore::new(config))
}

fn main() {
    env_logger::init();

    let characters = match run() {
        Ok(characters) => characters,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&characters) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize roster: {e}"),
    }
}
