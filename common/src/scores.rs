use serde::{Deserialize, Serialize};

use crate::config::{ConfigContentProvider, ConfigManager, FileContentConfigProvider, Validate};
use crate::log;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScoreFile {
    pub high_score: u32,
}

impl Validate for HighScoreFile {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Durable storage for the single persisted value in the game. Load happens
/// once at startup; saves are write-through and never fatal.
pub struct HighScoreStore<TProvider = FileContentConfigProvider>
where
    TProvider: ConfigContentProvider,
{
    manager: ConfigManager<TProvider, HighScoreFile>,
}

impl HighScoreStore<FileContentConfigProvider> {
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self {
            manager: ConfigManager::from_yaml_file(file_path),
        }
    }
}

impl<TProvider> HighScoreStore<TProvider>
where
    TProvider: ConfigContentProvider,
{
    pub fn new(manager: ConfigManager<TProvider, HighScoreFile>) -> Self {
        Self { manager }
    }

    pub fn load(&self) -> u32 {
        match self.manager.get_config() {
            Ok(file) => file.high_score,
            Err(e) => {
                log!("Failed to load high score, starting from 0: {}", e);
                0
            }
        }
    }

    pub fn save(&self, high_score: u32) {
        if let Err(e) = self.manager.set_config(&HighScoreFile { high_score }) {
            log!("Failed to persist high score {}: {}", high_score, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::config::YamlConfigSerializer;

    use super::*;

    struct MemoryContentProvider {
        content: Mutex<Option<String>>,
        fail_writes: bool,
    }

    impl MemoryContentProvider {
        fn new(fail_writes: bool) -> Self {
            Self {
                content: Mutex::new(None),
                fail_writes,
            }
        }
    }

    impl ConfigContentProvider for MemoryContentProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.content.lock().unwrap().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            if self.fail_writes {
                return Err("storage unavailable".to_string());
            }
            *self.content.lock().unwrap() = Some(content.to_string());
            Ok(())
        }
    }

    fn create_store(fail_writes: bool) -> HighScoreStore<MemoryContentProvider> {
        HighScoreStore::new(ConfigManager::new(
            MemoryContentProvider::new(fail_writes),
            YamlConfigSerializer::new(),
        ))
    }

    #[test]
    fn test_load_without_stored_value_yields_zero() {
        let store = create_store(false);
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = create_store(false);
        store.save(17);
        assert_eq!(store.load(), 17);
    }

    #[test]
    fn test_failed_save_is_swallowed() {
        let store = create_store(true);
        store.save(17);
        assert_eq!(store.load(), 0);
    }
}
