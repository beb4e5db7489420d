use serde::{Deserialize, Serialize};

use common::config::{ConfigManager, FileContentConfigProvider, Validate};
use common::game::SnakeSettings;
use common::log;

pub const DEFAULT_CONFIG_PATH: &str = "snake_client.yaml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoresConfig {
    pub location: String,
}

impl Default for ScoresConfig {
    fn default() -> Self {
        Self {
            location: "snake_scores.yaml".to_string(),
        }
    }
}

impl Validate for ScoresConfig {
    fn validate(&self) -> Result<(), String> {
        if self.location.is_empty() {
            return Err("scores location must not be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub snake: SnakeSettings,
    pub scores: ScoresConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()?;
        self.scores.validate()
    }
}

/// A missing file yields defaults silently; a present but broken file is
/// reported and then replaced by defaults so the game still starts.
pub fn load_config(path: &str) -> Config {
    let manager: ConfigManager<FileContentConfigProvider, Config> =
        ConfigManager::from_yaml_file(path);

    match manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config from {}: {}. Using defaults.", path, e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn test_empty_scores_location_rejected() {
        let config = Config {
            scores: ScoresConfig {
                location: String::new(),
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_snake_settings_rejected() {
        let config = Config {
            snake: SnakeSettings {
                tick_interval_ms: 1,
                ..SnakeSettings::default()
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
