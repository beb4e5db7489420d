use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Cached, validated access to a single serialized config value.
///
/// Reads go through the cache after the first successful load; writes go
/// through to the content provider before the cache is updated, so a failed
/// write never leaves a value cached that was not stored.
pub struct ConfigManager<TProvider, TConfig, TSerializer = YamlConfigSerializer>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    provider: TProvider,
    serializer: TSerializer,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.to_string()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TProvider, TConfig, TSerializer> ConfigManager<TProvider, TConfig, TSerializer>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(provider: TProvider, serializer: TSerializer) -> Self {
        Self {
            provider,
            serializer,
            cached: Mutex::new(None),
        }
    }

    /// Missing content yields `TConfig::default()`; unreadable or invalid
    /// content is an error, not a silent fallback.
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut cached = self.cached.lock().unwrap();
        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = self.serializer.serialize(config)?;
        self.provider.set_config_content(&content)?;

        *self.cached.lock().unwrap() = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        value: u32,
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.value > 1000 {
                return Err("value must be at most 1000".to_string());
            }
            Ok(())
        }
    }

    struct MemoryContentProvider {
        content: Mutex<Option<String>>,
        fail_writes: bool,
    }

    impl MemoryContentProvider {
        fn empty() -> Self {
            Self {
                content: Mutex::new(None),
                fail_writes: false,
            }
        }

        fn with_content(content: &str) -> Self {
            Self {
                content: Mutex::new(Some(content.to_string())),
                fail_writes: false,
            }
        }

        fn failing() -> Self {
            Self {
                content: Mutex::new(None),
                fail_writes: true,
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

    fn create_manager(
        provider: MemoryContentProvider,
    ) -> ConfigManager<MemoryContentProvider, TestConfig> {
        ConfigManager::new(provider, YamlConfigSerializer::new())
    }

    #[test]
    fn test_get_config_defaults_when_absent() {
        let manager = create_manager(MemoryContentProvider::empty());
        assert_eq!(manager.get_config(), Ok(TestConfig::default()));
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let manager = create_manager(MemoryContentProvider::empty());
        let config = TestConfig { value: 42 };
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config(), Ok(config));
    }

    #[test]
    fn test_get_config_rejects_invalid_content() {
        let manager = create_manager(MemoryContentProvider::with_content("value: [1, 2]"));
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_get_config_rejects_failed_validation() {
        let manager = create_manager(MemoryContentProvider::with_content("value: 5000"));
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_set_config_rejects_invalid_value() {
        let manager = create_manager(MemoryContentProvider::empty());
        assert!(manager.set_config(&TestConfig { value: 5000 }).is_err());
    }

    #[test]
    fn test_failed_write_is_not_cached() {
        let manager = create_manager(MemoryContentProvider::failing());
        assert!(manager.set_config(&TestConfig { value: 7 }).is_err());
        assert_eq!(manager.get_config(), Ok(TestConfig::default()));
    }
}
