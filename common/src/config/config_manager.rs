use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config. A missing source yields `TConfig::default()`.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        let mut current = self.lock();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&content)?;
        config.validate().map_err(ConfigError::Invalid)?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        *self.lock() = Some(config.clone());
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<TConfig>> {
        // A poisoned cache only holds a previously validated config.
        self.config.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        delay_ms: u32,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self { delay_ms: 500 }
        }
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.delay_ms > 1000 {
                return Err("delay_ms must not exceed 1000".to_string());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryProvider {
        content: RefCell<Option<String>>,
    }

    impl ConfigContentProvider for MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    fn manager(content: Option<&str>) -> ConfigManager<MemoryProvider, SampleConfig> {
        let provider = MemoryProvider {
            content: RefCell::new(content.map(str::to_string)),
        };
        ConfigManager::new(provider, YamlConfigSerializer::new())
    }

    #[test]
    fn test_missing_content_gives_default() {
        assert_eq!(manager(None).get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_stored_content_is_parsed() {
        let config = manager(Some("delay_ms: 250\n")).get_config().unwrap();
        assert_eq!(config.delay_ms, 250);
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let result = manager(Some("delay_ms: 5000\n")).get_config();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = manager(Some("delay_ms: [oops")).get_config();
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_set_config_writes_and_caches() {
        let manager = manager(None);
        manager.set_config(&SampleConfig { delay_ms: 10 }).unwrap();

        assert_eq!(manager.get_config().unwrap().delay_ms, 10);
        assert!(manager.set_config(&SampleConfig { delay_ms: 9999 }).is_err());
        assert_eq!(manager.get_config().unwrap().delay_ms, 10);
    }

    #[test]
    fn test_yaml_file_round_trip() {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));

        let writer: ConfigManager<_, SampleConfig> = ConfigManager::from_yaml_file(&path);
        writer.set_config(&SampleConfig { delay_ms: 700 }).unwrap();

        let reader: ConfigManager<_, SampleConfig> = ConfigManager::from_yaml_file(&path);
        assert_eq!(reader.get_config().unwrap().delay_ms, 700);

        std::fs::remove_file(&path).unwrap();
    }
}
