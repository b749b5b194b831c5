use super::app_config::AppConfig;
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const APP_QUALIFIER: &str = "io";
const APP_ORGANIZATION: &str = "cabview";
const APP_NAME: &str = "cabview";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub struct ConfigStore {
    config_path: PathBuf,
}

impl ConfigStore {
    /// Creates a store rooted at the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self {
            config_path: dirs.config_dir().join(CONFIG_FILE_NAME),
        })
    }

    /// Creates a store rooted at a specific directory (useful for testing).
    #[must_use]
    pub fn with_dir(dir: PathBuf) -> Self {
        Self {
            config_path: dir.join(CONFIG_FILE_NAME),
        }
    }

    /// Loads the application configuration.
    ///
    /// A missing file is seeded with defaults so the user has something to
    /// edit. A file that does not parse is left on disk untouched and
    /// defaults are used for the session.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the default
    /// cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let config_path = path_override.unwrap_or(&self.config_path);

        let content = match fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("Config file not found at {:?}, creating default.", config_path);
                let default_config = AppConfig::default();
                Self::write_config(config_path, &default_config)?;
                return Ok(default_config);
            }
            Err(e) => return Err(e.into()),
        };

        match toml::from_str::<AppConfig>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("Failed to parse config file: {}. Using defaults.", e);
                Ok(AppConfig::default())
            }
        }
    }

    fn write_config(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("invalid config path"))?;
        fs::create_dir_all(parent)?;

        let content = toml::to_string_pretty(config)?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_seeded_with_defaults() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::with_dir(dir.path().join("cabview"));

        let config = store.load_config(None).unwrap();

        assert!(config.mouse);
        assert!(dir.path().join("cabview").join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_malformed_file_degrades_to_defaults_and_is_kept() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::with_dir(dir.path().to_path_buf());
        let config_file = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_file, "invalid_toml = [").unwrap();

        let config = store.load_config(None).unwrap();

        assert!(config.mouse);
        assert_eq!(
            fs::read_to_string(&config_file).unwrap(),
            "invalid_toml = ["
        );
    }

    #[test]
    fn test_path_override_wins_over_store_location() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::with_dir(dir.path().to_path_buf());
        let override_path = dir.path().join("custom.toml");
        fs::write(&override_path, "[display]\nscreen_timeout_secs = 9").unwrap();

        let config = store.load_config(Some(&override_path)).unwrap();

        assert_eq!(config.display.screen_timeout_secs, 9);
    }

    #[test]
    fn test_seeded_default_parses_on_reload() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::with_dir(dir.path().to_path_buf());

        store.load_config(None).unwrap();
        let reloaded = store.load_config(None).unwrap();

        assert_eq!(reloaded.display.screen_timeout_secs, 30);
        assert!(reloaded.display.clock_24h);
    }
}
