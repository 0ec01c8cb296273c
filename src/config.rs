//! Application configuration.

use crate::auth::Endpoint;
use crate::auth::error::AuthError;
use crate::consts::cli_consts::{CONFIG_DIR, CONFIG_FILE};
use crate::environment::Environment;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::Path, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine the home directory")]
    NoHomeDirectory,

    #[error(transparent)]
    InvalidEndpoint(#[from] AuthError),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Full login URL. Falls back to the environment default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Request timeout. No timeout when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Clear the inline error as soon as a field is edited.
    pub clear_error_on_edit: bool,
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns a `ConfigError` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)?;
        Ok(config)
    }

    /// Loads the configuration if the file exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), ConfigError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Picks the endpoint: the override, then the config file, then the environment default.
    pub fn resolve_endpoint(
        &self,
        cli_override: Option<&str>,
        environment: Environment,
    ) -> Result<Endpoint, ConfigError> {
        let endpoint = match cli_override.or(self.endpoint.as_deref()) {
            Some(raw) => Endpoint::parse(raw)?,
            None => environment.login_endpoint()?,
        };
        Ok(endpoint)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// `~/.login-form/config.json`
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    let home = home::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
    Ok(home.join(CONFIG_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            endpoint: Some("https://auth.example.com/login".to_string()),
            request_timeout_secs: Some(30),
            clear_error_on_edit: true,
        };
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = Config::default().save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    // Missing keys take their defaults; a missing file is the default config.
    fn test_partial_and_missing_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());

        fs::write(&path, r#"{"request_timeout_secs": 5}"#).unwrap();
        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.endpoint, None);
        assert!(!config.clear_error_on_edit);
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::default().save(&path).unwrap();

        Config::clear(&path).unwrap();
        assert!(!path.exists());
        assert!(Config::clear(&path).is_ok());
    }

    #[test]
    fn test_resolve_endpoint_precedence() {
        let config = Config {
            endpoint: Some("https://file.example.com/login".to_string()),
            ..Config::default()
        };

        let endpoint = config
            .resolve_endpoint(Some("http://flag.example.com/login"), Environment::Local)
            .unwrap();
        assert_eq!(endpoint.as_str(), "http://flag.example.com/login");

        let endpoint = config.resolve_endpoint(None, Environment::Local).unwrap();
        assert_eq!(endpoint.as_str(), "https://file.example.com/login");

        let endpoint = Config::default()
            .resolve_endpoint(None, Environment::Local)
            .unwrap();
        assert_eq!(endpoint.as_str(), "http://localhost:8195/api/users/login");
    }

    #[test]
    fn test_resolve_endpoint_rejects_scheme_less_address() {
        let config = Config {
            endpoint: Some("37.60.249.24:8195/api/users/login".to_string()),
            ..Config::default()
        };
        assert!(matches!(
            config.resolve_endpoint(None, Environment::Production),
            Err(ConfigError::InvalidEndpoint(_))
        ));
    }
}
