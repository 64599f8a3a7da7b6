//! TOML configuration and logging setup.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::ConfigError;
use crate::favourites::storage::is_valid_key;
use crate::favourites::FAVOURITES_KEY;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "property-search.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON listing file
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding persisted slots
    pub dir: PathBuf,
    /// Slot the favourites list is saved under
    pub key: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/properties.json"),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".property-search"),
            key: FAVOURITES_KEY.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load `path` if given, otherwise the default file when it exists,
    /// otherwise built-in defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "catalog.path",
                reason: "cannot be empty".into(),
            });
        }
        if self.storage.dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.dir",
                reason: "cannot be empty".into(),
            });
        }
        if !is_valid_key(&self.storage.key) {
            return Err(ConfigError::InvalidValue {
                field: "storage.key",
                reason: format!(
                    "'{}' must be letters, digits, '-' or '_'",
                    self.storage.key
                ),
            });
        }
        Ok(())
    }
}

impl LoggingConfig {
    /// Install the global tracing subscriber. `RUST_LOG` wins over `level`.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
            [catalog]
            path = "listings.json"

            [storage]
            dir = "/tmp/search-state"
            key = "shortlist"

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.path, PathBuf::from("listings.json"));
        assert_eq!(config.storage.dir, PathBuf::from("/tmp/search-state"));
        assert_eq!(config.storage.key, "shortlist");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Config::from_toml("[logging]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(config.catalog.path, PathBuf::from("data/properties.json"));
        assert_eq!(config.storage.key, FAVOURITES_KEY);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_invalid_storage_key() {
        let err = Config::from_toml("[storage]\nkey = \"../favs\"\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "storage.key",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_catalog_path() {
        let err = Config::from_toml("[catalog]\npath = \"\"\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "catalog.path",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            Config::from_toml("[catalog\npath ="),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[storage]\ndir = \"state\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.storage.dir, PathBuf::from("state"));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let err = Config::resolve(Some(Path::new("no/such/config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }
}
