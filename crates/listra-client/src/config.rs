//! Client configuration.
//!
//! Configuration is resolved in layers: built-in defaults, then the TOML
//! config file (if present), then environment variables. The config file
//! lives in the platform config directory (`listra/config.toml`) unless an
//! explicit path is given.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use listra_core::{Error, Result};

/// Environment variable overriding the collection resource base URL.
pub const ENV_BASE_URL: &str = "LISTRA_BASE_URL";

/// Environment variable overriding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "LISTRA_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "http://localhost:3500/items";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for talking to the collection resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the collection resource.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from defaults, the config file, and the
    /// environment, in that order of increasing precedence.
    ///
    /// An explicitly given path must exist; the default platform path is
    /// optional and silently falls back to defaults when absent. A
    /// malformed file is always an error.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => {
                let path = Path::new(path);
                if !path.exists() {
                    return Err(Error::config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_env();
        Ok(config)
    }

    /// Parses configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Writes this configuration to a TOML file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| Error::config(e.to_string()))?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    /// Resolves the config file path: the explicit path when given,
    /// otherwise `<platform config dir>/listra/config.toml`.
    pub fn resolve_config_path(config_path: Option<&str>) -> Option<PathBuf> {
        match config_path {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// The default config file path for this platform, if one exists.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("listra").join("config.toml"))
    }

    /// The per-request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.is_empty() {
                self.base_url = url;
            }
        }
        if let Ok(secs) = std::env::var(ENV_TIMEOUT_SECS) {
            match secs.parse() {
                Ok(secs) => self.timeout_secs = secs,
                Err(e) => tracing::warn!("ignoring invalid {ENV_TIMEOUT_SECS}: {e}"),
            }
        }
    }

    /// The URL of a single item under the collection resource.
    pub fn item_url(&self, id: listra_core::ItemId) -> String {
        format!("{}/{id}", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use listra_core::ItemId;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3500/items");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_item_url() {
        let config = ClientConfig::default();
        assert_eq!(
            config.item_url(ItemId::new(7)),
            "http://localhost:3500/items/7"
        );
    }

    #[test]
    fn test_item_url_trailing_slash() {
        let config = ClientConfig {
            base_url: "http://example.com/items/".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(config.item_url(ItemId::new(1)), "http://example.com/items/1");
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = ClientConfig {
            base_url: "http://10.0.0.2:3500/items".to_string(),
            timeout_secs: 5,
        };
        config.write_to(&path).unwrap();
        let loaded = ClientConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout_secs = 3\n").unwrap();
        let loaded = ClientConfig::from_file(&path).unwrap();
        assert_eq!(loaded.timeout_secs, 3);
        assert_eq!(loaded.base_url, "http://localhost:3500/items");
    }

    #[test]
    fn test_load_rejects_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-config.toml");
        let err = ClientConfig::load(path.to_str()).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = [not toml").unwrap();
        let err = ClientConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
