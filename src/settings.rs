use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::domain::ClientError;
use crate::infrastructure::http_client::DEFAULT_URL;

/// Default filename used to persist configuration within the config directory.
const CONFIG_FILENAME: &str = "config.json";

/// Environment variable overriding the search engine URL.
pub const URL_ENV: &str = "ESCOUNT_URL";

/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "ESCOUNT_TIMEOUT_SECS";

/// Connection settings for the search engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Read the JSON file at `path`. A missing file yields the defaults; a
    /// file that exists but cannot be parsed is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let bytes = fs::read(path).map_err(|err| {
            ClientError::config(format!("failed to read {}: {err}", path.display()))
        })?;
        serde_json::from_slice(&bytes).map_err(|err| {
            ClientError::config(format!("failed to parse {}: {err}", path.display()))
        })
    }

    /// Ensure the backing directory exists and write the JSON payload.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ClientError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                ClientError::config(format!("failed to create {}: {err}", parent.display()))
            })?;
        }
        let payload = serde_json::to_vec_pretty(self)
            .map_err(|err| ClientError::config(format!("failed to encode config: {err}")))?;
        fs::write(path, payload).map_err(|err| {
            ClientError::config(format!("failed to write {}: {err}", path.display()))
        })
    }

    /// Apply `ESCOUNT_URL` and `ESCOUNT_TIMEOUT_SECS` on top of the current values.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(URL_ENV).ok(),
            std::env::var(TIMEOUT_ENV).ok(),
        )
    }

    fn with_overrides(mut self, url: Option<String>, timeout: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.url = url;
        }
        if let Some(secs) = timeout.and_then(|t| t.trim().parse().ok()) {
            self.timeout_secs = secs;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// `<platform config dir>/escount/config.json`, when a home directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "escount").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("escount-settings-{}-{}", std::process::id(), name))
            .join(CONFIG_FILENAME)
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = ClientConfig::load(scratch_path("missing")).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.url, "http://127.0.0.1:9200");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("roundtrip");
        let config = ClientConfig {
            url: "http://search.internal:9200".into(),
            timeout_secs: 5,
        };
        config.save(&path).unwrap();

        assert_eq!(ClientConfig::load(&path).unwrap(), config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = scratch_path("partial");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"timeout_secs": 3}"#).unwrap();

        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.timeout_secs, 3);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let path = scratch_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "url = nope").unwrap();

        assert!(matches!(
            ClientConfig::load(&path),
            Err(ClientError::Config(_))
        ));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_overrides_apply_when_valid() {
        let config = ClientConfig::default().with_overrides(
            Some("http://es:9201".into()),
            Some("12".into()),
        );
        assert_eq!(config.url, "http://es:9201");
        assert_eq!(config.timeout_secs, 12);

        let untouched = ClientConfig::default()
            .with_overrides(Some("  ".into()), Some("soon".into()));
        assert_eq!(untouched, ClientConfig::default());
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let config = ClientConfig {
            timeout_secs: 0,
            ..ClientConfig::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(1));
    }
}
