//! Configuration management for the travel journal.
//!
//! Settings come from built-in defaults, then an optional TOML config file,
//! then command-line flags (which may themselves be read from the environment).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILENAME: &str = "travel-journal.toml";

/// Default bind address for the web server.
pub const DEFAULT_BIND: &str = "127.0.0.1:4000";

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value in config file '{path}': {message}")]
    Invalid { path: PathBuf, message: String },
}

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Address the server binds to: PORT, HOST, or HOST:PORT.
    pub bind: String,
    /// Directory served under /assets/.
    pub assets_dir: PathBuf,
    /// JSON file the store persists to (None = memory only).
    pub data_file: Option<PathBuf>,
    /// Base URL the `cards` command fetches from.
    pub server_url: String,
    /// Request timeout in seconds.
    pub request_timeout: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            assets_dir: PathBuf::from("assets"),
            data_file: None,
            server_url: format!("http://{}", DEFAULT_BIND),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Settings {
    /// Apply values present in a config file. Relative paths resolve against
    /// the config file's directory.
    pub fn merge(&mut self, config: Config, base_dir: Option<&Path>) {
        let resolve = |p: PathBuf| match base_dir {
            Some(base) if p.is_relative() => base.join(p),
            _ => p,
        };

        if let Some(bind) = config.bind {
            self.bind = bind;
        }
        if let Some(dir) = config.assets_dir {
            self.assets_dir = resolve(dir);
        }
        if let Some(file) = config.data_file {
            self.data_file = Some(resolve(file));
        }
        if let Some(url) = config.server_url {
            self.server_url = url;
        }
        if let Some(timeout) = config.request_timeout {
            self.request_timeout = timeout;
        }
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load settings from an explicit config file, or from
/// [`DEFAULT_CONFIG_FILENAME`] in the working directory if it exists.
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();

    let path = match config_path {
        Some(p) => Some(p.to_path_buf()),
        None => {
            let candidate = PathBuf::from(DEFAULT_CONFIG_FILENAME);
            candidate.exists().then_some(candidate)
        }
    };

    if let Some(path) = path {
        tracing::debug!("Loading config from {}", path.display());
        let config = Config::from_file(&path)?;
        if config.request_timeout == Some(0) {
            return Err(ConfigError::Invalid {
                path,
                message: "request_timeout must be at least 1 second".to_string(),
            });
        }
        settings.merge(config, path.parent());
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.bind, "127.0.0.1:4000");
        assert_eq!(settings.server_url, "http://127.0.0.1:4000");
        assert!(settings.data_file.is_none());
    }

    #[test]
    fn test_load_from_file_resolves_relative_paths() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("travel-journal.toml");
        std::fs::write(
            &path,
            r#"
bind = "0.0.0.0:8080"
assets_dir = "public"
data_file = "/var/lib/travels.json"
request_timeout = 5
"#,
        )
        .unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.bind, "0.0.0.0:8080");
        assert_eq!(settings.assets_dir, dir.path().join("public"));
        assert_eq!(
            settings.data_file,
            Some(PathBuf::from("/var/lib/travels.json"))
        );
        assert_eq!(settings.request_timeout, 5);
        assert_eq!(settings.server_url, "http://127.0.0.1:4000");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "colour = \"blue\"\n").unwrap();

        assert!(matches!(
            load_settings(Some(&path)),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_zero_request_timeout_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("zero.toml");
        std::fs::write(&path, "request_timeout = 0\n").unwrap();

        assert!(matches!(
            load_settings(Some(&path)),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            load_settings(Some(&path)),
            Err(ConfigError::Read { .. })
        ));
    }
}
