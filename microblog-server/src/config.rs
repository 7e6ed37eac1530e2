//! Server settings - defaults, settings file, and overrides
//!
//! Settings are resolved once at startup and handed to the HTTP layer:
//! - Built-in defaults
//! - TOML file named by `MICROBLOG_SETTINGS` or `--settings` (partial files allowed)
//! - Command-line overrides applied by the caller

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable naming an optional TOML settings file
pub const SETTINGS_ENV: &str = "MICROBLOG_SETTINGS";

/// Secret used when nothing else is configured
pub const DEFAULT_SECRET_KEY: &str = "development key";

/// Settings loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid settings file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Server settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// SQLite database file
    pub database: PathBuf,

    /// Verbose logging
    pub debug: bool,

    /// Key for signing flash cookies
    pub secret_key: String,

    /// Address to bind to (default: 127.0.0.1:5000)
    pub bind_addr: SocketAddr,

    /// Upper bound on pooled connections
    pub max_connections: u32,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: PathBuf::from("microblog.db"),
            debug: true,
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            max_connections: 5,
            request_timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Load from a settings file that is allowed to be absent.
    ///
    /// Returns `None` for a missing file so the caller can fall back to
    /// defaults; a file that exists but cannot be read or parsed is an error.
    pub fn load_optional(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        Self::from_file(path).map(Some)
    }

    /// Parse a TOML settings file. Keys it omits keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Whether the signing key was never changed from the built-in one.
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.database, PathBuf::from("microblog.db"));
        assert!(settings.debug);
        assert_eq!(settings.bind_addr.port(), 5000);
        assert!(settings.uses_default_secret());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "debug = false\nsecret_key = \"s3cret\"").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert!(!settings.debug);
        assert_eq!(settings.secret_key, "s3cret");
        assert_eq!(settings.max_connections, 5);
        assert!(!settings.uses_default_secret());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_optional(&dir.path().join("nope.toml")).unwrap();
        assert!(settings.is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "debug = \"maybe\"").unwrap();

        assert!(matches!(
            Settings::from_file(file.path()).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }
}
