//! Client and server configuration.
//!
//! The client reads an optional `outage.toml`; environment variables
//! override individual values. The server is configured from the
//! environment only.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::DEFAULT_QUEUE;

/// Path of the status method below the API base.
pub const DEFAULT_STATUS_PATH: &str = "/grpc/StatusService/GetStatus";

/// Status client settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base, e.g. `https://example.org/api`; may be empty for relative use
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_status_path")]
    pub status_path: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_queue")]
    pub default_queue: String,
}

fn default_status_path() -> String {
    DEFAULT_STATUS_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_refresh_interval_secs() -> u64 {
    5 * 60
}

fn default_queue() -> String {
    DEFAULT_QUEUE.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            status_path: default_status_path(),
            timeout_secs: default_timeout_secs(),
            refresh_interval_secs: default_refresh_interval_secs(),
            default_queue: default_queue(),
        }
    }
}

impl ClientConfig {
    /// Load client configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ScheduleResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ScheduleError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> ScheduleResult<Self> {
        toml::from_str(content).map_err(|e| {
            ScheduleError::Configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load `outage.toml` from the first standard location that has one,
    /// or fall back to defaults when none exists.
    pub fn from_default_location() -> ScheduleResult<Self> {
        let search_paths = [
            PathBuf::from("outage.toml"),
            PathBuf::from("backend/outage.toml"),
            PathBuf::from("../outage.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Apply overrides from the environment.
    ///
    /// # Environment Variables
    /// - `OUTAGE_API_BASE`: API base URL
    /// - `OUTAGE_TIMEOUT_SECS`: request timeout in seconds
    /// - `OUTAGE_REFRESH_SECS`: refresh interval in seconds
    ///
    /// # Errors
    /// Returns an error if a numeric variable does not parse.
    pub fn apply_env_overrides(mut self) -> ScheduleResult<Self> {
        if let Ok(base) = env::var("OUTAGE_API_BASE") {
            self.base_url = base;
        }
        if let Some(secs) = env_u64("OUTAGE_TIMEOUT_SECS")? {
            self.timeout_secs = secs;
        }
        if let Some(secs) = env_u64("OUTAGE_REFRESH_SECS")? {
            self.refresh_interval_secs = secs;
        }
        Ok(self)
    }

    /// Full URL of the status method.
    pub fn status_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.status_path.trim_start_matches('/')
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Refresh interval, never shorter than one second.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs.max(1))
    }
}

fn env_u64(key: &str) -> ScheduleResult<Option<u64>> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ScheduleError::Configuration(format!("{} must be a whole number", key))),
        Err(_) => Ok(None),
    }
}

/// Status server settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// JSON file mapping queue ids to status arrays
    pub status_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Read server settings from the environment.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0)
    /// - `PORT` (optional, default: 8080)
    /// - `STATUS_FILE` (optional): seed data for the in-memory provider
    pub fn from_env() -> ScheduleResult<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ScheduleError::Configuration("PORT must be a valid port number".into()))?;
        let status_file = env::var("STATUS_FILE").ok().map(PathBuf::from);

        Ok(Self {
            host,
            port,
            status_file,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.status_url(), "/grpc/StatusService/GetStatus");
        assert_eq!(config.refresh_interval(), Duration::from_secs(300));
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.default_queue, "11");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ClientConfig::from_toml_str("base_url = \"https://svitlo.example/api/\"\n")
            .unwrap();
        assert_eq!(
            config.status_url(),
            "https://svitlo.example/api/grpc/StatusService/GetStatus"
        );
        assert_eq!(config.refresh_interval_secs, 300);
    }

    #[test]
    fn test_invalid_toml() {
        let err = ClientConfig::from_toml_str("timeout_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, ScheduleError::Configuration(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = 5\nrefresh_interval_secs = 0\ndefault_queue = \"42\"").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.refresh_interval(), Duration::from_secs(1));
        assert_eq!(config.default_queue, "42");
    }

    #[test]
    fn test_missing_file() {
        let err = ClientConfig::from_file("/nonexistent/outage.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
