//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `COMXSTORE_HOST` - Bind address (default: 127.0.0.1)
//! - `COMXSTORE_PORT` - Listen port (default: 3000)
//! - `COMXSTORE_BASE_URL` - Public URL (default: <http://localhost:3000>); an
//!   `https://` URL enables secure session cookies
//! - `COMXSTORE_PREFERENCES_PATH` - Where role/theme preferences are stored
//!   (default: comxstore-preferences.json)
//! - `COMXSTORE_SIMULATE_LATENCY` - Delay mock store calls like a real network
//!   (default: true)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance trace sample rate (default: 0.0)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL
    pub base_url: String,
    /// Preference file location
    pub preferences_path: PathBuf,
    /// Whether mock store calls sleep before resolving
    pub simulate_latency: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            preferences_path: PathBuf::from("comxstore-preferences.json"),
            simulate_latency: true,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        let defaults = Self::default();

        let host = parse_env("COMXSTORE_HOST", defaults.host)?;
        let port = parse_env("COMXSTORE_PORT", defaults.port)?;
        let base_url = get_env_or_default("COMXSTORE_BASE_URL", &defaults.base_url);
        let preferences_path = get_optional_env("COMXSTORE_PREFERENCES_PATH")
            .map_or(defaults.preferences_path, PathBuf::from);
        let simulate_latency = match get_optional_env("COMXSTORE_SIMULATE_LATENCY") {
            Some(value) => parse_bool("COMXSTORE_SIMULATE_LATENCY", &value)?,
            None => defaults.simulate_latency,
        };
        let sentry_sample_rate = parse_env("SENTRY_SAMPLE_RATE", defaults.sentry_sample_rate)?;
        let sentry_traces_sample_rate =
            parse_env("SENTRY_TRACES_SAMPLE_RATE", defaults.sentry_traces_sample_rate)?;

        Ok(Self {
            host,
            port,
            base_url,
            preferences_path,
            simulate_latency,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the site is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to a default when unset.
fn parse_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get_optional_env(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

/// Parse a boolean flag written as true/false, 1/0, yes/no or on/off.
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert!(config.simulate_latency);
        assert!(!config.is_secure());
    }

    #[test]
    fn test_is_secure_for_https() {
        let config = ServerConfig {
            base_url: "https://shop.comxstore.ng".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.is_secure());
    }

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        for value in ["1", "true", "YES", "On"] {
            assert!(parse_bool("FLAG", value).unwrap());
        }
        for value in ["0", "false", "No", "OFF"] {
            assert!(!parse_bool("FLAG", value).unwrap());
        }
    }

    #[test]
    fn test_parse_bool_rejects_garbage() {
        let err = parse_bool("FLAG", "maybe").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "FLAG"));
    }

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let port: u16 = parse_env("COMXSTORE_TEST_UNSET_PORT_VARIABLE", 4242).unwrap();
        assert_eq!(port, 4242);
    }
}
