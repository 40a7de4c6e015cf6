//! Application configuration module
//!
//! Loads the server configuration from environment variables. All loading
//! goes through [`AppConfig::from_vars`], which takes an explicit map, so
//! tests can build configurations without touching the process environment.
//!
//! # Optional Services
//!
//! The database, call-token issuer, media host and keep-alive job are all
//! optional. A service whose variables are entirely absent is disabled; a
//! service with only some of its variables set is a configuration error.
//!
//! # Secrets
//!
//! Signing secrets and API secrets are held as [`SecretString`], so deriving
//! `Debug` on any struct in this module never prints them.

use secrecy::SecretString;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default listening port when `PORT` is not set
pub const DEFAULT_PORT: u16 = 5000;

/// Default request body limit (50 MiB)
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 50 * 1024 * 1024;

/// Default keep-alive period (14 minutes)
pub const DEFAULT_KEEPALIVE_INTERVAL_SECS: u64 = 14 * 60;

const DEFAULT_FRONTEND_DIST: &str = "frontend/dist";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

/// Runtime environment of the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    /// Whether the bundled frontend should be served
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// HTTP listener and middleware settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to bind on all interfaces
    pub port: u16,
    /// Development or production
    pub environment: Environment,
    /// Directory holding the prebuilt frontend bundle
    pub frontend_dist: PathBuf,
    /// Maximum accepted request body size
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: Environment::Development,
            frontend_dist: PathBuf::from(DEFAULT_FRONTEND_DIST),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

/// Database connection settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection URL, may embed credentials
    pub url: SecretString,
    /// Upper bound of the connection pool
    pub max_connections: u32,
}

/// Credentials for the third-party calling service
///
/// `app_id` is embedded in every issued token. `server_secret` keys the
/// token signature and must never leave the process.
#[derive(Debug, Clone)]
pub struct CallsConfig {
    pub app_id: String,
    pub server_secret: SecretString,
}

impl CallsConfig {
    pub fn new(app_id: impl Into<String>, server_secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            server_secret: SecretString::from(server_secret.into()),
        }
    }
}

/// Media host credentials consumed by the upload routes
#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: SecretString,
}

/// Periodic keep-alive ping
#[derive(Debug, Clone)]
pub struct KeepAliveConfig {
    /// URL fetched on every tick
    pub url: String,
    /// Time between two pings
    pub interval: Duration,
}

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    /// `None` disables database features
    pub database: Option<DatabaseConfig>,
    /// `None` makes `/api/token` answer 503
    pub calls: Option<CallsConfig>,
    pub media: Option<MediaConfig>,
    /// `None` disables the keep-alive job
    pub keepalive: Option<KeepAliveConfig>,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Load configuration from a map of variables
    ///
    /// Empty and whitespace-only values are treated the same as unset ones.
    /// Settings are trimmed; credentials are kept byte for byte.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get_raw = |name: &str| {
            vars.get(name)
                .map(String::as_str)
                .filter(|value| !value.trim().is_empty())
        };
        let get = |name: &str| get_raw(name).map(str::trim);

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::invalid("PORT", raw))?,
            None => DEFAULT_PORT,
        };

        let body_limit_bytes = match get("BODY_LIMIT_BYTES") {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| ConfigError::invalid("BODY_LIMIT_BYTES", raw))?,
            None => DEFAULT_BODY_LIMIT_BYTES,
        };

        let server = ServerConfig {
            port,
            environment: get("APP_ENV").map(Environment::parse).unwrap_or_default(),
            frontend_dist: PathBuf::from(get("FRONTEND_DIST").unwrap_or(DEFAULT_FRONTEND_DIST)),
            body_limit_bytes,
        };

        let database = match get("DATABASE_URL") {
            Some(url) => {
                let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
                    Some(raw) => raw
                        .parse::<u32>()
                        .ok()
                        .filter(|n| *n > 0)
                        .ok_or_else(|| ConfigError::invalid("DATABASE_MAX_CONNECTIONS", raw))?,
                    None => DEFAULT_DATABASE_MAX_CONNECTIONS,
                };
                Some(DatabaseConfig {
                    url: SecretString::from(url.to_string()),
                    max_connections,
                })
            }
            None => None,
        };

        let calls = match require_all(&get_raw, ["ZEGO_APP_ID", "ZEGO_SERVER_SECRET"])? {
            Some([app_id, secret]) => Some(CallsConfig::new(app_id, secret)),
            None => None,
        };

        let media = match require_all(
            &get_raw,
            ["CLOUDINARY_CLOUD_NAME", "CLOUDINARY_API_KEY", "CLOUDINARY_API_SECRET"],
        )? {
            Some([cloud_name, api_key, api_secret]) => Some(MediaConfig {
                cloud_name: cloud_name.to_string(),
                api_key: api_key.to_string(),
                api_secret: SecretString::from(api_secret.to_string()),
            }),
            None => None,
        };

        let keepalive = match get("KEEPALIVE_URL") {
            Some(url) => {
                let secs = match get("KEEPALIVE_INTERVAL_SECS") {
                    Some(raw) => raw
                        .parse::<u64>()
                        .ok()
                        .filter(|n| *n > 0)
                        .ok_or_else(|| ConfigError::invalid("KEEPALIVE_INTERVAL_SECS", raw))?,
                    None => DEFAULT_KEEPALIVE_INTERVAL_SECS,
                };
                Some(KeepAliveConfig {
                    url: url.to_string(),
                    interval: Duration::from_secs(secs),
                })
            }
            None => None,
        };

        Ok(AppConfig {
            server,
            database,
            calls,
            media,
            keepalive,
        })
    }
}

/// Resolve a group of variables that must be set together.
///
/// Returns `Ok(None)` when none of them is set.
fn require_all<'a, const N: usize>(
    get: &impl Fn(&str) -> Option<&'a str>,
    names: [&'static str; N],
) -> Result<Option<[&'a str; N]>, ConfigError> {
    let values = names.map(|name| get(name));
    if values.iter().all(Option::is_none) {
        return Ok(None);
    }

    let missing: Vec<&'static str> = names
        .iter()
        .zip(values.iter())
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(ConfigError::Incomplete {
            missing: missing.join(", "),
        });
    }

    Ok(Some(values.map(|value| value.unwrap_or_default())))
}

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
    #[error("incomplete configuration, missing: {missing}")]
    Incomplete { missing: String },
}

impl ConfigError {
    fn invalid(var: &'static str, value: &str) -> Self {
        Self::InvalidValue {
            var,
            value: value.to_string(),
        }
    }
}
