//! Bootstrap configuration loading and resolution
//!
//! Every setting is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Command-line arguments and environment variables arrive together as
//! [`ConfigOverrides`] (the binary's argument parser reads both). A missing
//! TOML file is not an error; a malformed one is.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Default HTTP bind address
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8081;

/// Default recording search endpoint
pub const DEFAULT_MUSIC_SERVICE_URL: &str = "https://musicbrainz.org/ws/2/recording";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Number of candidate recordings requested per search
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// Upper bound accepted by the search service for `limit`
pub const MAX_SEARCH_LIMIT: u32 = 100;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum spacing between outbound search requests (1 request/second)
pub const DEFAULT_RATE_LIMIT_MS: u64 = 1000;

/// Configuration file contents
///
/// Every field is optional so a partial file only overrides what it names.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub database_url: Option<String>,
    pub music_service_url: Option<String>,
    pub search_limit: Option<u32>,
    pub request_timeout_secs: Option<u64>,
    pub rate_limit_ms: Option<u64>,
    pub logging: LoggingConfig,
}

/// Logging section of the configuration file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub database_url: Option<String>,
    pub music_service_url: Option<String>,
    pub log_level: Option<String>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind: String,
    pub port: u16,
    pub database_url: String,
    pub music_service_url: String,
    pub log_level: String,
    pub search_limit: u32,
    pub request_timeout: Duration,
    pub rate_limit: Duration,
}

impl ServiceConfig {
    /// Merge overrides over the TOML file over compiled defaults
    pub fn resolve(overrides: ConfigOverrides, toml_config: TomlConfig) -> Result<Self> {
        let search_limit = toml_config.search_limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        if search_limit == 0 || search_limit > MAX_SEARCH_LIMIT {
            return Err(Error::Config(format!(
                "search_limit must be between 1 and {}, got {}",
                MAX_SEARCH_LIMIT, search_limit
            )));
        }

        let request_timeout_secs = toml_config
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        if request_timeout_secs == 0 {
            return Err(Error::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        let music_service_url = overrides
            .music_service_url
            .or(toml_config.music_service_url)
            .unwrap_or_else(|| DEFAULT_MUSIC_SERVICE_URL.to_string());
        if !music_service_url.starts_with("http://") && !music_service_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "music_service_url must be an http(s) URL, got '{}'",
                music_service_url
            )));
        }

        let database_url = match overrides.database_url.or(toml_config.database_url) {
            Some(url) => url,
            None => default_database_url()?,
        };

        Ok(Self {
            bind: overrides
                .bind
                .or(toml_config.bind)
                .unwrap_or_else(|| DEFAULT_BIND.to_string()),
            port: overrides.port.or(toml_config.port).unwrap_or(DEFAULT_PORT),
            database_url,
            music_service_url,
            log_level: overrides
                .log_level
                .or(toml_config.logging.level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
                .to_lowercase(),
            search_limit,
            request_timeout: Duration::from_secs(request_timeout_secs),
            rate_limit: Duration::from_millis(
                toml_config.rate_limit_ms.unwrap_or(DEFAULT_RATE_LIMIT_MS),
            ),
        })
    }

    /// `host:port` string for the HTTP listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

/// Load the configuration file
///
/// With an explicit path, that file is read. Otherwise the platform config
/// location is tried. A missing file yields defaults with a warning.
pub fn load_toml_config(explicit_path: Option<&Path>) -> Result<TomlConfig> {
    let path = match explicit_path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => {
                debug!("No platform config directory, using built-in defaults");
                return Ok(TomlConfig::default());
            }
        },
    };

    if !path.exists() {
        if explicit_path.is_some() {
            warn!("Config file not found: {}, using defaults", path.display());
        } else {
            debug!("No config file at {}, using defaults", path.display());
        }
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(&path)?;
    parse_toml_config(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
}

/// Parse configuration file contents
pub fn parse_toml_config(content: &str) -> Result<TomlConfig> {
    toml::from_str(content).map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))
}

/// Platform configuration file location (`<config_dir>/songmeta/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("songmeta").join("config.toml"))
}

/// SQLite URL under the platform data directory
///
/// Creates the parent directory so `mode=rwc` can create the file.
pub fn default_database_url() -> Result<String> {
    let data_dir = dirs::data_local_dir()
        .map(|d| d.join("songmeta"))
        .unwrap_or_else(|| PathBuf::from("./songmeta_data"));
    std::fs::create_dir_all(&data_dir)?;

    Ok(format!(
        "sqlite://{}?mode=rwc",
        data_dir.join("songs.db").display()
    ))
}
