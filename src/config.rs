//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Recommendation service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum number of concurrent recommendation channels
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,

    /// Directory with the built dashboard, served at `/` when set
    #[serde(default)]
    pub static_dir: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_connections() -> usize {
    1000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_connections: default_max_connections(),
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Catalog source
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// CSV file with `product,recommendation` rows; demo dataset when unset
    #[serde(default)]
    pub path: Option<String>,
}

impl CatalogConfig {
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref().map(Path::new)
    }
}

/// Native feed client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Recommendation channel endpoint
    #[serde(default = "default_client_url")]
    pub url: String,

    /// HTTP base for catalog lookups
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// How long `recommend` waits for a reply (seconds)
    #[serde(default = "default_reply_timeout")]
    pub reply_timeout_secs: u64,
}

fn default_client_url() -> String {
    "ws://localhost:5000/ws".to_string()
}

fn default_api_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_reply_timeout() -> u64 {
    5
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: default_client_url(),
            api_url: default_api_url(),
            reply_timeout_secs: default_reply_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("recofeed").join("config.toml")),
            Some(PathBuf::from("/etc/recofeed/config.toml")),
            Some(PathBuf::from("./recofeed.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = var("RECOFEED_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("RECOFEED_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(max) = var("RECOFEED_MAX_CONNECTIONS") {
            if let Ok(m) = max.parse() {
                self.server.max_connections = m;
            }
        }
        if let Some(dir) = var("RECOFEED_STATIC_DIR") {
            self.server.static_dir = Some(dir);
        }

        // Catalog overrides
        if let Some(path) = var("RECOFEED_CATALOG") {
            self.catalog.path = Some(path);
        }

        // Client overrides
        if let Some(url) = var("RECOFEED_URL") {
            self.client.url = url;
        }
        if let Some(url) = var("RECOFEED_API_URL") {
            self.client.api_url = url;
        }

        // Logging overrides
        if let Some(level) = var("RECOFEED_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("RECOFEED_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Recofeed Configuration
#
# Environment variables override these settings:
# - RECOFEED_HOST
# - RECOFEED_PORT
# - RECOFEED_MAX_CONNECTIONS
# - RECOFEED_STATIC_DIR
# - RECOFEED_CATALOG
# - RECOFEED_URL
# - RECOFEED_API_URL
# - RECOFEED_LOG_LEVEL
# - RECOFEED_LOG_FORMAT

[server]
# Recommendation service host
host = "0.0.0.0"

# Recommendation service port
port = 5000

# Maximum concurrent recommendation channels
max_connections = 1000

# Serve the built dashboard from this directory
# static_dir = "recofeed-ui/dist"

[catalog]
# CSV file with `product,recommendation` rows (demo dataset when unset)
# path = "catalog.csv"

[client]
# Recommendation channel endpoint
url = "ws://localhost:5000/ws"

# HTTP base for catalog lookups
api_url = "http://localhost:5000"

# Seconds to wait for a reply
reply_timeout_secs = 5

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
