//! Configuration management for the roster service.
//!
//! Configuration loading and validation using figment, supporting TOML
//! config files, environment variables, and defaults.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "roster";

/// Default database file path, relative to the working directory.
const DATABASE_FILE_PATH: &str = "db/roster.db";

/// Default static assets directory, relative to the working directory.
const ASSETS_DIR_PATH: &str = "assets";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `ROSTER_`)
/// 2. TOML config file at `~/.config/roster/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Storage configuration.
    pub storage: StorageConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,
    /// Address to bind.
    pub bind: IpAddr,
    /// Directory holding the static image assets served under `/assets`.
    /// Defaults to `assets` in the working directory.
    pub assets_dir: Option<PathBuf>,
    /// Origins allowed by the CORS allow-list.
    pub cors_allowed_origins: Vec<String>,
}

/// Storage configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the database file.
    /// Defaults to `db/roster.db` in the working directory.
    pub database_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            bind: IpAddr::from([0, 0, 0, 0]),
            assets_dir: None,
            cors_allowed_origins: default_cors_origins(),
        }
    }
}

/// Default CORS allow-list: the local dev hosts the site is served from.
fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:5173".to_string(),
    ]
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("ROSTER_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::ConfigValidation {
                message: "server.port must not be 0".to_string(),
            });
        }

        for origin in &self.server.cors_allowed_origins {
            if origin.trim().is_empty() {
                return Err(Error::ConfigValidation {
                    message: "cors_allowed_origins must not contain empty entries".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Get the database path, resolving the default if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DATABASE_FILE_PATH))
    }

    /// Get the assets directory, resolving the default if not set.
    #[must_use]
    pub fn assets_dir(&self) -> PathBuf {
        self.server
            .assets_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(ASSETS_DIR_PATH))
    }

    /// The socket address the server listens on.
    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.bind, self.server.port)
    }
}
