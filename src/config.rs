//! TOML configuration parsing.
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:8000"
//!
//! [search]
//! tie_break = "earliest_second"   # or "lexicographic"
//!
//! [logging]
//! level = "info"                  # RUST_LOG overrides this
//! ```
//!
//! Every section is optional; missing keys fall back to the defaults below.

use anyhow::{Context, Result};
use price_gap_core::gap::TieBreak;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8000".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SearchConfig {
    /// Which pair wins when several qualify.
    #[serde(default)]
    pub tie_break: TieBreak,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// A `tracing` filter directive such as `info` or `price_gap=debug`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

impl Config {
    /// The bind address as a socket address. Only fails for configs that
    /// bypassed [`load_config`].
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server.bind.parse().with_context(|| {
            format!(
                "server.bind must be a socket address (host:port), got '{}'",
                self.server.bind
            )
        })
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    validate(&config)?;
    Ok(config)
}

/// Load `path` if it exists, otherwise fall back to [`Config::default`].
///
/// A file that exists but fails to parse or validate is still an error.
pub fn load_config_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(Config::default())
    }
}

fn validate(config: &Config) -> Result<()> {
    config.bind_addr()?;

    if config.logging.level.trim().is_empty() {
        anyhow::bail!("logging.level must not be empty");
    }
    EnvFilter::try_new(&config.logging.level).with_context(|| {
        format!(
            "logging.level is not a valid filter directive: '{}'",
            config.logging.level
        )
    })?;

    Ok(())
}
