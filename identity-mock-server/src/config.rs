//! Configuration for the identity mock.

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

use crate::store::IdStrategy;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Load the two sample users at startup.
    #[serde(default = "default_true")]
    pub seed_sample_users: bool,
    /// How identifiers for new users are generated.
    #[serde(default)]
    pub id_strategy: IdStrategy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_sample_users: true,
            id_strategy: IdStrategy::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log every request body and query at INFO.
    #[serde(default = "default_true")]
    pub log_payloads: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_payloads: true,
        }
    }
}

// Default values
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    6000
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Configuration sources (in order of precedence):
    /// 1. Environment variables (IDMOCK__SECTION__KEY format)
    /// 2. config.toml file (if present)
    /// 3. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        // Load from config.toml if exists
        let builder = ConfigLoader::builder().add_source(File::with_name("config").required(false));
        Self::load_from(builder)
    }

    fn load_from(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let config = builder
            .add_source(
                Environment::with_prefix("IDMOCK")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port() as i64)?
            .set_default("store.seed_sample_users", true)?
            .set_default("store.id_strategy", IdStrategy::default().to_string())?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.log_payloads", true)?
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 6000);
        assert!(config.store.seed_sample_users);
        assert_eq!(config.store.id_strategy, IdStrategy::Sequential);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.log_payloads);
    }

    #[test]
    fn test_load_from_toml() {
        let toml = r#"
            [server]
            port = 7000

            [store]
            seed_sample_users = false
            id_strategy = "uuid"
        "#;

        let builder = ConfigLoader::builder().add_source(File::from_str(toml, FileFormat::Toml));
        let config = Config::load_from(builder).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 7000);
        assert!(!config.store.seed_sample_users);
        assert_eq!(config.store.id_strategy, IdStrategy::Uuid);
        assert!(config.logging.log_payloads);
    }
}
