//! Configuration management for the AgroSense server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with AGRO__ prefix

use config::{builder::DefaultState, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Sample data generation
    pub sample_data: SampleDataConfig,

    /// Yield model tuning
    pub yield_model: YieldModelConfig,

    /// Log output
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SampleDataConfig {
    /// Seed for the sensor and market series
    pub seed: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct YieldModelConfig {
    /// Regression weight of the predicted crop's own catalog row
    pub crop_weight: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Emit JSON log lines instead of human-readable output
    pub json: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("AGRO_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = Self::defaults(&environment)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRO_ prefix)
            .add_source(
                Environment::with_prefix("AGRO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Builder holding only the in-code default values
    fn defaults(environment: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("environment", environment)?
            .set_default("server.port", 8501)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("sample_data.seed", 2023)?
            .set_default("yield_model.crop_weight", 1.0)?
            .set_default("logging.json", false)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            sample_data: SampleDataConfig { seed: 2023 },
            yield_model: YieldModelConfig { crop_weight: 1.0 },
            logging: LoggingConfig { json: false },
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8501,
            host: "0.0.0.0".to_string(),
        }
    }
}
