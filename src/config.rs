//! Configuration module for the event registry
//!
//! This module loads the demonstration driver's settings from environment
//! variables (optionally via a `.env` file) into strongly-typed structures.

use chrono::Duration;
use envconfig::Envconfig;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct Config {
    /// Logging configuration
    #[serde(flatten)]
    #[envconfig(nested = true)]
    pub logging: LoggingConfig,

    /// Demonstration driver configuration
    #[serde(flatten)]
    #[envconfig(nested = true)]
    pub demo: DemoConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct LoggingConfig {
    /// Log level
    #[envconfig(from = "LOG_LEVEL", default = "info")]
    pub log_level: String,

    /// Environment (development, staging, production)
    #[envconfig(from = "ENVIRONMENT", default = "development")]
    pub environment: String,
}

impl LoggingConfig {
    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// How the driver prints entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Display summaries only
    Text,
    /// Display summaries followed by JSON snapshots
    Json,
}

/// Demonstration driver configuration
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct DemoConfig {
    /// Days ahead of now at which sample events are scheduled
    #[envconfig(from = "DEMO_LEAD_DAYS", default = "30")]
    pub lead_days: i64,

    /// Output mode (text, json)
    #[envconfig(from = "DEMO_OUTPUT", default = "text")]
    pub output: String,
}

/// Upper bound for `DEMO_LEAD_DAYS`, about a century
pub const MAX_LEAD_DAYS: i64 = 36_500;

impl DemoConfig {
    /// The configured lead time, bounded to `1..=MAX_LEAD_DAYS` days
    pub fn lead_time(&self) -> Result<Duration> {
        if !(1..=MAX_LEAD_DAYS).contains(&self.lead_days) {
            return Err(Error::config(format!(
                "Demo lead days must be between 1 and {}, got {}",
                MAX_LEAD_DAYS, self.lead_days
            )));
        }

        Duration::try_days(self.lead_days)
            .ok_or_else(|| Error::config("Demo lead days out of range"))
    }

    /// Parse the configured output mode
    pub fn output_mode(&self) -> Result<OutputMode> {
        match self.output.to_lowercase().as_str() {
            "text" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            other => Err(Error::config(format!(
                "Unknown output mode '{}'. Expected: text or json",
                other
            ))),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenv::dotenv().ok();

        Config::init_from_env().map_err(Error::from)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.demo.lead_time()?;
        self.demo.output_mode()?;

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!(
            environment = %self.logging.environment,
            log_level = %self.logging.log_level,
            "Logging configuration"
        );

        tracing::info!(
            lead_days = %self.demo.lead_days,
            output = %self.demo.output,
            "Demo configuration"
        );
    }
}
