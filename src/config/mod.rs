//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. The environment surface keeps the names
//! the deployment already uses (`API_KEY`, `MONGO_URI`, `PORT`); nested
//! completion settings use `__` as the separator, e.g.
//! `COMPLETION__MODEL=llama3-8b-8192`.
//!
//! # Example
//!
//! ```no_run
//! use prompt_relay::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let (host, port) = config.bind_addr();
//! println!("Server running on {host}:{port}");
//! ```

mod completion;
mod error;

pub use completion::CompletionConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;
use std::path::PathBuf;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Completion service credential (`API_KEY`)
    pub api_key: String,

    /// MongoDB connection string (`MONGO_URI`)
    pub mongo_uri: String,

    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on (`PORT`)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Optional local file mirroring the latest archived transcript
    #[serde(default)]
    pub transcript_path: Option<PathBuf>,

    /// Completion provider configuration
    #[serde(default)]
    pub completion: CompletionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (development), then reads environment
    /// variables. Nested values use `__` as the separator.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("API_KEY"));
        }
        if !self.mongo_uri.starts_with("mongodb://") && !self.mongo_uri.starts_with("mongodb+srv://")
        {
            return Err(ValidationError::InvalidMongoUri);
        }
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.completion.validate()?;
        Ok(())
    }

    /// Address pair handed to the listener. Resolution is left to the
    /// bind call, so `HOST` may be a hostname as well as an IP address.
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info,prompt_relay=debug".to_string()
}
