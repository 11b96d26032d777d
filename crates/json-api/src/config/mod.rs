//! Server configuration module

use clap::Parser;

use crate::config::{db::DatabaseConfig, http::HttpConfig, telemetry::TelemetryConfig};

pub(crate) mod db;
pub(crate) mod http;
pub(crate) mod telemetry;

/// Domestic Connect JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "domestic-connect-json", about = "Domestic Connect JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Listener settings.
    #[command(flatten)]
    pub http: HttpConfig,

    /// Logging and tracing settings.
    #[command(flatten)]
    pub telemetry: TelemetryConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
