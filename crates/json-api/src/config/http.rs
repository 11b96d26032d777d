//! HTTP listener settings.

use std::time::Duration;

use clap::Args;

/// Where the API listens and what counts as a slow request.
#[derive(Debug, Args)]
pub struct HttpConfig {
    /// Interface to bind
    #[arg(short = 'H', long = "host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[arg(short, long = "port", env = "SERVER_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Requests slower than this many milliseconds are logged as warnings
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000)]
    pub slow_request_threshold_ms: u64,
}

impl HttpConfig {
    /// `host:port` pair handed to the TCP listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    #[must_use]
    pub fn slow_request_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_request_threshold_ms)
    }
}
