//! Tracing subscriber, OTLP export and HTTP metrics.

mod metrics;
mod otel;
mod request;
mod subscriber;

use opentelemetry_sdk::trace::SdkTracerProvider;
use thiserror::Error;
use tracing::error;

use crate::config::telemetry::TelemetryConfig;

pub(crate) use metrics::{metrics_handler, record_purchase, record_unlock};
pub(crate) use request::RequestLogger;

#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    #[error("failed to build OTLP span exporter: {0}")]
    Exporter(#[from] opentelemetry_otlp::ExporterBuildError),

    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Handle kept alive for the lifetime of the server so spans can be flushed on exit.
#[derive(Debug)]
pub(crate) struct Observability {
    tracer_provider: Option<SdkTracerProvider>,
}

impl Observability {
    pub(crate) fn init(config: &TelemetryConfig) -> Result<Self, ObservabilityError> {
        let tracer_provider = config
            .otel_enabled
            .then(|| otel::tracer_provider(config))
            .transpose()?;

        subscriber::install(config, tracer_provider.as_ref())?;

        Ok(Self { tracer_provider })
    }

    pub(crate) fn shutdown(self) {
        if let Some(provider) = self.tracer_provider
            && let Err(source) = provider.shutdown()
        {
            error!("failed to flush spans on shutdown: {source}");
        }
    }
}
