//! Prometheus metrics for the HTTP surface and the unlock funnel.

use std::{sync::LazyLock, time::Duration};

use prometheus::{
    Encoder as _, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};
use salvo::{Request, Response, handler, http::{StatusCode, header::CONTENT_TYPE}};
use tracing::error;

const NAMESPACE: &str = "domestic_connect";

/// Latency buckets in seconds; catalog reads sit at the low end, unlocks near the middle.
const LATENCY_BUCKETS: [f64; 10] = [0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0];

#[derive(Debug)]
struct Metrics {
    registry: Registry,
    http_requests: IntCounterVec,
    http_latency: HistogramVec,
    contact_unlocks: IntCounterVec,
    purchases: IntCounter,
}

static METRICS: LazyLock<Option<Metrics>> = LazyLock::new(|| match Metrics::register() {
    Ok(metrics) => Some(metrics),
    Err(source) => {
        error!("metrics disabled, registration failed: {source}");
        None
    }
});

impl Metrics {
    fn register() -> prometheus::Result<Self> {
        let registry = Registry::new_custom(Some(NAMESPACE.to_owned()), None)?;

        let http_requests = IntCounterVec::new(
            Opts::new("http_requests_total", "Requests served, by route template and status."),
            &["method", "route", "status"],
        )?;

        let http_latency = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "Time spent serving a request.")
                .buckets(LATENCY_BUCKETS.to_vec()),
            &["method", "route"],
        )?;

        let contact_unlocks = IntCounterVec::new(
            Opts::new(
                "contact_unlocks_total",
                "Unlock calls, split into fresh grants and repeats of an existing grant.",
            ),
            &["outcome"],
        )?;

        let purchases = IntCounter::new("purchases_recorded_total", "Purchases written to the ledger.")?;

        registry.register(Box::new(http_requests.clone()))?;
        registry.register(Box::new(http_latency.clone()))?;
        registry.register(Box::new(contact_unlocks.clone()))?;
        registry.register(Box::new(purchases.clone()))?;

        Ok(Self {
            registry,
            http_requests,
            http_latency,
            contact_unlocks,
            purchases,
        })
    }
}

pub(super) fn observe_request(method: &str, route: &str, status: StatusCode, elapsed: Duration) {
    let Some(metrics) = METRICS.as_ref() else {
        return;
    };

    metrics
        .http_requests
        .with_label_values(&[method, route, status.as_str()])
        .inc();

    metrics
        .http_latency
        .with_label_values(&[method, route])
        .observe(elapsed.as_secs_f64());
}

/// Count an unlock call by whether it created the grant.
pub(crate) fn record_unlock(granted: bool) {
    if let Some(metrics) = METRICS.as_ref() {
        let outcome = if granted { "granted" } else { "existing" };

        metrics.contact_unlocks.with_label_values(&[outcome]).inc();
    }
}

pub(crate) fn record_purchase() {
    if let Some(metrics) = METRICS.as_ref() {
        metrics.purchases.inc();
    }
}

/// Prometheus text exposition.
#[handler]
pub(crate) async fn metrics_handler(_req: &mut Request, res: &mut Response) {
    let Some(metrics) = METRICS.as_ref() else {
        res.status_code(StatusCode::SERVICE_UNAVAILABLE);
        return;
    };

    let encoder = TextEncoder::new();

    let body = match encoder.encode_to_string(&metrics.registry.gather()) {
        Ok(body) => body,
        Err(source) => {
            error!("failed to encode metrics: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

            return;
        }
    };

    if let Err(source) = res.add_header(CONTENT_TYPE, encoder.format_type(), true) {
        error!("failed to set metrics content type: {source}");
    }

    res.render(body);
}

#[cfg(test)]
mod tests {
    use salvo::{
        Router, Service,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    async fn scrape() -> TestResult<String> {
        let service = Service::new(Router::with_path("metrics").get(metrics_handler));

        let body = TestClient::get("http://example.com/metrics")
            .send(&service)
            .await
            .take_string()
            .await?;

        Ok(body)
    }

    #[tokio::test]
    async fn http_requests_are_labelled_by_route_template() -> TestResult {
        observe_request(
            "GET",
            "/contact-access/{id}",
            StatusCode::OK,
            Duration::from_millis(12),
        );

        let body = scrape().await?;

        assert!(
            body.contains(
                r#"domestic_connect_http_requests_total{method="GET",route="/contact-access/{id}",status="200"}"#
            ),
            "request counter should carry the route template: {body}"
        );
        assert!(
            body.contains("domestic_connect_http_request_duration_seconds_bucket"),
            "latency histogram should be exposed"
        );

        Ok(())
    }

    #[tokio::test]
    async fn unlock_outcomes_are_counted_separately() -> TestResult {
        record_unlock(true);
        record_unlock(false);
        record_purchase();

        let body = scrape().await?;

        assert!(
            body.contains(r#"domestic_connect_contact_unlocks_total{outcome="granted"}"#),
            "fresh grants should be counted"
        );
        assert!(
            body.contains(r#"domestic_connect_contact_unlocks_total{outcome="existing"}"#),
            "repeat unlocks should be counted"
        );
        assert!(
            body.contains("domestic_connect_purchases_recorded_total"),
            "purchases should be counted"
        );

        Ok(())
    }
}
