//! Per-request span, `x-request-id` propagation and access logging.

use std::time::{Duration, Instant};

use salvo::{
    handler,
    http::{StatusCode, header::HeaderValue},
    prelude::{Depot, FlowCtrl, Request, Response},
};
use tracing::{Instrument as _, Span, error, field, info, info_span, warn};
use uuid::Uuid;

use super::metrics;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest caller-supplied request id echoed back; anything longer is replaced.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Path segments that are followed by an opaque identifier.
const COLLECTIONS: [&str; 3] = ["packages", "purchases", "contact-access"];

/// Wraps every route in an `http.request` span and records its outcome.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestLogger {
    slow_threshold: Duration,
}

impl RequestLogger {
    pub(crate) fn new(slow_threshold: Duration) -> Self {
        Self { slow_threshold }
    }
}

#[handler]
impl RequestLogger {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        if req.uri().path() == "/metrics" {
            ctrl.call_next(req, depot, res).await;
            return;
        }

        let started = Instant::now();
        let request_id = request_id(req.header::<String>(REQUEST_ID_HEADER));
        let method = req.method().as_str().to_owned();
        let route = route_template(req.uri().path());
        let span_name = format!("{method} {route}");

        let span = info_span!(
            parent: None,
            "http.request",
            otel.name = %span_name,
            otel.kind = "server",
            request_id = %request_id,
            method = %method,
            route = %route,
            status = field::Empty,
            duration_ms = field::Empty
        );

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }

        ctrl.call_next(req, depot, res)
            .instrument(span.clone())
            .await;

        let elapsed = started.elapsed();
        let status = res.status_code.unwrap_or(StatusCode::OK);

        metrics::observe_request(&method, &route, status, elapsed);

        self.log_completion(&span, status, elapsed);
    }
}

impl RequestLogger {
    fn log_completion(&self, span: &Span, status: StatusCode, elapsed: Duration) {
        let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

        span.record("status", status.as_u16());
        span.record("duration_ms", duration_ms);

        span.in_scope(|| {
            if status.is_server_error() {
                error!(status = status.as_u16(), duration_ms, "request failed");
            } else if status.is_client_error() {
                warn!(status = status.as_u16(), duration_ms, "request rejected");
            } else {
                info!(status = status.as_u16(), duration_ms, "request completed");
            }

            if elapsed > self.slow_threshold {
                warn!(
                    duration_ms,
                    threshold_ms = u64::try_from(self.slow_threshold.as_millis()).unwrap_or(u64::MAX),
                    "slow request"
                );
            }
        });
    }
}

/// Reuse the caller's id when it is a short printable token, otherwise mint one.
fn request_id(supplied: Option<String>) -> String {
    supplied
        .map(|id| id.trim().to_owned())
        .filter(|id| {
            !id.is_empty()
                && id.len() <= MAX_REQUEST_ID_LEN
                && id.bytes().all(|byte| byte.is_ascii_graphic())
        })
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

/// Collapse identifiers so spans and metric labels stay low-cardinality.
fn route_template(path: &str) -> String {
    let mut template = String::with_capacity(path.len());
    let mut previous = "";

    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        template.push('/');

        if COLLECTIONS.contains(&previous) {
            template.push_str("{id}");
        } else {
            template.push_str(segment);
        }

        previous = segment;
    }

    if template.is_empty() {
        template.push('/');
    }

    template
}

#[cfg(test)]
mod tests {
    use salvo::{Router, Service, test::TestClient};

    use super::*;

    #[handler]
    async fn ok(res: &mut Response) {
        res.render("ok");
    }

    fn service() -> Service {
        Service::new(
            Router::new()
                .hoop(RequestLogger::new(Duration::from_secs(1)))
                .push(Router::with_path("contact-access/{target}").get(ok)),
        )
    }

    #[test]
    fn identifiers_after_collections_are_templated() {
        assert_eq!(route_template("/packages"), "/packages");
        assert_eq!(route_template("/packages/pkg_basic"), "/packages/{id}");
        assert_eq!(route_template("/contact-access/target_42"), "/contact-access/{id}");
        assert_eq!(route_template("/healthcheck"), "/healthcheck");
        assert_eq!(route_template("/"), "/");
    }

    #[test]
    fn unusable_request_ids_are_replaced() {
        assert_eq!(request_id(Some("req-1".to_owned())), "req-1");

        for supplied in [None, Some(String::new()), Some("has space".to_owned()), Some("x".repeat(200))] {
            let id = request_id(supplied.clone());

            assert!(Uuid::parse_str(&id).is_ok(), "{supplied:?} should be replaced, got {id}");
        }
    }

    #[tokio::test]
    async fn caller_request_id_is_echoed() {
        let res = TestClient::get("http://example.com/contact-access/target_42")
            .add_header(REQUEST_ID_HEADER, "req-42", true)
            .send(&service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            res.headers().get(REQUEST_ID_HEADER).and_then(|value| value.to_str().ok()),
            Some("req-42")
        );
    }

    #[tokio::test]
    async fn missing_request_id_is_generated() {
        let res = TestClient::get("http://example.com/contact-access/target_42")
            .send(&service())
            .await;

        let id = res
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        assert!(Uuid::parse_str(id).is_ok(), "generated id should be a uuid, got {id:?}");
    }
}
