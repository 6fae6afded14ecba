//! Request-span middleware.
//!
//! Every request gets one `http_request` span that opens before routing and
//! closes when the response future completes or is dropped. With the
//! OpenTelemetry layer installed these become server spans in Jaeger; an
//! incoming W3C `traceparent` header makes the span a child of the caller.

use std::time::Duration;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderMap, Request, Response},
    Router,
};
use opentelemetry::{global, propagation::Extractor};
use tower_http::trace::TraceLayer;
use tracing::{field::Empty, Span};
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Wrap every route (and the fallback) of `router` in a request span.
pub fn instrument(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(make_span)
            .on_response(record_response),
    )
}

fn make_span(req: &Request<Body>) -> Span {
    // Unmatched requests are named by method only; raw paths would give every
    // 404 its own span name.
    let route = req.extensions().get::<MatchedPath>().map(MatchedPath::as_str);
    let name = match route {
        Some(route) => format!("{} {}", req.method(), route),
        None => req.method().to_string(),
    };

    let span = tracing::info_span!(
        "http_request",
        otel.name = %name,
        otel.kind = "server",
        otel.status_code = Empty,
        http.method = %req.method(),
        http.route = Empty,
        http.target = %req.uri(),
        http.status_code = Empty,
    );
    if let Some(route) = route {
        span.record("http.route", route);
    }

    let parent = global::get_text_map_propagator(|p| p.extract(&HeaderExtractor(req.headers())));
    span.set_parent(parent);
    span
}

fn record_response(res: &Response<Body>, latency: Duration, span: &Span) {
    let status = res.status();
    span.record("http.status_code", status.as_u16());
    if status.is_server_error() {
        span.record("otel.status_code", "ERROR");
    }
    tracing::debug!(
        status = status.as_u16(),
        latency_ms = latency.as_millis() as u64,
        "request finished"
    );
}

/// Read-only view of request headers for the text map propagator.
struct HeaderExtractor<'a>(&'a HeaderMap);

impl Extractor for HeaderExtractor<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(|k| k.as_str()).collect()
    }
}
