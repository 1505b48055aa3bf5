//! Prometheus metrics for publisher-service.
//!
//! Request-level collectors plus the HTTP handler for the `/metrics` endpoint.

use actix_web::HttpResponse;
use once_cell::sync::Lazy;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};
use std::time::Duration;

static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "publisher_http_requests_total",
        "Total HTTP requests handled",
        &["method"]
    )
    .expect("metric can be registered")
});

static HTTP_REQUEST_DURATION_SECONDS: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "publisher_http_request_duration_seconds",
        "HTTP request latency",
        &["method"]
    )
    .expect("metric can be registered")
});

/// Record one handled request.
pub fn observe_request(method: &str, elapsed: Duration) {
    HTTP_REQUESTS_TOTAL.with_label_values(&[method]).inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method])
        .observe(elapsed.as_secs_f64());
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
