use actix_web::{HttpResponse, Responder};
use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, TextEncoder};

/// Handler that serialises Prometheus metrics in text format.
pub async fn metrics_handler() -> impl Responder {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(_) => HttpResponse::Ok()
            .content_type(encoder.format_type())
            .body(buffer),
        Err(err) => HttpResponse::InternalServerError().body(err.to_string()),
    }
}

/// Register all counters so they are exported before the first request
pub fn initialize_auth_metrics() {
    Lazy::force(&SIGNUP_REQUESTS_TOTAL);
    Lazy::force(&SIGNUP_FAILURES_TOTAL);
    Lazy::force(&REFRESH_TOKEN_REQUESTS_TOTAL);
}

fn register_counter(name: &str, help: &str) -> Option<IntCounter> {
    IntCounter::new(name, help)
        .and_then(|c| {
            prometheus::default_registry().register(Box::new(c.clone()))?;
            Ok(c)
        })
        .map_err(|e| tracing::error!("failed to create {} counter: {}", name, e))
        .ok()
}

static SIGNUP_REQUESTS_TOTAL: Lazy<Option<IntCounter>> = Lazy::new(|| {
    register_counter("signup_requests_total", "Total number of signup requests")
});

/// Signups rejected by validation, duplicates or upload failures
static SIGNUP_FAILURES_TOTAL: Lazy<Option<IntCounter>> = Lazy::new(|| {
    register_counter("signup_failures_total", "Total number of failed signup requests")
});

static REFRESH_TOKEN_REQUESTS_TOTAL: Lazy<Option<IntCounter>> = Lazy::new(|| {
    register_counter(
        "refresh_token_requests_total",
        "Total number of refresh token requests",
    )
});

#[inline]
pub fn inc_signup_requests() {
    if let Some(counter) = SIGNUP_REQUESTS_TOTAL.as_ref() {
        counter.inc();
    }
}

#[inline]
pub fn inc_signup_failures() {
    if let Some(counter) = SIGNUP_FAILURES_TOTAL.as_ref() {
        counter.inc();
    }
}

#[inline]
pub fn inc_refresh_token_requests() {
    if let Some(counter) = REFRESH_TOKEN_REQUESTS_TOTAL.as_ref() {
        counter.inc();
    }
}
