use std::time::{Duration, Instant};
use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

/// Logs one line per request with method, path, status and latency.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        latency_us = micros(started.elapsed()),
        "Request handled"
    );
    response
}

/// Saturates instead of wrapping.
fn micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}
