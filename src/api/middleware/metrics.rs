//! HTTP metrics middleware

use std::time::Instant;

use axum::{body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response};

use crate::infrastructure::observability::record_http_request;

/// Record count, latency and status of every request.
///
/// Only the matched route pattern is used as a label, so unknown paths
/// collapse into one series.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string());

    let response = next.run(request).await;

    record_http_request(
        method.as_str(),
        path.as_deref(),
        response.status().as_u16(),
        start.elapsed(),
    );

    response
}
