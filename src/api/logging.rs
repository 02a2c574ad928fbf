use axum::{extract::Request, middleware::Next, response::Response};
use log::{error, info, warn};
use std::time::Instant;

/// Logs method, path, status and latency of every request.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed = started.elapsed();
    if status.is_server_error() {
        error!("{} {} -> {} in {:?}", method, uri, status, elapsed);
    } else if status.is_client_error() {
        warn!("{} {} -> {} in {:?}", method, uri, status, elapsed);
    } else {
        info!("{} {} -> {} in {:?}", method, uri, status, elapsed);
    }
    response
}
