use std::time::{Duration, Instant};

use axum::{middleware::Next, response::Response};

/// Log one line per request with its outcome and latency.
pub async fn request_log(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let res = next.run(req).await;

    tracing::info!(
        %method,
        %path,
        status = res.status().as_u16(),
        elapsed_ms = elapsed_ms(started.elapsed()),
        "request handled"
    );
    res
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_reported_in_whole_milliseconds() {
        assert_eq!(elapsed_ms(Duration::from_micros(2_750)), 2);
    }

    #[test]
    fn huge_durations_saturate_instead_of_wrapping() {
        assert_eq!(elapsed_ms(Duration::MAX), u64::MAX);
    }
}
