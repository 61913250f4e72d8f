use std::future::Future;

use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec, TextEncoder};

use crate::errors::ApiError;

// Prometheus metrics (default registry)
pub static REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "restaurant_api_requests_total",
        "Restaurant API requests by operation and outcome",
        &["operation", "outcome"]
    )
    .expect("register requests_total")
});

pub static REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "restaurant_api_request_duration_seconds",
        "Restaurant API request duration in seconds",
        &["operation"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .expect("register request_duration")
});

/// Run a handler body, recording its duration and outcome under `operation`.
pub async fn track<T, F>(operation: &'static str, fut: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let timer = REQUEST_DURATION.with_label_values(&[operation]).start_timer();
    let res = fut.await;
    let outcome = match &res {
        Ok(_) => "ok",
        Err(e) => e.kind(),
    };
    REQUESTS_TOTAL.with_label_values(&[operation, outcome]).inc();
    timer.observe_duration();
    res
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    text_response(buffer)
}

fn text_response(buffer: Vec<u8>) -> (StatusCode, String) {
    match String::from_utf8(buffer) {
        Ok(text) => (StatusCode::OK, text),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn track_counts_outcomes() {
        let ok_before = REQUESTS_TOTAL.with_label_values(&["unit_track", "ok"]).get();
        let bad_before = REQUESTS_TOTAL.with_label_values(&["unit_track", "bad_input"]).get();

        let _ = track("unit_track", async { Ok::<_, ApiError>(1) }).await;
        let _ = track("unit_track", async { Err::<(), _>(ApiError::BadInput("nope".into())) }).await;

        assert_eq!(REQUESTS_TOTAL.with_label_values(&["unit_track", "ok"]).get(), ok_before + 1);
        assert_eq!(REQUESTS_TOTAL.with_label_values(&["unit_track", "bad_input"]).get(), bad_before + 1);

        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("restaurant_api_requests_total"));
    }

    #[test]
    fn non_utf8_exposition_is_500() {
        let (status, body) = text_response(vec![0xff, 0xfe]);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.starts_with("metrics encode error"));

        let (status, body) = text_response(b"up 1\n".to_vec());
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "up 1\n");
    }
}
