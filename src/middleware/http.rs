//! HTTP-level middleware (cross-cutting concerns).
//!
//! Responsibility:
//! - Request-Id generation + propagation (X-Request-Id)
//! - Access logging / request tracing (TraceLayer)
//! - Body size limits
//! - Global timeouts
//!
//! Notes:
//! - Applied once, at the outermost Router, so it wraps both public and protected routes.
//! - Limits come from `Config` (REQUEST_TIMEOUT_SECONDS / REQUEST_BODY_LIMIT_BYTES).
//! - Layer order matters: requests pass top to bottom, responses bottom to top. The
//!   request id is set before TraceLayer runs so every access log line carries it.

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::{StatusCode, header::HeaderName};
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Apply HTTP-level middleware to the given Router.
///
/// Responses:
/// - 408 when a request outlives `config.request_timeout`
/// - 413 when `Content-Length` exceeds `config.request_body_limit_bytes`
/// - `x-request-id` echoed back (generated as a UUID when the client sent none)
pub fn apply(router: Router, config: &Config) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    let layers = ServiceBuilder::new()
        // Make the service error `Infallible` by converting errors into responses.
        .layer(HandleErrorLayer::new(|err: BoxError| async move {
            if err.is::<tower::timeout::error::Elapsed>() {
                StatusCode::REQUEST_TIMEOUT
            } else {
                tracing::error!(error = %err, "unhandled middleware error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }))
        // Generate a request id if missing, then propagate it to the response.
        .layer(SetRequestIdLayer::new(
            request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header))
        // Reject oversized bodies before any handler buffers them.
        .layer(RequestBodyLimitLayer::new(config.request_body_limit_bytes))
        // Bound request time; Elapsed is turned into 408 by HandleErrorLayer above.
        .layer(TimeoutLayer::new(config.request_timeout))
        // Access log / tracing for all requests.
        .layer(TraceLayer::new_for_http());

    router.layer(layers)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, header};
    use axum::routing::{get, post};
    use tower::ServiceExt;

    use super::*;

    fn config() -> Config {
        let mut config = Config::from_source(|key| match key {
            "TOKEN_SYMMETRIC_KEY" => Some("k".repeat(32)),
            "REQUEST_BODY_LIMIT_BYTES" => Some("16".to_string()),
            _ => None,
        })
        .unwrap();
        config.request_timeout = Duration::from_millis(50);
        config
    }

    fn router() -> Router {
        let router = Router::new()
            .route("/fast", get(|| async { "ok" }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                }),
            )
            .route("/echo", post(|body: String| async move { body }));
        apply(router, &config())
    }

    #[tokio::test]
    async fn request_id_is_generated_or_echoed() {
        let req = Request::builder().uri("/fast").body(Body::empty()).unwrap();
        let res = router().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key(REQUEST_ID_HEADER));

        let req = Request::builder()
            .uri("/fast")
            .header(REQUEST_ID_HEADER, "req-123")
            .body(Body::empty())
            .unwrap();
        let res = router().oneshot(req).await.unwrap();
        assert_eq!(res.headers()[REQUEST_ID_HEADER], "req-123");
    }

    #[tokio::test]
    async fn slow_requests_time_out_with_408() {
        let req = Request::builder().uri("/slow").body(Body::empty()).unwrap();
        let res = router().oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn oversized_bodies_are_rejected_with_413() {
        let req = Request::builder()
            .method("POST")
            .uri("/echo")
            .header(header::CONTENT_LENGTH, "64")
            .body(Body::from(vec![b'a'; 64]))
            .unwrap();
        let res = router().oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
