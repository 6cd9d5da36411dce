//! CORS policy for browser clients.
//!
//! Policy:
//! - Development: permissive (Allow-Origin: *), WITHOUT credentials.
//! - Production: allowlist origins from Config (comma-separated env var), WITHOUT credentials.
//!
//! Notes:
//! - CORS is enforced by browsers only; native clients and server-to-server calls
//!   ignore it. It is not an access control layer (the access middleware is).
//! - Bearer tokens travel in the `Authorization` header, never cookies, so
//!   credentials mode is never enabled. That also keeps `Any` legal in development.
//! - Only the methods this API routes (GET / POST) plus preflight are advertised.

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;
use crate::middleware::http::REQUEST_ID_HEADER;

/// Apply CORS policy to the given Router.
///
/// IMPORTANT:
/// - Do not combine wildcard origin (`Any`) with `allow_credentials(true)`.
/// - Allowlist entries are matched exactly (scheme + host + port, no trailing slash).
pub fn apply(router: Router, config: &Config) -> Router {
    let cors = if config.app_env.is_production() {
        // Empty allowlist = no CORS headers at all.
        let allowed: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        let allow_origin = AllowOrigin::predicate(move |origin: &HeaderValue, _req| {
            allowed.iter().any(|v| v == origin)
        });

        CorsLayer::new().allow_origin(allow_origin)
    } else {
        CorsLayer::new().allow_origin(Any)
    }
    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    .allow_headers([
        header::AUTHORIZATION,
        header::CONTENT_TYPE,
        header::ACCEPT,
        HeaderName::from_static(REQUEST_ID_HEADER),
    ])
    .max_age(std::time::Duration::from_secs(60 * 10));

    router.layer(cors)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use tower::ServiceExt;

    use super::*;

    fn router(app_env: &'static str) -> Router {
        let config = Config::from_source(move |key| match key {
            "TOKEN_SYMMETRIC_KEY" => Some("k".repeat(32)),
            "APP_ENV" => Some(app_env.to_string()),
            "CORS_ALLOWED_ORIGINS" => Some("https://bank.example".to_string()),
            _ => None,
        })
        .unwrap();
        apply(Router::new().route("/", get(|| async { "ok" })), &config)
    }

    async fn allow_origin(app: Router, origin: &str) -> Option<HeaderValue> {
        let req = Request::builder()
            .uri("/")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        res.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .cloned()
    }

    #[tokio::test]
    async fn production_only_allows_listed_origins() {
        let allowed = allow_origin(router("production"), "https://bank.example").await;
        assert_eq!(allowed.unwrap(), "https://bank.example");

        let denied = allow_origin(router("production"), "https://evil.example").await;
        assert!(denied.is_none());
    }

    #[tokio::test]
    async fn development_allows_any_origin() {
        let allowed = allow_origin(router("development"), "http://localhost:5173").await;
        assert_eq!(allowed.unwrap(), "*");
    }
}
