use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

use super::AuthCtx;

/// Extractor that hands the verified `AuthCtx` to a handler.
/// Relies on the access middleware having inserted it into request extensions;
/// if it is absent (route not behind the middleware) the request is rejected with 401.
pub struct AuthCtxExtractor(pub AuthCtx);

impl FromRequestParts<AppState> for AuthCtxExtractor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthCtx>()
            .cloned()
            .map(AuthCtxExtractor)
            .ok_or(AppError::Unauthorized("missing credential"))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::Request;
    use chrono::Duration;

    use super::*;
    use crate::repos::MemoryDb;
    use crate::services::token::{KEY_LEN, LocalTokenMaker, Payload};

    fn test_state() -> AppState {
        let maker = LocalTokenMaker::new(&[3u8; KEY_LEN]).unwrap();
        AppState::new(MemoryDb::new(), Arc::new(maker), Duration::minutes(1))
    }

    fn empty_parts() -> Parts {
        Request::builder()
            .uri("/test")
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[tokio::test]
    async fn rejects_when_middleware_did_not_run() {
        let state = test_state();
        let mut parts = empty_parts();

        let result = AuthCtxExtractor::from_request_parts(&mut parts, &state).await;
        assert!(matches!(
            result,
            Err(AppError::Unauthorized("missing credential"))
        ));
    }

    #[tokio::test]
    async fn returns_context_inserted_by_middleware() {
        let state = test_state();
        let mut parts = empty_parts();
        let payload = Payload::new("alice", Duration::minutes(1)).unwrap();
        parts.extensions.insert(AuthCtx::new(payload.clone()));

        let AuthCtxExtractor(ctx) = AuthCtxExtractor::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(ctx.subject(), "alice");
        assert_eq!(ctx.payload, payload);
    }
}
