//! Access token verification -> AuthCtx in request extensions.
//!
//! Pipeline, each step exits early with 401:
//! 1. `Authorization` present and non-empty        else "missing credential"
//! 2. visible ASCII with at least `<scheme> <token>` else "malformed credential header"
//! 3. scheme is `bearer` (any case)                 else "unsupported scheme"
//! 4. `Maker::verify_token` succeeds                else "token error"
//!
//! Fields after the token are ignored. The specific token failure (invalid vs
//! expired) is only visible in logs.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::state::AppState;

const BEARER: &str = "bearer";

/// Put the access middleware in front of every route already registered on `router`.
///
/// Uses `route_layer`, so unmatched paths still fall through to 404 instead of 401.
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

/// Why the `Authorization` header could not yield a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    Missing,
    Malformed,
    UnsupportedScheme,
}

impl CredentialError {
    pub fn reason(self) -> &'static str {
        match self {
            CredentialError::Missing => "missing credential",
            CredentialError::Malformed => "malformed credential header",
            CredentialError::UnsupportedScheme => "unsupported scheme",
        }
    }

    pub fn kind(self) -> &'static str {
        match self {
            CredentialError::Missing => "missing_credential",
            CredentialError::Malformed => "malformed_header",
            CredentialError::UnsupportedScheme => "unsupported_scheme",
        }
    }
}

/// Extract the bearer credential from request headers.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, CredentialError> {
    let raw = headers
        .get(header::AUTHORIZATION)
        .ok_or(CredentialError::Missing)?;

    if raw.as_bytes().iter().all(u8::is_ascii_whitespace) {
        return Err(CredentialError::Missing);
    }

    let value = raw.to_str().map_err(|_| CredentialError::Malformed)?;

    let mut fields = value.split_ascii_whitespace();
    let (Some(scheme), Some(token)) = (fields.next(), fields.next()) else {
        return Err(CredentialError::Malformed);
    };

    if !scheme.eq_ignore_ascii_case(BEARER) {
        return Err(CredentialError::UnsupportedScheme);
    }

    Ok(token)
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = match bearer_token(req.headers()) {
        Ok(token) => token,
        Err(err) => {
            tracing::warn!(kind = err.kind(), "access rejected");
            return Err(AppError::Unauthorized(err.reason()));
        }
    };

    let payload = match state.tokens.verify_token(token) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!(kind = err.kind(), error = %err, "access token verification failed");
            return Err(AppError::Unauthorized("token error"));
        }
    };

    tracing::debug!(subject = %payload.subject, token_id = %payload.id, "access granted");

    // middleware -> extractor
    req.extensions_mut().insert(AuthCtx::new(payload));

    Ok(next.run(req).await)
}
