use chrono::Duration;
use thiserror::Error;

use super::Payload;

/// Errors produced while issuing or verifying access tokens.
///
/// `InvalidToken` carries no cause: wrong key, truncation, tampering
/// and malformed envelopes all look the same to the caller.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid key size: must be exactly {expected} bytes, got {actual}")]
    InvalidKeySize { expected: usize, actual: usize },

    #[error("token is invalid")]
    InvalidToken,

    #[error("token has expired")]
    ExpiredToken,

    #[error("secure random source unavailable: {0}")]
    Entropy(getrandom::Error),

    #[error("failed to issue token: {0}")]
    Issue(String),
}

impl TokenError {
    /// Stable label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TokenError::InvalidKeySize { .. } => "invalid_key_size",
            TokenError::InvalidToken => "invalid_token",
            TokenError::ExpiredToken => "expired_token",
            TokenError::Entropy(_) => "entropy",
            TokenError::Issue(_) => "issue",
        }
    }
}

/// Issues and verifies self-contained access tokens.
///
/// Implementations must be pure functions of their inputs and an immutable key so
/// they can be shared as `Arc<dyn Maker>` across request tasks.
pub trait Maker: Send + Sync {
    /// Seal a fresh payload for `subject` that expires `ttl` from now.
    fn create_token(&self, subject: &str, ttl: Duration) -> Result<String, TokenError>;

    /// Authenticate `token`, then check expiry.
    fn verify_token(&self, token: &str) -> Result<Payload, TokenError>;
}
