/*
 * Responsibility
 * - The "authenticated context" visible to handlers
 * - The access middleware verifies the token and stores this in request extensions;
 *   handlers only ever receive this type
 */
use crate::services::token::Payload;

/// Attached to every request that passed the access middleware.
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub payload: Payload,
}

impl AuthCtx {
    pub fn new(payload: Payload) -> Self {
        Self { payload }
    }

    /// Username the token was issued to.
    pub fn subject(&self) -> &str {
        &self.payload.subject
    }
}
