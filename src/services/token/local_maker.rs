//! Symmetric ("local") access tokens: PASETO `v4.local`.
//!
//! - encrypted message: JSON encoded `Payload`
//! - nonce: 32 random bytes per token
//! - footer: never emitted; tokens that carry one are not ours and are rejected
//!
//! Claim checks (expiry) live here rather than in a PASETO claim parser so an
//! expired but authentic token stays distinguishable from a forged one.

use chrono::Duration;
use rusty_paseto::core::{
    Key, Local, Paseto, PasetoNonce, PasetoSymmetricKey, Payload as PasetoPayload, V4,
};

use super::{Maker, Payload, TokenError};

/// Required symmetric key length in bytes.
pub const KEY_LEN: usize = 32;

const NONCE_LEN: usize = 32;
// "v4" . "local" . body
const TOKEN_SEGMENTS: usize = 3;

/// Token maker backed by a single process-wide symmetric key.
pub struct LocalTokenMaker {
    key: PasetoSymmetricKey<V4, Local>,
}

impl std::fmt::Debug for LocalTokenMaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("LocalTokenMaker")
            .field("version", &"v4.local")
            .finish_non_exhaustive()
    }
}

impl LocalTokenMaker {
    /// Bind a maker to `symmetric_key`. Any length other than [`KEY_LEN`] is rejected
    /// here, once, so every later call runs with a correctly sized key.
    pub fn new(symmetric_key: &[u8]) -> Result<Self, TokenError> {
        let bytes: [u8; KEY_LEN] =
            symmetric_key
                .try_into()
                .map_err(|_| TokenError::InvalidKeySize {
                    expected: KEY_LEN,
                    actual: symmetric_key.len(),
                })?;

        Ok(Self {
            key: PasetoSymmetricKey::<V4, Local>::from(Key::<KEY_LEN>::from(bytes)),
        })
    }

    fn seal(&self, payload: &Payload) -> Result<String, TokenError> {
        let message =
            serde_json::to_string(payload).map_err(|e| TokenError::Issue(e.to_string()))?;

        let mut nonce = [0u8; NONCE_LEN];
        getrandom::fill(&mut nonce).map_err(TokenError::Entropy)?;
        let nonce = Key::<NONCE_LEN>::from(nonce);
        let nonce = PasetoNonce::<V4, Local>::from(&nonce);

        Paseto::<V4, Local>::builder()
            .set_payload(PasetoPayload::from(message.as_str()))
            .try_encrypt(&self.key, &nonce)
            .map_err(|e| TokenError::Issue(e.to_string()))
    }

    // Every failure collapses to None: the caller only learns "invalid".
    fn open(&self, token: &str) -> Option<Payload> {
        if token.split('.').count() != TOKEN_SEGMENTS {
            return None;
        }

        let message = Paseto::<V4, Local>::try_decrypt(token, &self.key, None, None).ok()?;

        serde_json::from_str(&message).ok()
    }
}

impl Maker for LocalTokenMaker {
    fn create_token(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        let payload = Payload::new(subject, ttl)?;
        self.seal(&payload)
    }

    fn verify_token(&self, token: &str) -> Result<Payload, TokenError> {
        // Authenticate first: expiry is only ever reported for genuinely issued tokens.
        let payload = self.open(token).ok_or(TokenError::InvalidToken)?;

        if payload.is_expired() {
            return Err(TokenError::ExpiredToken);
        }

        Ok(payload)
    }
}
