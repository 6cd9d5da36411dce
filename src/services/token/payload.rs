/*
 * Responsibility
 * - Claims carried inside an access token (id / subject / issued_at / expired_at)
 * - The id is built from OS randomness so a failing entropy source surfaces as an error
 */
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TokenError;

/// Claims sealed into a token.
///
/// Never mutated after construction. `expired_at` is `issued_at + ttl` even when
/// `ttl` is negative, which yields a token that is already expired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub id: Uuid,
    pub subject: String,
    pub issued_at: DateTime<Utc>,
    pub expired_at: DateTime<Utc>,
}

impl Payload {
    pub fn new(subject: impl Into<String>, ttl: Duration) -> Result<Self, TokenError> {
        let id = random_token_id()?;
        let issued_at = Utc::now();
        let expired_at = issued_at
            .checked_add_signed(ttl)
            .ok_or_else(|| TokenError::Issue("token lifetime out of range".to_string()))?;

        Ok(Self {
            id,
            subject: subject.into(),
            issued_at,
            expired_at,
        })
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expired_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

fn random_token_id() -> Result<Uuid, TokenError> {
    let mut bytes = [0u8; 16];
    getrandom::fill(&mut bytes).map_err(TokenError::Entropy)?;
    Ok(uuid::Builder::from_random_bytes(bytes).into_uuid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_payload_spans_the_requested_lifetime() {
        let payload = Payload::new("alice", Duration::minutes(15)).unwrap();

        assert_eq!(payload.subject, "alice");
        assert_eq!(payload.expired_at - payload.issued_at, Duration::minutes(15));
        assert_eq!(payload.id.get_version_num(), 4);
        assert!(!payload.is_expired());
    }

    #[test]
    fn negative_lifetime_is_already_expired() {
        let payload = Payload::new("alice", -Duration::minutes(1)).unwrap();

        assert!(payload.expired_at < payload.issued_at);
        assert!(payload.is_expired());
    }

    #[test]
    fn ids_are_unique_per_payload() {
        let a = Payload::new("alice", Duration::minutes(1)).unwrap();
        let b = Payload::new("alice", Duration::minutes(1)).unwrap();

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let payload = Payload::new("alice", Duration::minutes(1)).unwrap();

        assert!(!payload.is_expired_at(payload.expired_at));
        assert!(payload.is_expired_at(payload.expired_at + Duration::milliseconds(1)));
    }

    #[test]
    fn overflowing_lifetime_is_an_issue_error() {
        let err = Payload::new("alice", Duration::MAX).unwrap_err();

        assert!(matches!(err, TokenError::Issue(_)));
    }
}
