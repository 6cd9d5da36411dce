/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 * - Clone cheap: the store and the token maker are Arc inside
 */
use std::sync::Arc;

use crate::repos::MemoryDb;
use crate::services::token::Maker;

#[derive(Clone)]
pub struct AppState {
    pub db: MemoryDb,
    pub tokens: Arc<dyn Maker>,
    pub access_token_ttl: chrono::Duration,
}

impl AppState {
    pub fn new(db: MemoryDb, tokens: Arc<dyn Maker>, access_token_ttl: chrono::Duration) -> Self {
        Self {
            db,
            tokens,
            access_token_ttl,
        }
    }
}
