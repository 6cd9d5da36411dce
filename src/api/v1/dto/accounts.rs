/*
 * Responsibility
 * - Accounts request/response DTOs
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repos::account_repo::AccountRow;
use crate::services::currency;

pub const MIN_PAGE_SIZE: i64 = 5;
pub const MAX_PAGE_SIZE: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub currency: String,
}

impl CreateAccountRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !currency::is_supported(&self.currency) {
            return Err("currency is not supported");
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct ListAccountsQuery {
    pub page_id: i64,
    pub page_size: i64,
}

impl ListAccountsQuery {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.page_id < 1 {
            return Err("page_id must be >= 1");
        }
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err("page_size must be between 5 and 10");
        }
        Ok(())
    }

    /// (limit, offset); call after `validate`.
    pub fn window(&self) -> (usize, usize) {
        let limit = self.page_size.max(0) as usize;
        let offset = ((self.page_id.max(1) - 1) as usize).saturating_mul(limit);
        (limit, offset)
    }
}

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: i64,
    pub owner: String,
    pub balance: i64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

impl From<AccountRow> for AccountResponse {
    fn from(row: AccountRow) -> Self {
        Self {
            id: row.id,
            owner: row.owner,
            balance: row.balance,
            currency: row.currency,
            created_at: row.created_at,
        }
    }
}
