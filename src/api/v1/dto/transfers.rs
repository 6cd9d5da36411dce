/*
 * Responsibility
 * - Transfers request/response DTOs
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::v1::dto::accounts::AccountResponse;
use crate::repos::transfer_repo::{EntryRow, TransferRow, TransferTxResult};
use crate::services::currency;

#[derive(Debug, Deserialize)]
pub struct CreateTransferRequest {
    pub from_account_id: i64,
    pub to_account_id: i64,
    pub amount: i64,
    pub currency: String,
}

impl CreateTransferRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.from_account_id < 1 || self.to_account_id < 1 {
            return Err("account ids must be >= 1");
        }
        if self.amount <= 0 {
            return Err("amount must be greater than 0");
        }
        if !currency::is_supported(&self.currency) {
            return Err("currency is not supported");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct TransferResponse {
    pub id: i64,
    pub from_account_id: i64,
    pub to_account_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

impl From<TransferRow> for TransferResponse {
    fn from(row: TransferRow) -> Self {
        Self {
            id: row.id,
            from_account_id: row.from_account_id,
            to_account_id: row.to_account_id,
            amount: row.amount,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub id: i64,
    pub account_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

impl From<EntryRow> for EntryResponse {
    fn from(row: EntryRow) -> Self {
        Self {
            id: row.id,
            account_id: row.account_id,
            amount: row.amount,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TransferTxResponse {
    pub transfer: TransferResponse,
    pub from_account: AccountResponse,
    pub to_account: AccountResponse,
    pub from_entry: EntryResponse,
    pub to_entry: EntryResponse,
}

impl From<TransferTxResult> for TransferTxResponse {
    fn from(r: TransferTxResult) -> Self {
        Self {
            transfer: r.transfer.into(),
            from_account: r.from_account.into(),
            to_account: r.to_account.into(),
            from_entry: r.from_entry.into(),
            to_entry: r.to_entry.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreateTransferRequest {
        CreateTransferRequest {
            from_account_id: 1,
            to_account_id: 2,
            amount: 10,
            currency: "USD".into(),
        }
    }

    #[test]
    fn amount_must_be_positive() {
        assert!(valid().validate().is_ok());
        assert!(CreateTransferRequest { amount: 0, ..valid() }.validate().is_err());
        assert!(CreateTransferRequest { amount: -5, ..valid() }.validate().is_err());
    }

    #[test]
    fn ids_and_currency_are_checked() {
        assert!(CreateTransferRequest { from_account_id: 0, ..valid() }.validate().is_err());
        assert!(CreateTransferRequest { currency: "GBP".into(), ..valid() }.validate().is_err());
    }
}
