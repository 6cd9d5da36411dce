/*
 * Responsibility
 * - transfers / entries tables on MemoryDb
 * - transfer_tx: record the transfer, both entries and both balance updates
 *   under one write lock (all or nothing)
 */
use chrono::{DateTime, Utc};

use crate::repos::account_repo::AccountRow;
use crate::repos::db::MemoryDb;
use crate::repos::error::RepoError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRow {
    pub id: i64,
    pub from_account_id: i64,
    pub to_account_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// One side of a transfer. Negative amount = money out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRow {
    pub id: i64,
    pub account_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TransferTxResult {
    pub transfer: TransferRow,
    pub from_account: AccountRow,
    pub to_account: AccountRow,
    pub from_entry: EntryRow,
    pub to_entry: EntryRow,
}

pub async fn transfer_tx(
    db: &MemoryDb,
    from_account_id: i64,
    to_account_id: i64,
    amount: i64,
) -> Result<TransferTxResult, RepoError> {
    let mut tables = db.write().await;

    let from = tables
        .accounts
        .get(&from_account_id)
        .ok_or(RepoError::NotFound("account"))?;
    let to = tables
        .accounts
        .get(&to_account_id)
        .ok_or(RepoError::NotFound("account"))?;

    // Compute both balances before touching anything.
    let from_balance = from
        .balance
        .checked_sub(amount)
        .ok_or(RepoError::OutOfRange("balance"))?;
    let to_balance = if from_account_id == to_account_id {
        from_balance
            .checked_add(amount)
            .ok_or(RepoError::OutOfRange("balance"))?
    } else {
        to.balance
            .checked_add(amount)
            .ok_or(RepoError::OutOfRange("balance"))?
    };

    let now = Utc::now();
    let transfer = TransferRow {
        id: tables.next_transfer_id(),
        from_account_id,
        to_account_id,
        amount,
        created_at: now,
    };
    let from_entry = EntryRow {
        id: tables.next_entry_id(),
        account_id: from_account_id,
        amount: -amount,
        created_at: now,
    };
    let to_entry = EntryRow {
        id: tables.next_entry_id(),
        account_id: to_account_id,
        amount,
        created_at: now,
    };

    tables.transfers.push(transfer.clone());
    tables.entries.push(from_entry.clone());
    tables.entries.push(to_entry.clone());

    let from_account = set_balance(&mut tables.accounts, from_account_id, from_balance)?;
    let to_account = set_balance(&mut tables.accounts, to_account_id, to_balance)?;

    Ok(TransferTxResult {
        transfer,
        from_account,
        to_account,
        from_entry,
        to_entry,
    })
}

fn set_balance(
    accounts: &mut std::collections::BTreeMap<i64, AccountRow>,
    id: i64,
    balance: i64,
) -> Result<AccountRow, RepoError> {
    let account = accounts.get_mut(&id).ok_or(RepoError::NotFound("account"))?;
    account.balance = balance;
    Ok(account.clone())
}
