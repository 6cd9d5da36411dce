/*
 * Responsibility
 * - In-process store shared by all repos (users / accounts / entries / transfers)
 * - Clone cheap (Arc inside); a single RwLock keeps multi-table writes atomic
 */
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::repos::account_repo::AccountRow;
use crate::repos::transfer_repo::{EntryRow, TransferRow};
use crate::repos::user_repo::UserRow;

#[derive(Debug, Default)]
pub struct Tables {
    pub users: HashMap<String, UserRow>,
    pub accounts: BTreeMap<i64, AccountRow>,
    pub entries: Vec<EntryRow>,
    pub transfers: Vec<TransferRow>,
    seq: Sequences,
}

#[derive(Debug, Default)]
struct Sequences {
    account: i64,
    entry: i64,
    transfer: i64,
}

impl Tables {
    pub fn next_account_id(&mut self) -> i64 {
        self.seq.account += 1;
        self.seq.account
    }

    pub fn next_entry_id(&mut self) -> i64 {
        self.seq.entry += 1;
        self.seq.entry
    }

    pub fn next_transfer_id(&mut self) -> i64 {
        self.seq.transfer += 1;
        self.seq.transfer
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryDb {
    inner: Arc<RwLock<Tables>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.inner.write().await
    }
}
