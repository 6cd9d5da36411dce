/*
 * Responsibility
 * - accounts table operations on MemoryDb
 * - (owner, currency) is unique; ids are assigned in insertion order
 */
use chrono::{DateTime, Utc};

use crate::repos::db::MemoryDb;
use crate::repos::error::RepoError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRow {
    pub id: i64,
    pub owner: String,
    pub balance: i64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

pub async fn create(db: &MemoryDb, owner: &str, currency: &str) -> Result<AccountRow, RepoError> {
    let mut tables = db.write().await;

    if !tables.users.contains_key(owner) {
        return Err(RepoError::NotFound("user"));
    }
    if tables
        .accounts
        .values()
        .any(|a| a.owner == owner && a.currency == currency)
    {
        return Err(RepoError::Conflict("account"));
    }

    let id = tables.next_account_id();
    let row = AccountRow {
        id,
        owner: owner.to_string(),
        balance: 0,
        currency: currency.to_string(),
        created_at: Utc::now(),
    };
    tables.accounts.insert(id, row.clone());

    Ok(row)
}

pub async fn get(db: &MemoryDb, id: i64) -> Result<Option<AccountRow>, RepoError> {
    Ok(db.read().await.accounts.get(&id).cloned())
}

/// Accounts owned by `owner`, ordered by id.
pub async fn list_by_owner(
    db: &MemoryDb,
    owner: &str,
    limit: usize,
    offset: usize,
) -> Result<Vec<AccountRow>, RepoError> {
    let tables = db.read().await;

    let rows = tables
        .accounts
        .values()
        .filter(|a| a.owner == owner)
        .skip(offset)
        .take(limit)
        .cloned()
        .collect();

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::user_repo::{self, NewUser};

    async fn db_with_users(names: &[&str]) -> MemoryDb {
        let db = MemoryDb::new();
        for name in names {
            let email = format!("{name}@example.com");
            user_repo::create(
                &db,
                NewUser {
                    username: name,
                    hashed_password: "x",
                    full_name: name,
                    email: &email,
                },
            )
            .await
            .unwrap();
        }
        db
    }

    #[tokio::test]
    async fn new_account_starts_empty() {
        let db = db_with_users(&["alice"]).await;

        let row = create(&db, "alice", "USD").await.unwrap();

        assert_eq!(row.balance, 0);
        assert_eq!(get(&db, row.id).await.unwrap(), Some(row));
    }

    #[tokio::test]
    async fn one_account_per_owner_and_currency() {
        let db = db_with_users(&["alice"]).await;
        create(&db, "alice", "USD").await.unwrap();

        assert_eq!(
            create(&db, "alice", "USD").await.unwrap_err(),
            RepoError::Conflict("account")
        );
        assert!(create(&db, "alice", "EUR").await.is_ok());
    }

    #[tokio::test]
    async fn unknown_owner_is_rejected() {
        let db = MemoryDb::new();

        assert_eq!(
            create(&db, "ghost", "USD").await.unwrap_err(),
            RepoError::NotFound("user")
        );
    }

    #[tokio::test]
    async fn listing_is_scoped_to_owner_and_paged() {
        let db = db_with_users(&["alice", "bob"]).await;
        let a1 = create(&db, "alice", "USD").await.unwrap();
        create(&db, "bob", "USD").await.unwrap();
        let a2 = create(&db, "alice", "EUR").await.unwrap();

        let all = list_by_owner(&db, "alice", 10, 0).await.unwrap();
        assert_eq!(all, vec![a1, a2.clone()]);

        let second_page = list_by_owner(&db, "alice", 1, 1).await.unwrap();
        assert_eq!(second_page, vec![a2]);

        assert!(list_by_owner(&db, "alice", 10, 5).await.unwrap().is_empty());
    }
}
