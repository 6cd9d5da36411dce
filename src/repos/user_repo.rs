/*
 * Responsibility
 * - users table operations on MemoryDb
 * - username and email are unique
 */
use chrono::{DateTime, Utc};

use crate::repos::db::MemoryDb;
use crate::repos::error::RepoError;

#[derive(Debug, Clone)]
pub struct UserRow {
    pub username: String,
    pub hashed_password: String,
    pub full_name: String,
    pub email: String,
    pub password_changed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

pub struct NewUser<'a> {
    pub username: &'a str,
    pub hashed_password: &'a str,
    pub full_name: &'a str,
    pub email: &'a str,
}

pub async fn create(db: &MemoryDb, new: NewUser<'_>) -> Result<UserRow, RepoError> {
    let mut tables = db.write().await;

    if tables.users.contains_key(new.username) || tables.users.values().any(|u| u.email == new.email)
    {
        return Err(RepoError::Conflict("user"));
    }

    let now = Utc::now();
    let row = UserRow {
        username: new.username.to_string(),
        hashed_password: new.hashed_password.to_string(),
        full_name: new.full_name.to_string(),
        email: new.email.to_string(),
        password_changed_at: now,
        created_at: now,
    };
    tables.users.insert(row.username.clone(), row.clone());

    Ok(row)
}

pub async fn get(db: &MemoryDb, username: &str) -> Result<Option<UserRow>, RepoError> {
    Ok(db.read().await.users.get(username).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> NewUser<'static> {
        NewUser {
            username: "alice",
            hashed_password: "$argon2id$stub",
            full_name: "Alice Liddell",
            email: "alice@example.com",
        }
    }

    #[tokio::test]
    async fn create_then_get() {
        let db = MemoryDb::new();

        let created = create(&db, alice()).await.unwrap();
        let fetched = get(&db, "alice").await.unwrap().unwrap();

        assert_eq!(fetched.username, created.username);
        assert_eq!(fetched.email, "alice@example.com");
        assert!(get(&db, "bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_username_or_email_conflicts() {
        let db = MemoryDb::new();
        create(&db, alice()).await.unwrap();

        let err = create(&db, alice()).await.unwrap_err();
        assert_eq!(err, RepoError::Conflict("user"));

        let same_email = NewUser {
            username: "alice2",
            ..alice()
        };
        assert_eq!(
            create(&db, same_email).await.unwrap_err(),
            RepoError::Conflict("user")
        );
    }
}
