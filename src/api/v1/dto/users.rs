/*
 * Responsibility
 * - Users request/response DTOs
 * - validate() does shape checks only; uniqueness is the repo's job
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repos::user_repo::UserRow;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        validate_username(&self.username)?;
        validate_password(&self.password)?;
        if self.full_name.trim().is_empty() {
            return Err("full_name is required");
        }
        // One @ with something on both sides.
        match self.email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err("email must be a valid address"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginUserRequest {
    pub username: String,
    pub password: String,
}

impl LoginUserRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        validate_username(&self.username)?;
        validate_password(&self.password)
    }
}

fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.is_empty() || !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err("username must be non-empty and alphanumeric");
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("password must be at least 6 characters");
    }
    Ok(())
}

/// Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password_changed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        Self {
            username: row.username,
            full_name: row.full_name,
            email: row.email,
            password_changed_at: row.password_changed_at,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginUserResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Seconds until the access token expires.
    pub expires_in: i64,
    pub user: UserResponse,
}
