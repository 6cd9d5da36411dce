/**
 * Responsibility
 * - Meaning the repo layer reports upward
 */
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoError {
    /// A unique key is already taken (username, email, owner + currency).
    #[error("conflict: {0}")]
    Conflict(&'static str),
    #[error("not found: {0}")]
    NotFound(&'static str),
    /// Arithmetic on a stored balance would overflow.
    #[error("out of range: {0}")]
    OutOfRange(&'static str),
}
