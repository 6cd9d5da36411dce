pub mod account_repo;
pub mod db;
pub mod error;
pub mod transfer_repo;
pub mod user_repo;

pub use db::MemoryDb;
