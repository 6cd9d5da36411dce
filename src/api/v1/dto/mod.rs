pub mod accounts;
pub mod transfers;
pub mod users;
