//! Bank API: user sign-up/login, accounts and transfers, with every money
//! route behind symmetric-encrypted bearer tokens.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod services;
pub mod state;
