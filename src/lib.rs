//! Collective API database migrations.
//!
//! This library holds the ordered corpus of PostgreSQL schema migrations
//! together with the thin runner surface used to apply and revert them.

pub mod config;
pub mod db;
pub mod error;
pub mod migration;
pub mod runner;
