//! Typed session entries.
//!
//! Sessions are stored in Valkey in production and in memory during tests.

pub mod account;
