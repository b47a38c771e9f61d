//! Server application models and type definitions.
//!
//! Application state shared by every handler, database model type aliases and typed session
//! entries.

pub mod app;
pub mod db;
pub mod session;
