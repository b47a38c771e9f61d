//! Mia Club storefront and backoffice.
//!
//! The shared [`model`] and [`state`] modules compile for every target so the web client and
//! the server agree on wire types and business rules. The [`server`] module is only built with
//! the `server` feature.

pub mod model;
pub mod state;

#[cfg(feature = "server")]
pub mod server;
