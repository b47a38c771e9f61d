//! Data access layer repositories.
//!
//! One repository per table. Repositories only translate between SeaORM and plain values;
//! validation and authorization live in the service and controller layers.

pub mod auth_account;
pub mod backoffice_user;
pub mod banner;
pub mod benefit;
pub mod event;
pub mod offer;
pub mod web_config;
