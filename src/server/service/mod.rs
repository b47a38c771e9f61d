//! Service layer for business logic.
//!
//! Services validate input, coordinate repositories and convert database models into the
//! DTOs returned by the API. Remote calls are never retried.

pub mod auth;
pub mod backoffice_user;
pub mod content;
pub mod storage;
pub mod web_config;
