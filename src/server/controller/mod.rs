//! HTTP controller endpoints for the Mia Club API.
//!
//! Handlers extract the request, check the session where the endpoint is protected, call a
//! service and return JSON. Every endpoint except object downloads is documented with utoipa.

pub mod auth;
pub mod backoffice_user;
pub mod banner;
pub mod benefit;
pub mod event;
pub mod offer;
pub mod storage;
pub mod util;
pub mod web_config;
