//! Data transfer objects shared between the web client and the server.

pub mod api;
pub mod auth;
pub mod backoffice_user;
pub mod banner;
pub mod benefit;
pub mod catalog;
pub mod event;
pub mod member;
pub mod offer;
pub mod storage;
pub mod web_config;
