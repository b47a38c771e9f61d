//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extractors built from a [`TestContext`], then the
//! returned response is checked for its status and, where relevant, its JSON body.

mod auth;
mod backoffice_user;
mod content;
mod storage;
mod web_config;
