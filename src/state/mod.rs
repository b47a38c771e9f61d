//! Client side business rules.
//!
//! Everything here is independent of the UI toolkit so it can run natively under `cargo test`.
//! Remote access goes through the [`collection::CollectionClient`] and
//! [`collection::AuthClient`] traits; the web client implements them over HTTP and tests use
//! in-memory fakes.

pub mod app;
pub mod collection;
pub mod content;
pub mod dashboard;
pub mod list;
pub mod profile;
pub mod registration;
pub mod session;
pub mod storefront;
pub mod users;
pub mod validation;
pub mod web_config;

#[cfg(test)]
pub(crate) mod memory;

use std::time::Duration;

/// Delay before a simulated member login resolves
pub const LOGIN_DELAY: Duration = Duration::from_millis(1500);
/// Delay before a simulated registration resolves
pub const REGISTRATION_DELAY: Duration = Duration::from_millis(1500);
/// Delay before a simulated profile save resolves
pub const PROFILE_SAVE_DELAY: Duration = Duration::from_millis(1500);
/// Delay before the profile modal closes after a successful save
pub const PROFILE_CLOSE_DELAY: Duration = Duration::from_millis(1000);
/// Delay before the simulated storefront password recovery resolves
pub const RECOVERY_DELAY: Duration = Duration::from_millis(2000);

/// Outcome banner shown above a form or list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }
}
