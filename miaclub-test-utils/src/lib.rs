//! Shared test setup for the Mia Club server.
//!
//! Tests describe the environment they need with [`TestBuilder`] (tables, accounts,
//! backoffice users) and receive a [`TestContext`] holding an in-memory SQLite database,
//! a memory-backed session and a temporary object storage directory.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_PASSWORD, TEST_PUBLIC_URL},
        test_setup_with_auth_tables, test_setup_with_tables, TestBuilder, TestContext, TestError,
    };
}
