//! Database fixtures available on a built [`crate::TestContext`].
//!
//! - `auth` - auth accounts and backoffice user records
//! - `content` - offers, events, banners, benefits and configuration entries

pub mod auth;
pub mod content;
