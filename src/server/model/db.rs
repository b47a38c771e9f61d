//! Database model type aliases.
//!
//! Shorthands for the SeaORM models generated in the `entity` crate.

/// Credentials of a person able to sign in, shares its ID with [`BackofficeUserModel`]
pub type AuthAccountModel = entity::auth_account::Model;

/// Backoffice role and active flag of an auth account
///
/// # Fields (from `entity::backoffice_user::Model`)
/// - `id` - Primary key, the auth account ID
/// - `email` - Copy of the account email, not editable
/// - `role` - Role name, see [`crate::model::backoffice_user::Role`]
/// - `is_active` - Inactive users are denied backoffice access
/// - `created_at` / `updated_at` - Record timestamps
pub type BackofficeUserModel = entity::backoffice_user::Model;

pub type OfferModel = entity::offer::Model;

pub type EventModel = entity::event::Model;

pub type BannerModel = entity::banner::Model;

pub type BenefitModel = entity::benefit::Model;

/// A single site configuration key and its JSON value
pub type WebConfigModel = entity::web_config::Model;
