//! Remote collection and auth capabilities.
//!
//! The backoffice screens and session gates talk to the hosted service only through these
//! traits. Futures are not required to be `Send` so implementations can run on wasm.

use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::model::{
    auth::AuthUserDto,
    backoffice_user::BackofficeUserDto,
    banner::BannerDto,
    benefit::BenefitDto,
    event::EventDto,
    offer::OfferDto,
    storage::UploadDto,
    web_config::WebConfigEntryDto,
};

/// Error returned by a remote call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Request could not be sent or no response was received
    #[error("Failed to send request: {0}")]
    Request(String),
    /// Service answered with a non-success status
    #[error("{message}")]
    Status { status: u16, message: String },
    /// Response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// No client is available on this target
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Named remote tables
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Offers,
    Events,
    Banners,
    Benefits,
    BackofficeUsers,
    WebConfig,
}

impl Collection {
    /// Path segment under `/api`
    pub fn path(&self) -> &'static str {
        match self {
            Self::Offers => "offers",
            Self::Events => "events",
            Self::Banners => "banners",
            Self::Benefits => "benefits",
            Self::BackofficeUsers => "backoffice-users",
            Self::WebConfig => "web-config",
        }
    }
}

/// Alternative orderings a list may request instead of the collection default
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListOrder {
    Email,
    CreatedAt,
}

impl ListOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::CreatedAt => "created_at",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub order: Option<ListOrder>,
    /// Only rows with `is_active = true`
    pub active_only: bool,
}

impl ListQuery {
    pub fn ordered_by(order: ListOrder) -> Self {
        Self {
            order: Some(order),
            active_only: false,
        }
    }

    pub fn active() -> Self {
        Self {
            order: None,
            active_only: true,
        }
    }

    /// Query string including the leading `?`, empty when nothing is set
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(order) = self.order {
            params.push(format!("order={}", order.as_param()));
        }
        if self.active_only {
            params.push("active=true".to_string());
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// A typed row of a remote collection
pub trait Record: Clone + PartialEq + DeserializeOwned + 'static {
    type Id: Clone + PartialEq + Display + 'static;

    const COLLECTION: Collection;

    fn id(&self) -> Self::Id;

    /// Text matched by list search boxes, `None` when the list has no search
    fn search_key(&self) -> Option<&str> {
        None
    }
}

impl Record for OfferDto {
    type Id = i32;
    const COLLECTION: Collection = Collection::Offers;

    fn id(&self) -> i32 {
        self.id
    }
}

impl Record for EventDto {
    type Id = i32;
    const COLLECTION: Collection = Collection::Events;

    fn id(&self) -> i32 {
        self.id
    }
}

impl Record for BannerDto {
    type Id = i32;
    const COLLECTION: Collection = Collection::Banners;

    fn id(&self) -> i32 {
        self.id
    }
}

impl Record for BenefitDto {
    type Id = i32;
    const COLLECTION: Collection = Collection::Benefits;

    fn id(&self) -> i32 {
        self.id
    }
}

impl Record for BackofficeUserDto {
    type Id = Uuid;
    const COLLECTION: Collection = Collection::BackofficeUsers;

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_key(&self) -> Option<&str> {
        Some(&self.email)
    }
}

/// Generic access to remote collections and object storage
#[allow(async_fn_in_trait)]
pub trait CollectionClient {
    /// All rows in the collection's fixed order, or the order requested by `query`
    async fn select<R: Record>(&self, query: ListQuery) -> Result<Vec<R>, ClientError>;

    /// A single row by ID, `None` when absent
    async fn select_one<R: Record>(&self, id: &R::Id) -> Result<Option<R>, ClientError>;

    /// Inserts a row and returns it as stored
    async fn insert<R: Record, I: Serialize>(&self, input: &I) -> Result<R, ClientError>;

    /// Updates the row with `id` and returns it as stored
    async fn update<R: Record, I: Serialize>(
        &self,
        id: &R::Id,
        input: &I,
    ) -> Result<R, ClientError>;

    async fn delete<R: Record>(&self, id: &R::Id) -> Result<(), ClientError>;

    async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<BackofficeUserDto>, ClientError>;

    async fn select_config(&self) -> Result<Vec<WebConfigEntryDto>, ClientError>;

    /// Inserts or replaces entries by `config_name`
    async fn upsert_config(
        &self,
        entries: &[WebConfigEntryDto],
    ) -> Result<Vec<WebConfigEntryDto>, ClientError>;

    /// Stores `bytes` at `path` inside `bucket`
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadDto, ClientError>;
}

/// Password based authentication against the hosted service
#[allow(async_fn_in_trait)]
pub trait AuthClient {
    /// Creates an auth account without changing the current session
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUserDto, ClientError>;

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthUserDto, ClientError>;

    async fn sign_out(&self) -> Result<(), ClientError>;

    async fn get_session(&self) -> Result<Option<AuthUserDto>, ClientError>;

    async fn reset_password_for_email(&self, email: &str) -> Result<(), ClientError>;
}

/// A client offering both collection and auth access
pub trait RemoteClient: CollectionClient + AuthClient {}

impl<T: CollectionClient + AuthClient> RemoteClient for T {}
