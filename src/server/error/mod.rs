//! Error types for the Mia Club server.
//!
//! Each domain (authentication, configuration, content, object storage) has its own error enum
//! implementing `IntoResponse`. They are aggregated into [`Error`], the error type of every
//! controller, so handlers can use `?` on repository, service and session calls alike.

pub mod auth;
pub mod config;
pub mod content;
pub mod storage;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, content::ContentError, storage::StorageError,
    },
};

/// Main error type of the server.
///
/// Domain errors map to their own status codes, everything else becomes a logged
/// 500 Internal Server Error with a generic body.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid environment variables.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Sign in, session and permission failures.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Missing rows and invalid content payloads.
    #[error(transparent)]
    ContentError(#[from] ContentError),
    /// Object upload and download failures.
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// Failed to parse a value read from a session or request.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Valkey session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ContentError(err) => err.into_response(),
            Self::StorageError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
