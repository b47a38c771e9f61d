use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    model::{api::ErrorDto, backoffice_user::Role},
    server::error::InternalServerError,
};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Account ID is not present in session")]
    AccountNotInSession,
    #[error("Account ID {0} not found in database despite having an active session")]
    AccountNotInDatabase(Uuid),
    #[error("Invalid login credentials")]
    InvalidCredentials,
    #[error("User already registered")]
    EmailTaken,
    #[error("Unable to validate email address: invalid format")]
    InvalidEmail,
    #[error("Password should be at least {0} characters")]
    WeakPassword(usize),
    #[error("Account {0} has no active backoffice access")]
    NoBackofficeAccess(Uuid),
    #[error("Account {account_id} with role {role} lacks permission, {required} required")]
    MissingRole {
        account_id: Uuid,
        role: Role,
        required: Role,
    },
    #[error("Account {0} may only create its own backoffice record")]
    ForeignProvision(Uuid),
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}

impl AuthError {
    fn respond(status: StatusCode, message: &str) -> Response {
        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::AccountNotInSession | Self::AccountNotInDatabase(_) => {
                tracing::debug!("{}", self);

                Self::respond(StatusCode::UNAUTHORIZED, "Not signed in")
            }
            Self::InvalidCredentials => {
                Self::respond(StatusCode::UNAUTHORIZED, "Invalid login credentials")
            }
            Self::EmailTaken => Self::respond(StatusCode::CONFLICT, "User already registered"),
            Self::InvalidEmail | Self::WeakPassword(_) => {
                let message = self.to_string();
                Self::respond(StatusCode::BAD_REQUEST, &message)
            }
            Self::NoBackofficeAccess(_) | Self::MissingRole { .. } | Self::ForeignProvision(_) => {
                tracing::warn!("{}", self);

                Self::respond(StatusCode::FORBIDDEN, "Insufficient permissions")
            }
            Self::PasswordHash(_) => InternalServerError(self).into_response(),
        }
    }
}
