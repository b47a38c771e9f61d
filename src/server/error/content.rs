use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("No {collection} row with ID {id}")]
    NotFound {
        collection: &'static str,
        id: String,
    },
    #[error("Field {0} must not be empty")]
    EmptyField(&'static str),
    #[error("Link {0:?} must be an http or https URL")]
    InvalidLink(String),
    #[error("Unknown ordering {0:?}")]
    UnknownOrder(String),
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::EmptyField(_) | Self::InvalidLink(_) | Self::UnknownOrder(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
