use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Bucket {0:?} does not exist")]
    UnknownBucket(String),
    #[error("Object path {0:?} is not allowed")]
    InvalidPath(String),
    #[error("Object {0:?} is not a png, jpg, gif or webp image")]
    UnsupportedType(String),
    #[error("Object {0:?} not found")]
    ObjectNotFound(String),
    #[error("Upload request is missing the `path` or `file` field")]
    MissingField,
    #[error(transparent)]
    Multipart(#[from] MultipartError),
    #[error("Failed to access object storage: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::UnknownBucket(_) | Self::ObjectNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidPath(_)
            | Self::UnsupportedType(_)
            | Self::MissingField
            | Self::Multipart(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Io(_) => return InternalServerError(self).into_response(),
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
