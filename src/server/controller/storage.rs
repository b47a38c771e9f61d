use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::{
    model::{api::ErrorDto, backoffice_user::Role, storage::UploadDto},
    server::{
        controller::util::access::require_role,
        error::{storage::StorageError, Error},
        model::app::AppState,
        service::storage::StorageService,
    },
};

pub static STORAGE_TAG: &str = "storage";

/// Multipart body of an upload
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    /// Object path inside the bucket, e.g. `public/1718000000000_promo.png`
    path: String,
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/api/storage/{bucket}",
    tag = STORAGE_TAG,
    params(("bucket" = String, Path, description = "Bucket name")),
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Object stored", body = UploadDto),
        (status = 400, description = "Missing field, invalid path or not an image", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Editor role required", body = ErrorDto),
        (status = 404, description = "Unknown bucket", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload(
    State(state): State<AppState>,
    session: Session,
    Path(bucket): Path<String>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Editor).await?;

    let mut path = None;
    let mut bytes = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(StorageError::from)?
    {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("path") => path = Some(field.text().await.map_err(StorageError::from)?),
            Some("file") => bytes = Some(field.bytes().await.map_err(StorageError::from)?),
            _ => {}
        }
    }

    let (Some(path), Some(bytes)) = (path, bytes) else {
        return Err(StorageError::MissingField.into());
    };

    let upload = StorageService::new(&state.storage)
        .put(&bucket, &path, &bytes)
        .await?;

    Ok((StatusCode::CREATED, Json(upload)))
}

/// Public object download, served outside of `/api`
pub async fn download(
    State(state): State<AppState>,
    Path((bucket, path)): Path<(String, String)>,
) -> Result<impl IntoResponse, Error> {
    let (bytes, content_type) = StorageService::new(&state.storage)
        .get(&bucket, &path)
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff".to_string()),
        ],
        bytes,
    ))
}
