use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        backoffice_user::{
            BackofficeUserDto, NewBackofficeUserDto, Role, UpdateBackofficeUserDto,
        },
    },
    server::{
        controller::util::access::{get_account_from_session, require_role},
        data::backoffice_user::UserOrder,
        error::{content::ContentError, Error},
        model::app::AppState,
        service::backoffice_user::BackofficeUserService,
    },
};

pub static BACKOFFICE_USER_TAG: &str = "backoffice-users";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserListQuery {
    /// `email` (default) or `created_at`
    pub order: Option<String>,
}

impl UserListQuery {
    fn order(&self) -> Result<UserOrder, ContentError> {
        match self.order.as_deref() {
            None | Some("email") => Ok(UserOrder::Email),
            Some("created_at") => Ok(UserOrder::CreatedAt),
            Some(other) => Err(ContentError::UnknownOrder(other.to_string())),
        }
    }
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    pub email: String,
}

fn user_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Backoffice user not found".to_string(),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/api/backoffice-users",
    tag = BACKOFFICE_USER_TAG,
    params(UserListQuery),
    responses(
        (status = 200, description = "All backoffice users", body = Vec<BackofficeUserDto>),
        (status = 400, description = "Unknown ordering", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_backoffice_users(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<UserListQuery>,
) -> Result<impl IntoResponse, Error> {
    get_account_from_session(&state, &session).await?;

    let users = BackofficeUserService::new(&state.db)
        .list(query.order()?)
        .await?;

    Ok((StatusCode::OK, Json(users)))
}

#[utoipa::path(
    get,
    path = "/api/backoffice-users/{id}",
    tag = BACKOFFICE_USER_TAG,
    params(("id" = Uuid, Path, description = "Auth account ID")),
    responses(
        (status = 200, description = "Backoffice user", body = BackofficeUserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "No backoffice record for the account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_backoffice_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    get_account_from_session(&state, &session).await?;

    match BackofficeUserService::new(&state.db).get(id).await? {
        Some(user) => Ok((StatusCode::OK, Json(user)).into_response()),
        None => Ok(user_not_found().into_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/backoffice-users/by-email",
    tag = BACKOFFICE_USER_TAG,
    params(EmailQuery),
    responses(
        (status = 200, description = "Backoffice user", body = BackofficeUserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "No backoffice record for the email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_backoffice_user_by_email(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, Error> {
    get_account_from_session(&state, &session).await?;

    match BackofficeUserService::new(&state.db)
        .find_by_email(&query.email)
        .await?
    {
        Some(user) => Ok((StatusCode::OK, Json(user)).into_response()),
        None => Ok(user_not_found().into_response()),
    }
}

/// Creates a backoffice record.
///
/// Administrators may create any record. A signed in account without a record may create its
/// own, which always receives the `Visualizador` role.
#[utoipa::path(
    post,
    path = "/api/backoffice-users",
    tag = BACKOFFICE_USER_TAG,
    request_body = NewBackofficeUserDto,
    responses(
        (status = 201, description = "Backoffice user created", body = BackofficeUserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Administrator role required", body = ErrorDto),
        (status = 404, description = "Auth account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_backoffice_user(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<NewBackofficeUserDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_account_from_session(&state, &session).await?;

    let user = BackofficeUserService::new(&state.db)
        .create(actor.id, input)
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    put,
    path = "/api/backoffice-users/{id}",
    tag = BACKOFFICE_USER_TAG,
    params(("id" = Uuid, Path, description = "Auth account ID")),
    request_body = UpdateBackofficeUserDto,
    responses(
        (status = 200, description = "Backoffice user updated", body = BackofficeUserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Administrator role required", body = ErrorDto),
        (status = 404, description = "Backoffice user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_backoffice_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateBackofficeUserDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Administrador).await?;

    let user = BackofficeUserService::new(&state.db)
        .update(id, input)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}

#[utoipa::path(
    delete,
    path = "/api/backoffice-users/{id}",
    tag = BACKOFFICE_USER_TAG,
    params(("id" = Uuid, Path, description = "Auth account ID")),
    responses(
        (status = 204, description = "Backoffice user deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Administrator role required", body = ErrorDto),
        (status = 404, description = "Backoffice user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_backoffice_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Administrador).await?;

    BackofficeUserService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
