use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        backoffice_user::Role,
        banner::{BannerDto, BannerInputDto},
    },
    server::{
        controller::util::access::require_role,
        error::Error,
        model::app::AppState,
        service::content::BannerService,
    },
};

pub static BANNER_TAG: &str = "banners";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BannerQuery {
    /// Only return banners shown in the storefront carousel
    #[serde(default)]
    pub active: bool,
}

#[utoipa::path(
    get,
    path = "/api/banners",
    tag = BANNER_TAG,
    params(BannerQuery),
    responses(
        (status = 200, description = "Banners in carousel order", body = Vec<BannerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_banners(
    State(state): State<AppState>,
    Query(query): Query<BannerQuery>,
) -> Result<impl IntoResponse, Error> {
    let banners = BannerService::new(&state.db).list(query.active).await?;

    Ok((StatusCode::OK, Json(banners)))
}

#[utoipa::path(
    post,
    path = "/api/banners",
    tag = BANNER_TAG,
    request_body = BannerInputDto,
    responses(
        (status = 201, description = "Banner created", body = BannerDto),
        (status = 400, description = "A required field is empty", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Editor role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_banner(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<BannerInputDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Editor).await?;

    let banner = BannerService::new(&state.db).create(input).await?;

    Ok((StatusCode::CREATED, Json(banner)))
}

#[utoipa::path(
    put,
    path = "/api/banners/{id}",
    tag = BANNER_TAG,
    params(("id" = i32, Path, description = "Banner ID")),
    request_body = BannerInputDto,
    responses(
        (status = 200, description = "Banner updated", body = BannerDto),
        (status = 400, description = "A required field is empty", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Editor role required", body = ErrorDto),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_banner(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(input): Json<BannerInputDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Editor).await?;

    let banner = BannerService::new(&state.db).update(id, input).await?;

    Ok((StatusCode::OK, Json(banner)))
}

#[utoipa::path(
    delete,
    path = "/api/banners/{id}",
    tag = BANNER_TAG,
    params(("id" = i32, Path, description = "Banner ID")),
    responses(
        (status = 204, description = "Banner deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Editor role required", body = ErrorDto),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Editor).await?;

    BannerService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
