use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        backoffice_user::Role,
        benefit::{BenefitDto, BenefitInputDto},
    },
    server::{
        controller::util::access::require_role,
        error::Error,
        model::app::AppState,
        service::content::BenefitService,
    },
};

pub static BENEFIT_TAG: &str = "benefits";

#[utoipa::path(
    get,
    path = "/api/benefits",
    tag = BENEFIT_TAG,
    responses(
        (status = 200, description = "All benefits by title", body = Vec<BenefitDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_benefits(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let benefits = BenefitService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(benefits)))
}

#[utoipa::path(
    post,
    path = "/api/benefits",
    tag = BENEFIT_TAG,
    request_body = BenefitInputDto,
    responses(
        (status = 201, description = "Benefit created", body = BenefitDto),
        (status = 400, description = "A required field is empty", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Editor role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_benefit(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<BenefitInputDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Editor).await?;

    let benefit = BenefitService::new(&state.db).create(input).await?;

    Ok((StatusCode::CREATED, Json(benefit)))
}

#[utoipa::path(
    put,
    path = "/api/benefits/{id}",
    tag = BENEFIT_TAG,
    params(("id" = i32, Path, description = "Benefit ID")),
    request_body = BenefitInputDto,
    responses(
        (status = 200, description = "Benefit updated", body = BenefitDto),
        (status = 400, description = "A required field is empty", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Editor role required", body = ErrorDto),
        (status = 404, description = "Benefit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_benefit(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(input): Json<BenefitInputDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Editor).await?;

    let benefit = BenefitService::new(&state.db).update(id, input).await?;

    Ok((StatusCode::OK, Json(benefit)))
}

#[utoipa::path(
    delete,
    path = "/api/benefits/{id}",
    tag = BENEFIT_TAG,
    params(("id" = i32, Path, description = "Benefit ID")),
    responses(
        (status = 204, description = "Benefit deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Editor role required", body = ErrorDto),
        (status = 404, description = "Benefit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_benefit(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Editor).await?;

    BenefitService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
