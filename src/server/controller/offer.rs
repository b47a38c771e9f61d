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
        offer::{OfferDto, OfferInputDto},
    },
    server::{
        controller::util::access::require_role,
        error::Error,
        model::app::AppState,
        service::content::OfferService,
    },
};

pub static OFFER_TAG: &str = "offers";

#[utoipa::path(
    get,
    path = "/api/offers",
    tag = OFFER_TAG,
    responses(
        (status = 200, description = "All offers, latest ending first", body = Vec<OfferDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_offers(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let offers = OfferService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(offers)))
}

#[utoipa::path(
    post,
    path = "/api/offers",
    tag = OFFER_TAG,
    request_body = OfferInputDto,
    responses(
        (status = 201, description = "Offer created", body = OfferDto),
        (status = 400, description = "A required field is empty", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Editor role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_offer(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<OfferInputDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Editor).await?;

    let offer = OfferService::new(&state.db).create(input).await?;

    Ok((StatusCode::CREATED, Json(offer)))
}

#[utoipa::path(
    put,
    path = "/api/offers/{id}",
    tag = OFFER_TAG,
    params(("id" = i32, Path, description = "Offer ID")),
    request_body = OfferInputDto,
    responses(
        (status = 200, description = "Offer updated", body = OfferDto),
        (status = 400, description = "A required field is empty", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Editor role required", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_offer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(input): Json<OfferInputDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Editor).await?;

    let offer = OfferService::new(&state.db).update(id, input).await?;

    Ok((StatusCode::OK, Json(offer)))
}

#[utoipa::path(
    delete,
    path = "/api/offers/{id}",
    tag = OFFER_TAG,
    params(("id" = i32, Path, description = "Offer ID")),
    responses(
        (status = 204, description = "Offer deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Editor role required", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_offer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Editor).await?;

    OfferService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
