use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, backoffice_user::Role, web_config::WebConfigEntryDto},
    server::{
        controller::util::access::require_role, error::Error, model::app::AppState,
        service::web_config::WebConfigService,
    },
};

pub static WEB_CONFIG_TAG: &str = "web-config";

#[utoipa::path(
    get,
    path = "/api/web-config",
    tag = WEB_CONFIG_TAG,
    responses(
        (status = 200, description = "Every stored configuration entry", body = Vec<WebConfigEntryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_web_config(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let entries = WebConfigService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(entries)))
}

/// Inserts or replaces entries by `config_name`
#[utoipa::path(
    put,
    path = "/api/web-config",
    tag = WEB_CONFIG_TAG,
    request_body = Vec<WebConfigEntryDto>,
    responses(
        (status = 200, description = "Stored entries", body = Vec<WebConfigEntryDto>),
        (status = 400, description = "An entry has no name", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Editor role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_web_config(
    State(state): State<AppState>,
    session: Session,
    Json(entries): Json<Vec<WebConfigEntryDto>>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Editor).await?;

    let stored = WebConfigService::new(&state.db).upsert(entries).await?;

    Ok((StatusCode::OK, Json(stored)))
}
