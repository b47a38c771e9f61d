use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthUserDto, CredentialsDto, RecoverDto},
    },
    server::{
        controller::util::access::get_account_from_session,
        error::{auth::AuthError, Error},
        model::{app::AppState, session::account::SessionAccountId},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Creates an auth account without signing it in
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 201, description = "Account created", body = AuthUserDto),
        (status = 400, description = "Malformed email or password too short", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(credentials): Json<CredentialsDto>,
) -> Result<impl IntoResponse, Error> {
    let account = AuthService::new(&state.db)
        .sign_up(&credentials.email, &credentials.password)
        .await?;

    Ok((StatusCode::CREATED, Json(account)))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Signed in", body = AuthUserDto),
        (status = 401, description = "Invalid login credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<CredentialsDto>,
) -> Result<impl IntoResponse, Error> {
    let account = AuthService::new(&state.db)
        .login(&credentials.email, &credentials.password)
        .await?;

    SessionAccountId::insert(&session, account.id).await?;

    Ok((StatusCode::OK, Json(account)))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Signed out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing a session that was never stored fails with the Valkey store
    if SessionAccountId::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// The account signed in with the current session
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed in account", body = AuthUserDto),
        (status = 404, description = "No account signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    match get_account_from_session(&state, &session).await {
        Ok(account) => Ok((StatusCode::OK, Json(account)).into_response()),
        Err(Error::AuthError(
            AuthError::AccountNotInSession | AuthError::AccountNotInDatabase(_),
        )) => Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "Not signed in".to_string(),
            }),
        )
            .into_response()),
        Err(err) => Err(err),
    }
}

/// Issues a password recovery token, succeeding whether or not the email is registered
#[utoipa::path(
    post,
    path = "/api/auth/recover",
    tag = AUTH_TAG,
    request_body = RecoverDto,
    responses(
        (status = 200, description = "Recovery requested"),
        (status = 400, description = "Malformed email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recover(
    State(state): State<AppState>,
    Json(request): Json<RecoverDto>,
) -> Result<impl IntoResponse, Error> {
    AuthService::new(&state.db)
        .request_recovery(&request.email)
        .await?;

    Ok(StatusCode::OK)
}
