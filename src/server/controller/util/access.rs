use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{auth::AuthUserDto, backoffice_user::Role},
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, db::BackofficeUserModel, session::account::SessionAccountId},
        service::{auth::AuthService, backoffice_user::BackofficeUserService},
    },
};

/// Returns the signed in auth account.
///
/// A session pointing at an account that no longer exists is cleared.
pub async fn get_account_from_session(
    state: &AppState,
    session: &Session,
) -> Result<AuthUserDto, Error> {
    let Some(account_id) = SessionAccountId::get(session).await? else {
        return Err(Error::AuthError(AuthError::AccountNotInSession));
    };

    let Some(account) = AuthService::new(&state.db).get_account(account_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for account ID {} with active session but was not found in database",
            account_id
        );

        return Err(Error::AuthError(AuthError::AccountNotInDatabase(account_id)));
    };

    Ok(account)
}

/// Returns the backoffice record of the signed in account if its role grants `required`
pub async fn require_role(
    state: &AppState,
    session: &Session,
    required: Role,
) -> Result<BackofficeUserModel, Error> {
    let account = get_account_from_session(state, session).await?;

    BackofficeUserService::new(&state.db)
        .require_role(account.id, required)
        .await
}
