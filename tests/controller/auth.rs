use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use miaclub::{
    model::auth::{AuthUserDto, CredentialsDto, RecoverDto},
    server::{
        controller::auth::{get_session, login, logout, recover, signup},
        model::{app::AppState, session::account::SessionAccountId},
    },
};
use miaclub_test_utils::prelude::*;
use uuid::Uuid;

use crate::util::{read_json, sign_in};

fn credentials(email: &str, password: &str) -> Json<CredentialsDto> {
    Json(CredentialsDto {
        email: email.to_string(),
        password: password.to_string(),
    })
}

mod signup {
    use super::*;

    /// Expect 201 created with the normalized email
    #[tokio::test]
    async fn creates_account() -> Result<(), TestError> {
        let test = test_setup_with_auth_tables!()?;
        let state: AppState = test.to_app_state();

        let result = signup(State(state), credentials("  Nueva@MiaClub.pe ", "secreto123")).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let account: AuthUserDto = read_json(resp).await;
        assert_eq!(account.email, "nueva@miaclub.pe");

        Ok(())
    }

    /// Expect 409 conflict when the email is already registered
    #[tokio::test]
    async fn rejects_duplicate_email() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_account("ana@miaclub.pe")
            .build()
            .await?;

        let result = signup(
            State(test.to_app_state()),
            credentials("ana@miaclub.pe", "otraclave"),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }

    /// Expect 400 bad request for a password shorter than six characters
    #[tokio::test]
    async fn rejects_short_password() -> Result<(), TestError> {
        let test = test_setup_with_auth_tables!()?;

        let result = signup(
            State(test.to_app_state()),
            credentials("ana@miaclub.pe", "abc"),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod login {
    use super::*;

    /// Expect 200 success and the account ID stored in session
    #[tokio::test]
    async fn stores_account_in_session() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_account("ana@miaclub.pe")
            .build()
            .await?;

        let result = login(
            State(test.to_app_state()),
            test.session.clone(),
            credentials("ana@miaclub.pe", TEST_PASSWORD),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let account: AuthUserDto = read_json(resp).await;
        let stored = SessionAccountId::get(&test.session).await.unwrap();
        assert_eq!(stored, Some(account.id));

        Ok(())
    }

    /// Expect 401 unauthorized and an empty session for a wrong password
    #[tokio::test]
    async fn rejects_wrong_password() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_account("ana@miaclub.pe")
            .build()
            .await?;

        let result = login(
            State(test.to_app_state()),
            test.session.clone(),
            credentials("ana@miaclub.pe", "incorrecta"),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(SessionAccountId::get(&test.session).await.unwrap().is_none());

        Ok(())
    }

    /// Expect 401 unauthorized for an unknown email
    #[tokio::test]
    async fn rejects_unknown_email() -> Result<(), TestError> {
        let test = test_setup_with_auth_tables!()?;

        let result = login(
            State(test.to_app_state()),
            test.session.clone(),
            credentials("nadie@miaclub.pe", TEST_PASSWORD),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect 500 internal server error when required database tables dont exist
    #[tokio::test]
    async fn error_when_tables_missing() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = login(
            State(test.to_app_state()),
            test.session.clone(),
            credentials("ana@miaclub.pe", TEST_PASSWORD),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}

mod logout {
    use super::*;

    /// Expect 204 no content and the account removed from session
    #[tokio::test]
    async fn clears_session() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        sign_in(&test, Uuid::new_v4()).await?;

        let result = logout(test.session.clone()).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(SessionAccountId::get(&test.session).await.unwrap().is_none());

        Ok(())
    }

    /// Expect 204 no content even without anyone signed in
    #[tokio::test]
    async fn succeeds_without_session() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = logout(test.session).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        Ok(())
    }
}

mod session {
    use super::*;

    /// Expect 200 success with the signed in account
    #[tokio::test]
    async fn returns_signed_in_account() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_account("ana@miaclub.pe")
            .build()
            .await?;
        let account = test.auth().account_by_email("ana@miaclub.pe").await?.unwrap();
        sign_in(&test, account.id).await?;

        let result = get_session(State(test.to_app_state()), test.session.clone()).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: AuthUserDto = read_json(resp).await;
        assert_eq!(body.id, account.id);

        Ok(())
    }

    /// Expect 404 not found when nobody is signed in
    #[tokio::test]
    async fn not_found_without_session() -> Result<(), TestError> {
        let test = test_setup_with_auth_tables!()?;

        let result = get_session(State(test.to_app_state()), test.session.clone()).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 404 not found and a cleared session when the account no longer exists
    #[tokio::test]
    async fn clears_session_for_deleted_account() -> Result<(), TestError> {
        let test = test_setup_with_auth_tables!()?;
        sign_in(&test, Uuid::new_v4()).await?;

        let result = get_session(State(test.to_app_state()), test.session.clone()).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(SessionAccountId::get(&test.session).await.unwrap().is_none());

        Ok(())
    }
}

mod recover {
    use super::*;

    fn request(email: &str) -> Json<RecoverDto> {
        Json(RecoverDto {
            email: email.to_string(),
        })
    }

    /// Expect 200 success for both registered and unknown emails
    #[tokio::test]
    async fn succeeds_for_any_well_formed_email() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_account("ana@miaclub.pe")
            .build()
            .await?;

        for email in ["ana@miaclub.pe", "nadie@miaclub.pe"] {
            let result = recover(State(test.to_app_state()), request(email)).await;

            let resp = result.unwrap().into_response();
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let account = test.auth().account_by_email("ana@miaclub.pe").await?.unwrap();
        assert!(account.recovery_token.is_some());

        Ok(())
    }

    /// Expect 400 bad request for a malformed email
    #[tokio::test]
    async fn rejects_malformed_email() -> Result<(), TestError> {
        let test = test_setup_with_auth_tables!()?;

        let result = recover(State(test.to_app_state()), request("no-es-email")).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}
