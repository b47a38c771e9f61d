//! Helpers shared by the controller integration tests.

use axum::response::Response;
use miaclub::server::model::session::account::{SessionAccountId, SESSION_ACCOUNT_ID_KEY};
use miaclub_test_utils::prelude::*;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Stores `account_id` in the test session the way a successful login does
pub async fn sign_in(test: &TestContext, account_id: Uuid) -> Result<(), TestError> {
    test.session
        .insert(
            SESSION_ACCOUNT_ID_KEY,
            SessionAccountId(account_id.to_string()),
        )
        .await?;

    Ok(())
}

/// Creates an active staff member with `role` and signs it in
pub async fn sign_in_staff(
    test: &TestContext,
    email: &str,
    role: &str,
) -> Result<Uuid, TestError> {
    let (account, _) = test.auth().insert_staff(email, role, true).await?;
    sign_in(test, account.id).await?;

    Ok(account.id)
}

pub async fn read_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
