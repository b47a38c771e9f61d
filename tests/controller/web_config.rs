use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use miaclub::{
    model::web_config::{WebConfigEntryDto, PRIMARY_COLOR_KEY, SITE_TITLE_KEY},
    server::controller::web_config::{get_web_config, upsert_web_config},
};
use miaclub_test_utils::prelude::*;
use serde_json::json;

use crate::util::{read_json, sign_in_staff};

async fn config_setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_auth_tables()
        .with_table(entity::prelude::WebConfig)
        .build()
        .await
}

fn entry(name: &str, value: serde_json::Value) -> WebConfigEntryDto {
    WebConfigEntryDto {
        config_name: name.to_string(),
        config_value: value,
    }
}

/// Expect stored entries to be readable without signing in
#[tokio::test]
async fn lists_entries_publicly() -> Result<(), TestError> {
    let test = config_setup().await?;
    test.content()
        .insert_config(SITE_TITLE_KEY, json!("Mia Club Lima"))
        .await?;

    let result = get_web_config(State(test.to_app_state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let entries: Vec<WebConfigEntryDto> = read_json(resp).await;
    assert_eq!(entries, vec![entry(SITE_TITLE_KEY, json!("Mia Club Lima"))]);

    Ok(())
}

/// Expect an upsert to replace existing keys and add new ones
#[tokio::test]
async fn upsert_replaces_by_name() -> Result<(), TestError> {
    let test = config_setup().await?;
    test.content()
        .insert_config(SITE_TITLE_KEY, json!("Antiguo"))
        .await?;
    sign_in_staff(&test, "editor@miaclub.pe", "Editor").await?;

    let result = upsert_web_config(
        State(test.to_app_state()),
        test.session.clone(),
        Json(vec![
            entry(SITE_TITLE_KEY, json!("Nuevo")),
            entry(PRIMARY_COLOR_KEY, json!("#000000")),
        ]),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored: Vec<WebConfigEntryDto> =
        read_json(get_web_config(State(test.to_app_state())).await.unwrap().into_response()).await;
    assert_eq!(
        stored,
        vec![
            entry(PRIMARY_COLOR_KEY, json!("#000000")),
            entry(SITE_TITLE_KEY, json!("Nuevo")),
        ]
    );

    Ok(())
}

/// Expect 403 forbidden for a viewer
#[tokio::test]
async fn viewer_cannot_upsert() -> Result<(), TestError> {
    let test = config_setup().await?;
    sign_in_staff(&test, "vista@miaclub.pe", "Visualizador").await?;

    let result = upsert_web_config(
        State(test.to_app_state()),
        test.session.clone(),
        Json(vec![entry(SITE_TITLE_KEY, json!("Nuevo"))]),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 400 bad request for an entry without a name
#[tokio::test]
async fn rejects_blank_name() -> Result<(), TestError> {
    let test = config_setup().await?;
    sign_in_staff(&test, "editor@miaclub.pe", "Editor").await?;

    let result = upsert_web_config(
        State(test.to_app_state()),
        test.session.clone(),
        Json(vec![entry(" ", json!(1))]),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
