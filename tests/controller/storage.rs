use axum::{
    body::Body,
    extract::{FromRequest, Multipart, Path, State},
    http::{header, Request, StatusCode},
    response::IntoResponse,
};
use miaclub::{
    model::storage::{UploadDto, IMAGE_BUCKET},
    server::controller::storage::{download, upload},
};
use miaclub_test_utils::prelude::*;

use crate::util::{read_json, sign_in_staff};

const BOUNDARY: &str = "miaclub-test-boundary";
const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Multipart body with the given text and file parts, any of which may be left out
async fn multipart(path: Option<&str>, file: Option<&[u8]>) -> Multipart {
    let mut body = Vec::new();
    if let Some(path) = path {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"path\"\r\n\r\n{path}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some(file) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"promo.png\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(file);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();

    Multipart::from_request(request, &()).await.unwrap()
}

async fn storage_setup() -> Result<TestContext, TestError> {
    let test = test_setup_with_auth_tables!()?;
    std::fs::create_dir_all(test.storage_root().join(IMAGE_BUCKET))?;

    Ok(test)
}

/// Expect 201 created, then the same bytes served from the public URL path
#[tokio::test]
async fn upload_then_download() -> Result<(), TestError> {
    let test = storage_setup().await?;
    sign_in_staff(&test, "editor@miaclub.pe", "Editor").await?;

    let result = upload(
        State(test.to_app_state()),
        test.session.clone(),
        Path(IMAGE_BUCKET.to_string()),
        multipart(Some("public/1700000000000_promo.png"), Some(PNG_BYTES)).await,
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let uploaded: UploadDto = read_json(resp).await;
    assert_eq!(uploaded.path, "public/1700000000000_promo.png");
    assert_eq!(
        uploaded.public_url,
        format!("{TEST_PUBLIC_URL}/storage/{IMAGE_BUCKET}/public/1700000000000_promo.png")
    );

    let result = download(
        State(test.to_app_state()),
        Path((IMAGE_BUCKET.to_string(), uploaded.path)),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "image/png");
    assert_eq!(resp.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], PNG_BYTES);

    Ok(())
}

/// Expect 400 bad request when the file part is missing
#[tokio::test]
async fn upload_requires_file() -> Result<(), TestError> {
    let test = storage_setup().await?;
    sign_in_staff(&test, "editor@miaclub.pe", "Editor").await?;

    let result = upload(
        State(test.to_app_state()),
        test.session.clone(),
        Path(IMAGE_BUCKET.to_string()),
        multipart(Some("public/1_promo.png"), None).await,
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 bad request for markup uploaded by an editor
#[tokio::test]
async fn upload_rejects_html() -> Result<(), TestError> {
    let test = storage_setup().await?;
    sign_in_staff(&test, "editor@miaclub.pe", "Editor").await?;

    let result = upload(
        State(test.to_app_state()),
        test.session.clone(),
        Path(IMAGE_BUCKET.to_string()),
        multipart(Some("public/1_x.html"), Some(b"<script>alert(1)</script>")).await,
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(!test
        .storage_root()
        .join(IMAGE_BUCKET)
        .join("public/1_x.html")
        .exists());

    Ok(())
}

/// Expect 404 not found for a bucket that does not exist
#[tokio::test]
async fn upload_unknown_bucket() -> Result<(), TestError> {
    let test = storage_setup().await?;
    sign_in_staff(&test, "editor@miaclub.pe", "Editor").await?;

    let result = upload(
        State(test.to_app_state()),
        test.session.clone(),
        Path("otro-bucket".to_string()),
        multipart(Some("public/1_promo.png"), Some(PNG_BYTES)).await,
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 403 forbidden for a viewer
#[tokio::test]
async fn viewer_cannot_upload() -> Result<(), TestError> {
    let test = storage_setup().await?;
    sign_in_staff(&test, "vista@miaclub.pe", "Visualizador").await?;

    let result = upload(
        State(test.to_app_state()),
        test.session.clone(),
        Path(IMAGE_BUCKET.to_string()),
        multipart(Some("public/1_promo.png"), Some(PNG_BYTES)).await,
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 404 not found for an object that was never uploaded
#[tokio::test]
async fn download_missing_object() -> Result<(), TestError> {
    let test = storage_setup().await?;

    let result = download(
        State(test.to_app_state()),
        Path((IMAGE_BUCKET.to_string(), "public/nada.png".to_string())),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
