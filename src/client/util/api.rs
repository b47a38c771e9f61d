//! HTTP implementation of the remote client traits against the `/api` routes.

use serde::{de::DeserializeOwned, Serialize};

use miaclub::{
    model::{
        api::ErrorDto,
        auth::{AuthUserDto, CredentialsDto, RecoverDto},
        backoffice_user::BackofficeUserDto,
        storage::UploadDto,
        web_config::WebConfigEntryDto,
    },
    state::collection::{
        AuthClient, ClientError, Collection, CollectionClient, ListQuery, Record,
    },
};

#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

enum Payload {
    Empty,
    Json(String),
    Upload {
        path: String,
        file_name: String,
        bytes: Vec<u8>,
    },
}

impl Payload {
    fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, ClientError> {
        serde_json::to_string(value)
            .map(Self::Json)
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Status and raw body of a finished request
struct Reply {
    status: u16,
    body: String,
}

impl Reply {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn into_error(self) -> ClientError {
        let message = match serde_json::from_str::<ErrorDto>(&self.body) {
            Ok(dto) => dto.error,
            Err(_) if !self.body.trim().is_empty() => self.body,
            Err(_) => format!("Request failed with status {}", self.status),
        };

        ClientError::Status {
            status: self.status,
            message,
        }
    }

    fn empty(self) -> Result<(), ClientError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }

    fn json<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        if !self.is_success() {
            return Err(self.into_error());
        }

        serde_json::from_str(&self.body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// `404` becomes `None`
    fn optional<T: DeserializeOwned>(self) -> Result<Option<T>, ClientError> {
        if self.status == 404 {
            return Ok(None);
        }

        self.json().map(Some)
    }
}

#[cfg(feature = "web")]
async fn send(method: Method, url: &str, payload: Payload) -> Result<Reply, ClientError> {
    use reqwasm::http::{Request, RequestCredentials};

    let request = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
    .credentials(RequestCredentials::Include);

    let request = match payload {
        Payload::Empty => request,
        Payload::Json(body) => request.header("Content-Type", "application/json").body(body),
        Payload::Upload {
            path,
            file_name,
            bytes,
        } => request.body(upload_form(&path, &file_name, &bytes)?),
    };

    let response = request
        .send()
        .await
        .map_err(|e| ClientError::Request(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))?;

    Ok(Reply { status, body })
}

#[cfg(not(feature = "web"))]
async fn send(_method: Method, url: &str, _payload: Payload) -> Result<Reply, ClientError> {
    Err(ClientError::Unavailable(format!(
        "no HTTP client on this target for {}",
        url
    )))
}

/// Multipart body with the `path` and `file` fields the upload route expects
#[cfg(feature = "web")]
fn upload_form(path: &str, file_name: &str, bytes: &[u8]) -> Result<web_sys::FormData, ClientError> {
    let js_error = |e: wasm_bindgen::JsValue| ClientError::Request(format!("{:?}", e));

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(js_error)?;

    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_str("path", path).map_err(js_error)?;
    form.append_with_blob_and_filename("file", &blob, file_name)
        .map_err(js_error)?;

    Ok(form)
}

#[cfg(feature = "web")]
fn encode_component(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

#[cfg(not(feature = "web"))]
fn encode_component(value: &str) -> String {
    value.to_string()
}

fn collection_url(collection: Collection) -> String {
    format!("/api/{}", collection.path())
}

fn record_url<R: Record>(id: &R::Id) -> String {
    format!("{}/{}", collection_url(R::COLLECTION), id)
}

/// Client for the Mia Club API served from the same origin
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ApiClient;

impl CollectionClient for ApiClient {
    async fn select<R: Record>(&self, query: ListQuery) -> Result<Vec<R>, ClientError> {
        let url = format!(
            "{}{}",
            collection_url(R::COLLECTION),
            query.to_query_string()
        );

        send(Method::Get, &url, Payload::Empty).await?.json()
    }

    async fn select_one<R: Record>(&self, id: &R::Id) -> Result<Option<R>, ClientError> {
        send(Method::Get, &record_url::<R>(id), Payload::Empty)
            .await?
            .optional()
    }

    async fn insert<R: Record, I: Serialize>(&self, input: &I) -> Result<R, ClientError> {
        send(
            Method::Post,
            &collection_url(R::COLLECTION),
            Payload::json(input)?,
        )
        .await?
        .json()
    }

    async fn update<R: Record, I: Serialize>(
        &self,
        id: &R::Id,
        input: &I,
    ) -> Result<R, ClientError> {
        send(Method::Put, &record_url::<R>(id), Payload::json(input)?)
            .await?
            .json()
    }

    async fn delete<R: Record>(&self, id: &R::Id) -> Result<(), ClientError> {
        send(Method::Delete, &record_url::<R>(id), Payload::Empty)
            .await?
            .empty()
    }

    async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<BackofficeUserDto>, ClientError> {
        let url = format!(
            "{}/by-email?email={}",
            collection_url(Collection::BackofficeUsers),
            encode_component(email)
        );

        send(Method::Get, &url, Payload::Empty).await?.optional()
    }

    async fn select_config(&self) -> Result<Vec<WebConfigEntryDto>, ClientError> {
        send(
            Method::Get,
            &collection_url(Collection::WebConfig),
            Payload::Empty,
        )
        .await?
        .json()
    }

    async fn upsert_config(
        &self,
        entries: &[WebConfigEntryDto],
    ) -> Result<Vec<WebConfigEntryDto>, ClientError> {
        send(
            Method::Put,
            &collection_url(Collection::WebConfig),
            Payload::json(entries)?,
        )
        .await?
        .json()
    }

    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadDto, ClientError> {
        let file_name = path.rsplit('/').next().unwrap_or(path).to_string();
        let payload = Payload::Upload {
            path: path.to_string(),
            file_name,
            bytes,
        };

        send(
            Method::Post,
            &format!("/api/storage/{}", encode_component(bucket)),
            payload,
        )
        .await?
        .json()
    }
}

impl AuthClient for ApiClient {
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUserDto, ClientError> {
        let credentials = CredentialsDto {
            email: email.to_string(),
            password: password.to_string(),
        };

        send(
            Method::Post,
            "/api/auth/signup",
            Payload::json(&credentials)?,
        )
        .await?
        .json()
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthUserDto, ClientError> {
        let credentials = CredentialsDto {
            email: email.to_string(),
            password: password.to_string(),
        };

        send(Method::Post, "/api/auth/login", Payload::json(&credentials)?)
            .await?
            .json()
    }

    async fn sign_out(&self) -> Result<(), ClientError> {
        send(Method::Post, "/api/auth/logout", Payload::Empty)
            .await?
            .empty()
    }

    async fn get_session(&self) -> Result<Option<AuthUserDto>, ClientError> {
        send(Method::Get, "/api/auth/session", Payload::Empty)
            .await?
            .optional()
    }

    async fn reset_password_for_email(&self, email: &str) -> Result<(), ClientError> {
        let request = RecoverDto {
            email: email.to_string(),
        };

        send(Method::Post, "/api/auth/recover", Payload::json(&request)?)
            .await?
            .empty()
    }
}
