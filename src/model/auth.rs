use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Email and password pair used for sign up and sign in
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CredentialsDto {
    pub email: String,
    pub password: String,
}

/// The authenticated account behind a session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AuthUserDto {
    pub id: Uuid,
    pub email: String,
}

/// Password recovery request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RecoverDto {
    pub email: String,
}
