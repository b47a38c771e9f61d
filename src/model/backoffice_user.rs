use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Backoffice permission level
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum Role {
    Administrador,
    Editor,
    #[default]
    Visualizador,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown backoffice role: {0:?}")]
pub struct UnknownRole(pub String);

impl Role {
    pub const ALL: [Role; 3] = [Role::Administrador, Role::Editor, Role::Visualizador];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrador => "Administrador",
            Self::Editor => "Editor",
            Self::Visualizador => "Visualizador",
        }
    }

    /// Whether the role may create, update or delete storefront content
    pub fn can_edit_content(&self) -> bool {
        matches!(self, Self::Administrador | Self::Editor)
    }

    /// Whether the role may manage backoffice users and their access
    pub fn can_manage_users(&self) -> bool {
        matches!(self, Self::Administrador)
    }

    /// Whether this role includes every permission of `required`
    pub fn grants(&self, required: Role) -> bool {
        self.rank() >= required.rank()
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Administrador => 2,
            Self::Editor => 1,
            Self::Visualizador => 0,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// A backoffice account record, sharing its ID with the auth account
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BackofficeUserDto {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Insert payload for a backoffice user record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NewBackofficeUserDto {
    /// ID of the auth account the record belongs to
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
}

/// Update payload for a backoffice user record, email is not editable
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateBackofficeUserDto {
    pub role: Role,
    /// Left unchanged when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
