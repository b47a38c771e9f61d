//! Drafts for the backoffice users and access screens.
//!
//! Both screens list `backoffice_users` rows. The users screen creates accounts (auth account
//! first, then the role record sharing its ID) and changes roles; the access screen only toggles
//! role and active flag on existing rows.

use dioxus_logger::tracing;
use serde::Serialize;

use crate::{
    model::backoffice_user::{
        BackofficeUserDto, NewBackofficeUserDto, Role, UpdateBackofficeUserDto,
    },
    state::{
        collection::{ClientError, RemoteClient},
        list::{Draft, ListTexts, MISSING_FIELDS},
    },
};

pub const USER_TEXTS: ListTexts = ListTexts {
    load_error: "Error al cargar los usuarios",
    created: "Usuario añadido con éxito.",
    updated: "Usuario actualizado con éxito.",
    deleted: "Usuario eliminado con éxito.",
    save_error: "Error al guardar el usuario",
    delete_error: "Error al eliminar el usuario",
    confirm_delete:
        "¿Estás seguro de que quieres eliminar este usuario? Esta acción es irreversible.",
};

pub const ACCESS_TEXTS: ListTexts = ListTexts {
    load_error: "Error al cargar los usuarios",
    created: "Acceso creado con éxito.",
    updated: "Acceso actualizado con éxito.",
    deleted: "Acceso eliminado con éxito.",
    save_error: "Error al actualizar el acceso",
    delete_error: "Error al eliminar el acceso",
    confirm_delete: "¿Estás seguro de que quieres eliminar el acceso de este usuario?",
};

pub const NO_USER_SELECTED: &str = "Selecciona un usuario para modificar su acceso.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserDraft {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Validated users screen form
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UserSubmission {
    pub email: String,
    #[serde(skip)]
    pub password: String,
    pub role: Role,
}

impl Draft for UserDraft {
    type Record = BackofficeUserDto;
    type Input = UserSubmission;

    const TEXTS: &'static ListTexts = &USER_TEXTS;

    fn from_record(record: &BackofficeUserDto) -> Self {
        Self {
            email: record.email.clone(),
            password: String::new(),
            role: record.role,
        }
    }

    fn validate(&self, editing: bool) -> Result<UserSubmission, String> {
        if self.email.trim().is_empty() || (!editing && self.password.is_empty()) {
            return Err(MISSING_FIELDS.to_string());
        }

        if editing && !self.password.is_empty() {
            tracing::warn!(
                "Ignoring password change for {}, passwords are not updated from the users screen",
                self.email
            );
        }

        Ok(UserSubmission {
            email: self.email.trim().to_string(),
            password: if editing {
                String::new()
            } else {
                self.password.clone()
            },
            role: self.role,
        })
    }

    /// Creates the auth account, then the role record with the account's ID
    async fn insert<C: RemoteClient>(
        client: &C,
        input: &UserSubmission,
    ) -> Result<BackofficeUserDto, ClientError> {
        let account = client.sign_up(&input.email, &input.password).await?;

        let record = NewBackofficeUserDto {
            id: account.id,
            email: account.email,
            role: input.role,
            is_active: true,
        };

        client.insert::<BackofficeUserDto, _>(&record).await
    }

    async fn update<C: RemoteClient>(
        client: &C,
        id: &uuid::Uuid,
        input: &UserSubmission,
    ) -> Result<BackofficeUserDto, ClientError> {
        let update = UpdateBackofficeUserDto {
            role: input.role,
            is_active: None,
        };

        client.update::<BackofficeUserDto, _>(id, &update).await
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AccessDraft {
    pub role: Role,
    pub is_active: bool,
}

impl Default for AccessDraft {
    fn default() -> Self {
        Self {
            role: Role::default(),
            is_active: true,
        }
    }
}

impl Draft for AccessDraft {
    type Record = BackofficeUserDto;
    type Input = UpdateBackofficeUserDto;

    const TEXTS: &'static ListTexts = &ACCESS_TEXTS;

    fn from_record(record: &BackofficeUserDto) -> Self {
        Self {
            role: record.role,
            is_active: record.is_active,
        }
    }

    fn validate(&self, editing: bool) -> Result<UpdateBackofficeUserDto, String> {
        if !editing {
            return Err(NO_USER_SELECTED.to_string());
        }

        Ok(UpdateBackofficeUserDto {
            role: self.role,
            is_active: Some(self.is_active),
        })
    }
}
