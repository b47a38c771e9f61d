//! Backoffice user records and role checks.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::backoffice_user::{
        BackofficeUserDto, NewBackofficeUserDto, Role, UpdateBackofficeUserDto,
    },
    server::{
        data::{
            auth_account::AuthAccountRepository,
            backoffice_user::{BackofficeUserRepository, UserOrder},
        },
        error::{auth::AuthError, content::ContentError, Error},
        model::db::BackofficeUserModel,
    },
};

/// Role stored on a record, unknown names are treated as the default role
pub fn stored_role(user: &BackofficeUserModel) -> Role {
    user.role.parse().unwrap_or_else(|_| {
        tracing::warn!(
            "Backoffice user {} has unknown role {:?}, treating as {}",
            user.id,
            user.role,
            Role::default()
        );

        Role::default()
    })
}

impl From<BackofficeUserModel> for BackofficeUserDto {
    fn from(user: BackofficeUserModel) -> Self {
        Self {
            role: stored_role(&user),
            id: user.id,
            email: user.email,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

fn not_found(id: Uuid) -> Error {
    Error::ContentError(ContentError::NotFound {
        collection: "backoffice_users",
        id: id.to_string(),
    })
}

pub struct BackofficeUserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BackofficeUserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, order: UserOrder) -> Result<Vec<BackofficeUserDto>, Error> {
        let users = BackofficeUserRepository::new(self.db).get_all(order).await?;

        Ok(users.into_iter().map(BackofficeUserDto::from).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<BackofficeUserDto>, Error> {
        let user = BackofficeUserRepository::new(self.db).get(id).await?;

        Ok(user.map(BackofficeUserDto::from))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<BackofficeUserDto>, Error> {
        let user = BackofficeUserRepository::new(self.db)
            .find_by_email(email.trim())
            .await?;

        Ok(user.map(BackofficeUserDto::from))
    }

    /// Ensures `account_id` has an active backoffice record whose role grants `required`
    pub async fn require_role(
        &self,
        account_id: Uuid,
        required: Role,
    ) -> Result<BackofficeUserModel, Error> {
        let Some(user) = BackofficeUserRepository::new(self.db).get(account_id).await? else {
            return Err(AuthError::NoBackofficeAccess(account_id).into());
        };

        if !user.is_active {
            return Err(AuthError::NoBackofficeAccess(account_id).into());
        }

        let role = stored_role(&user);
        if !role.grants(required) {
            return Err(AuthError::MissingRole {
                account_id,
                role,
                required,
            }
            .into());
        }

        Ok(user)
    }

    /// Creates a backoffice record on behalf of `actor_id`.
    ///
    /// Administrators may create records for any auth account. An account without a record
    /// may only create its own, and always receives the default role in the active state.
    pub async fn create(
        &self,
        actor_id: Uuid,
        input: NewBackofficeUserDto,
    ) -> Result<BackofficeUserDto, Error> {
        let users = BackofficeUserRepository::new(self.db);

        let (role, is_active) = match users.get(actor_id).await? {
            None => {
                if input.id != actor_id {
                    return Err(AuthError::ForeignProvision(actor_id).into());
                }

                tracing::info!("Provisioning backoffice access for account {}", actor_id);

                (Role::default(), true)
            }
            Some(_) => {
                self.require_role(actor_id, Role::Administrador).await?;

                (input.role, input.is_active)
            }
        };

        let Some(account) = AuthAccountRepository::new(self.db).get(input.id).await? else {
            return Err(Error::ContentError(ContentError::NotFound {
                collection: "auth_accounts",
                id: input.id.to_string(),
            }));
        };

        let user = users
            .create(account.id, &account.email, role, is_active)
            .await?;

        Ok(user.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateBackofficeUserDto,
    ) -> Result<BackofficeUserDto, Error> {
        BackofficeUserRepository::new(self.db)
            .update(id, input.role, input.is_active)
            .await?
            .map(BackofficeUserDto::from)
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), Error> {
        let result = BackofficeUserRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }
}
