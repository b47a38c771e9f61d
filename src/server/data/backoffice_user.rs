use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::backoffice_user::Role;

/// Orderings offered by the backoffice user listings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserOrder {
    /// Access screen
    #[default]
    Email,
    /// Users screen, newest first
    CreatedAt,
}

pub struct BackofficeUserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BackofficeUserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(
        &self,
        order: UserOrder,
    ) -> Result<Vec<entity::backoffice_user::Model>, DbErr> {
        let query = entity::prelude::BackofficeUser::find();

        let query = match order {
            UserOrder::Email => query.order_by_asc(entity::backoffice_user::Column::Email),
            UserOrder::CreatedAt => {
                query.order_by_desc(entity::backoffice_user::Column::CreatedAt)
            }
        };

        query.all(self.db).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<entity::backoffice_user::Model>, DbErr> {
        entity::prelude::BackofficeUser::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::backoffice_user::Model>, DbErr> {
        entity::prelude::BackofficeUser::find()
            .filter(entity::backoffice_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Creates the backoffice record of an existing auth account
    pub async fn create(
        &self,
        account_id: Uuid,
        email: &str,
        role: Role,
        is_active: bool,
    ) -> Result<entity::backoffice_user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let user = entity::backoffice_user::ActiveModel {
            id: ActiveValue::Set(account_id),
            email: ActiveValue::Set(email.to_string()),
            role: ActiveValue::Set(role.to_string()),
            is_active: ActiveValue::Set(is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        user.insert(self.db).await
    }

    /// Changes the role and, when given, the active flag
    pub async fn update(
        &self,
        id: Uuid,
        role: Role,
        is_active: Option<bool>,
    ) -> Result<Option<entity::backoffice_user::Model>, DbErr> {
        let Some(user) = entity::prelude::BackofficeUser::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.role = ActiveValue::Set(role.to_string());
        if let Some(is_active) = is_active {
            user_am.is_active = ActiveValue::Set(is_active);
        }
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(user_am.update(self.db).await?))
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::BackofficeUser::delete_by_id(id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod get_all_tests {
        use miaclub_test_utils::prelude::*;

        use crate::server::data::backoffice_user::{BackofficeUserRepository, UserOrder};

        /// Expect email order for the access screen and newest first for the users screen
        #[tokio::test]
        async fn test_get_all_orderings() -> Result<(), TestError> {
            let test = test_setup_with_auth_tables!()?;
            let auth = test.auth();
            auth.insert_staff("carla@miaclub.pe", "Editor", true).await?;
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            auth.insert_staff("ana@miaclub.pe", "Visualizador", true)
                .await?;
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            auth.insert_staff("beto@miaclub.pe", "Administrador", false)
                .await?;
            let repo = BackofficeUserRepository::new(&test.db);

            let by_email = repo.get_all(UserOrder::Email).await?;
            let by_created = repo.get_all(UserOrder::CreatedAt).await?;

            let emails = |users: &[entity::backoffice_user::Model]| {
                users.iter().map(|u| u.email.clone()).collect::<Vec<_>>()
            };
            assert_eq!(
                emails(&by_email),
                vec!["ana@miaclub.pe", "beto@miaclub.pe", "carla@miaclub.pe"]
            );
            assert_eq!(
                emails(&by_created),
                vec!["beto@miaclub.pe", "ana@miaclub.pe", "carla@miaclub.pe"]
            );

            Ok(())
        }
    }

    mod create_tests {
        use miaclub_test_utils::prelude::*;

        use crate::{
            model::backoffice_user::Role,
            server::data::backoffice_user::BackofficeUserRepository,
        };

        /// Expect the record to share the auth account ID
        #[tokio::test]
        async fn test_create_user_success() -> Result<(), TestError> {
            let test = test_setup_with_auth_tables!()?;
            let account = test.auth().insert_account("ana@miaclub.pe").await?;

            let user = BackofficeUserRepository::new(&test.db)
                .create(account.id, &account.email, Role::Editor, true)
                .await?;

            assert_eq!(user.id, account.id);
            assert_eq!(user.role, "Editor");

            Ok(())
        }

        /// Expect Error when creating a record twice for the same account
        #[tokio::test]
        async fn test_create_user_duplicate() -> Result<(), TestError> {
            let test = test_setup_with_auth_tables!()?;
            let (account, _) = test
                .auth()
                .insert_staff("ana@miaclub.pe", "Editor", true)
                .await?;

            let result = BackofficeUserRepository::new(&test.db)
                .create(account.id, &account.email, Role::Visualizador, true)
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod update_tests {
        use miaclub_test_utils::prelude::*;
        use uuid::Uuid;

        use crate::{
            model::backoffice_user::Role,
            server::data::backoffice_user::BackofficeUserRepository,
        };

        /// Expect the active flag to be kept when not provided
        #[tokio::test]
        async fn test_update_role_only() -> Result<(), TestError> {
            let test = test_setup_with_auth_tables!()?;
            let (_, user) = test
                .auth()
                .insert_staff("ana@miaclub.pe", "Visualizador", false)
                .await?;

            let updated = BackofficeUserRepository::new(&test.db)
                .update(user.id, Role::Editor, None)
                .await?
                .unwrap();

            assert_eq!(updated.role, "Editor");
            assert!(!updated.is_active);

            Ok(())
        }

        #[tokio::test]
        async fn test_update_user_none() -> Result<(), TestError> {
            let test = test_setup_with_auth_tables!()?;

            let result = BackofficeUserRepository::new(&test.db)
                .update(Uuid::new_v4(), Role::Editor, Some(true))
                .await?;

            assert!(result.is_none());

            Ok(())
        }
    }

    mod find_by_email_tests {
        use miaclub_test_utils::prelude::*;

        use crate::server::data::backoffice_user::BackofficeUserRepository;

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn test_find_by_email_error() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let result = BackofficeUserRepository::new(&test.db)
                .find_by_email("ana@miaclub.pe")
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
