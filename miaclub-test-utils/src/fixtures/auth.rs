use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{constant::TEST_PASSWORD, error::TestError, TestContext};

impl TestContext {
    pub fn auth(&self) -> AuthFixtures<'_> {
        AuthFixtures { test: self }
    }
}

pub struct AuthFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> AuthFixtures<'a> {
    /// Inserts an auth account whose password is [`TEST_PASSWORD`]
    pub async fn insert_account(
        &self,
        email: &str,
    ) -> Result<entity::auth_account::Model, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(TEST_PASSWORD.as_bytes(), &salt)
            .map_err(|e| TestError::PasswordHash(e.to_string()))?
            .to_string();

        Ok(
            entity::prelude::AuthAccount::insert(entity::auth_account::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                email: ActiveValue::Set(email.to_string()),
                password_hash: ActiveValue::Set(password_hash),
                recovery_token: ActiveValue::Set(None),
                recovery_sent_at: ActiveValue::Set(None),
                last_sign_in_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_backoffice_user(
        &self,
        account: &entity::auth_account::Model,
        role: &str,
        is_active: bool,
    ) -> Result<entity::backoffice_user::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::BackofficeUser::insert(entity::backoffice_user::ActiveModel {
                id: ActiveValue::Set(account.id),
                email: ActiveValue::Set(account.email.clone()),
                role: ActiveValue::Set(role.to_string()),
                is_active: ActiveValue::Set(is_active),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Inserts an auth account together with its backoffice record
    pub async fn insert_staff(
        &self,
        email: &str,
        role: &str,
        is_active: bool,
    ) -> Result<
        (
            entity::auth_account::Model,
            entity::backoffice_user::Model,
        ),
        TestError,
    > {
        let account = self.insert_account(email).await?;
        let user = self
            .insert_backoffice_user(&account, role, is_active)
            .await?;

        Ok((account, user))
    }

    /// Looks up an account inserted by the builder
    pub async fn account_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::auth_account::Model>, TestError> {
        use sea_orm::{ColumnTrait, QueryFilter};

        Ok(entity::prelude::AuthAccount::find()
            .filter(entity::auth_account::Column::Email.eq(email))
            .one(&self.test.db)
            .await?)
    }
}
