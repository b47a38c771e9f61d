use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};
use uuid::Uuid;

pub struct AuthAccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthAccountRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an account with a freshly generated ID
    pub async fn create(
        &self,
        email: &str,
        password_hash: String,
    ) -> Result<entity::auth_account::Model, DbErr> {
        let account = entity::auth_account::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(password_hash),
            recovery_token: ActiveValue::Set(None),
            recovery_sent_at: ActiveValue::Set(None),
            last_sign_in_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        account.insert(self.db).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<entity::auth_account::Model>, DbErr> {
        entity::prelude::AuthAccount::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::auth_account::Model>, DbErr> {
        entity::prelude::AuthAccount::find()
            .filter(entity::auth_account::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn update_last_sign_in(
        &self,
        account: entity::auth_account::Model,
    ) -> Result<entity::auth_account::Model, DbErr> {
        let mut account_am = account.into_active_model();
        account_am.last_sign_in_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        account_am.update(self.db).await
    }

    /// Stores a new recovery token, replacing any previous one
    pub async fn set_recovery_token(
        &self,
        account: entity::auth_account::Model,
        token: String,
    ) -> Result<entity::auth_account::Model, DbErr> {
        let mut account_am = account.into_active_model();
        account_am.recovery_token = ActiveValue::Set(Some(token));
        account_am.recovery_sent_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        account_am.update(self.db).await
    }
}
