use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::model::benefit::BenefitInputDto;

pub struct BenefitRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BenefitRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All benefits in alphabetical order
    pub async fn get_all(&self) -> Result<Vec<entity::benefit::Model>, DbErr> {
        entity::prelude::Benefit::find()
            .order_by_asc(entity::benefit::Column::Title)
            .order_by_asc(entity::benefit::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::benefit::Model>, DbErr> {
        entity::prelude::Benefit::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, input: BenefitInputDto) -> Result<entity::benefit::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let benefit = entity::benefit::ActiveModel {
            title: ActiveValue::Set(input.title),
            description: ActiveValue::Set(input.description),
            image_url: ActiveValue::Set(input.image_url),
            is_active: ActiveValue::Set(input.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        benefit.insert(self.db).await
    }

    pub async fn update(
        &self,
        id: i32,
        input: BenefitInputDto,
    ) -> Result<Option<entity::benefit::Model>, DbErr> {
        let Some(benefit) = entity::prelude::Benefit::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut benefit_am = benefit.into_active_model();
        benefit_am.title = ActiveValue::Set(input.title);
        benefit_am.description = ActiveValue::Set(input.description);
        benefit_am.image_url = ActiveValue::Set(input.image_url);
        benefit_am.is_active = ActiveValue::Set(input.is_active);
        benefit_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(benefit_am.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Benefit::delete_by_id(id).exec(self.db).await
    }
}
