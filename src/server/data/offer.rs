use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::model::offer::OfferInputDto;

pub struct OfferRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OfferRepository<'a, C> {
    /// Creates a new instance of [`OfferRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All offers, latest ending first
    pub async fn get_all(&self) -> Result<Vec<entity::offer::Model>, DbErr> {
        entity::prelude::Offer::find()
            .order_by_desc(entity::offer::Column::EndDate)
            .order_by_desc(entity::offer::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::offer::Model>, DbErr> {
        entity::prelude::Offer::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, input: OfferInputDto) -> Result<entity::offer::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let offer = entity::offer::ActiveModel {
            title: ActiveValue::Set(input.title),
            description: ActiveValue::Set(input.description),
            discount: ActiveValue::Set(input.discount),
            image_url: ActiveValue::Set(input.image_url),
            start_date: ActiveValue::Set(input.start_date),
            end_date: ActiveValue::Set(input.end_date),
            is_active: ActiveValue::Set(input.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        offer.insert(self.db).await
    }

    /// Replaces every editable field, returns `None` when the offer does not exist
    pub async fn update(
        &self,
        id: i32,
        input: OfferInputDto,
    ) -> Result<Option<entity::offer::Model>, DbErr> {
        let Some(offer) = entity::prelude::Offer::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut offer_am = offer.into_active_model();
        offer_am.title = ActiveValue::Set(input.title);
        offer_am.description = ActiveValue::Set(input.description);
        offer_am.discount = ActiveValue::Set(input.discount);
        offer_am.image_url = ActiveValue::Set(input.image_url);
        offer_am.start_date = ActiveValue::Set(input.start_date);
        offer_am.end_date = ActiveValue::Set(input.end_date);
        offer_am.is_active = ActiveValue::Set(input.is_active);
        offer_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(offer_am.update(self.db).await?))
    }

    /// Deletes an offer
    ///
    /// Returns OK regardless of the offer existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Offer::delete_by_id(id).exec(self.db).await
    }
}
