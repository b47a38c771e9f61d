use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::model::event::EventInputDto;

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All events, most recent date first
    pub async fn get_all(&self) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .order_by_desc(entity::event::Column::EventDate)
            .order_by_desc(entity::event::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, input: EventInputDto) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let event = entity::event::ActiveModel {
            title: ActiveValue::Set(input.title),
            description: ActiveValue::Set(input.description),
            event_date: ActiveValue::Set(input.event_date),
            event_time: ActiveValue::Set(input.event_time),
            location: ActiveValue::Set(input.location),
            image_url: ActiveValue::Set(input.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        event.insert(self.db).await
    }

    pub async fn update(
        &self,
        id: i32,
        input: EventInputDto,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        let Some(event) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut event_am = event.into_active_model();
        event_am.title = ActiveValue::Set(input.title);
        event_am.description = ActiveValue::Set(input.description);
        event_am.event_date = ActiveValue::Set(input.event_date);
        event_am.event_time = ActiveValue::Set(input.event_time);
        event_am.location = ActiveValue::Set(input.location);
        event_am.image_url = ActiveValue::Set(input.image_url);
        event_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(event_am.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Event::delete_by_id(id).exec(self.db).await
    }
}
