use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, EntityTrait};
use serde_json::Value;

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn content(&self) -> ContentFixtures<'_> {
        ContentFixtures { test: self }
    }
}

pub struct ContentFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> ContentFixtures<'a> {
    /// Active offer starting a month before `end_date`
    pub async fn insert_offer(
        &self,
        title: &str,
        end_date: NaiveDate,
    ) -> Result<entity::offer::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Offer::insert(entity::offer::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(format!("{} description", title)),
            discount: ActiveValue::Set("20% OFF".to_string()),
            image_url: ActiveValue::Set(None),
            start_date: ActiveValue::Set(end_date - chrono::Duration::days(30)),
            end_date: ActiveValue::Set(end_date),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_event(
        &self,
        title: &str,
        event_date: NaiveDate,
    ) -> Result<entity::event::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Event::insert(entity::event::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(format!("{} description", title)),
            event_date: ActiveValue::Set(event_date),
            event_time: ActiveValue::Set(None),
            location: ActiveValue::Set("Lima".to_string()),
            image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_banner(
        &self,
        title: &str,
        order_index: i32,
        is_active: bool,
    ) -> Result<entity::banner::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Banner::insert(entity::banner::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            subtitle: ActiveValue::Set(None),
            link_url: ActiveValue::Set(None),
            image_url: ActiveValue::Set(None),
            order_index: ActiveValue::Set(order_index),
            is_active: ActiveValue::Set(is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_benefit(
        &self,
        title: &str,
        is_active: bool,
    ) -> Result<entity::benefit::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Benefit::insert(entity::benefit::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(format!("{} description", title)),
            image_url: ActiveValue::Set(None),
            is_active: ActiveValue::Set(is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_config(
        &self,
        config_name: &str,
        config_value: Value,
    ) -> Result<entity::web_config::Model, TestError> {
        Ok(
            entity::prelude::WebConfig::insert(entity::web_config::ActiveModel {
                config_name: ActiveValue::Set(config_name.to_string()),
                config_value: ActiveValue::Set(config_value),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
