use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::banner::BannerInputDto;

pub struct BannerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BannerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Banners in carousel order, optionally only the active ones
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<entity::banner::Model>, DbErr> {
        let mut query = entity::prelude::Banner::find();
        if active_only {
            query = query.filter(entity::banner::Column::IsActive.eq(true));
        }

        query
            .order_by_asc(entity::banner::Column::OrderIndex)
            .order_by_asc(entity::banner::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::banner::Model>, DbErr> {
        entity::prelude::Banner::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, input: BannerInputDto) -> Result<entity::banner::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let banner = entity::banner::ActiveModel {
            title: ActiveValue::Set(input.title),
            subtitle: ActiveValue::Set(input.subtitle),
            link_url: ActiveValue::Set(input.link_url),
            image_url: ActiveValue::Set(input.image_url),
            order_index: ActiveValue::Set(input.order_index),
            is_active: ActiveValue::Set(input.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        banner.insert(self.db).await
    }

    pub async fn update(
        &self,
        id: i32,
        input: BannerInputDto,
    ) -> Result<Option<entity::banner::Model>, DbErr> {
        let Some(banner) = entity::prelude::Banner::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut banner_am = banner.into_active_model();
        banner_am.title = ActiveValue::Set(input.title);
        banner_am.subtitle = ActiveValue::Set(input.subtitle);
        banner_am.link_url = ActiveValue::Set(input.link_url);
        banner_am.image_url = ActiveValue::Set(input.image_url);
        banner_am.order_index = ActiveValue::Set(input.order_index);
        banner_am.is_active = ActiveValue::Set(input.is_active);
        banner_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(banner_am.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Banner::delete_by_id(id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    mod get_all_tests {
        use miaclub_test_utils::prelude::*;

        use crate::server::data::banner::BannerRepository;

        /// Expect ascending order index regardless of insertion order
        #[tokio::test]
        async fn test_get_all_orders_by_order_index() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Banner)?;
            let content = test.content();
            content.insert_banner("Tercero", 3, true).await?;
            content.insert_banner("Primero", 1, true).await?;
            content.insert_banner("Segundo", 2, false).await?;

            let banners = BannerRepository::new(&test.db).get_all(false).await?;

            let titles: Vec<&str> = banners.iter().map(|b| b.title.as_str()).collect();
            assert_eq!(titles, vec!["Primero", "Segundo", "Tercero"]);

            Ok(())
        }

        /// Expect inactive banners to be left out when only active ones are requested
        #[tokio::test]
        async fn test_get_all_active_only() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Banner)?;
            let content = test.content();
            content.insert_banner("Visible", 2, true).await?;
            content.insert_banner("Oculto", 1, false).await?;

            let banners = BannerRepository::new(&test.db).get_all(true).await?;

            assert_eq!(banners.len(), 1);
            assert_eq!(banners[0].title, "Visible");

            Ok(())
        }
    }

    mod create_tests {
        use miaclub_test_utils::prelude::*;

        use crate::{model::banner::BannerInputDto, server::data::banner::BannerRepository};

        #[tokio::test]
        async fn test_create_banner_success() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Banner)?;

            let banner = BannerRepository::new(&test.db)
                .create(BannerInputDto {
                    title: "Verano".to_string(),
                    subtitle: Some("Hasta 50%".to_string()),
                    link_url: None,
                    image_url: None,
                    order_index: 4,
                    is_active: true,
                })
                .await?;

            assert_eq!(banner.order_index, 4);
            assert_eq!(banner.subtitle.as_deref(), Some("Hasta 50%"));

            Ok(())
        }
    }
}
