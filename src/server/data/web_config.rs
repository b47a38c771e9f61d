use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};
use serde_json::Value;

pub struct WebConfigRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WebConfigRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::web_config::Model>, DbErr> {
        entity::prelude::WebConfig::find()
            .order_by_asc(entity::web_config::Column::ConfigName)
            .all(self.db)
            .await
    }

    /// Inserts each entry or replaces the value stored under its name
    pub async fn upsert_many(
        &self,
        entries: Vec<(String, Value)>,
    ) -> Result<Vec<entity::web_config::Model>, DbErr> {
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let entries = entries
            .into_iter()
            .map(|(config_name, config_value)| entity::web_config::ActiveModel {
                config_name: ActiveValue::Set(config_name),
                config_value: ActiveValue::Set(config_value),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::WebConfig::insert_many(entries)
            .on_conflict(
                OnConflict::column(entity::web_config::Column::ConfigName)
                    .update_columns([
                        entity::web_config::Column::ConfigValue,
                        entity::web_config::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod upsert_many_tests {
        use miaclub_test_utils::prelude::*;
        use serde_json::json;

        use crate::server::data::web_config::WebConfigRepository;

        /// Expect existing names to be replaced and new names to be added
        #[tokio::test]
        async fn test_upsert_replaces_by_name() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::WebConfig)?;
            test.content()
                .insert_config("site_title", json!("Antiguo"))
                .await?;
            let repo = WebConfigRepository::new(&test.db);

            repo.upsert_many(vec![
                ("site_title".to_string(), json!("Nuevo")),
                ("primary_color".to_string(), json!("#000000")),
            ])
            .await?;
            repo.upsert_many(vec![("primary_color".to_string(), json!("#111111"))])
                .await?;

            let entries = repo.get_all().await?;
            let pairs: Vec<(&str, &serde_json::Value)> = entries
                .iter()
                .map(|e| (e.config_name.as_str(), &e.config_value))
                .collect();
            assert_eq!(
                pairs,
                vec![
                    ("primary_color", &json!("#111111")),
                    ("site_title", &json!("Nuevo")),
                ]
            );

            Ok(())
        }

        /// Expect no query for an empty batch
        #[tokio::test]
        async fn test_upsert_empty() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let result = WebConfigRepository::new(&test.db).upsert_many(Vec::new()).await?;

            assert!(result.is_empty());

            Ok(())
        }
    }
}
