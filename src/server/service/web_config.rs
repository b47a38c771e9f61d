use sea_orm::DatabaseConnection;

use crate::{
    model::web_config::WebConfigEntryDto,
    server::{
        data::web_config::WebConfigRepository,
        error::{content::ContentError, Error},
        model::db::WebConfigModel,
    },
};

impl From<WebConfigModel> for WebConfigEntryDto {
    fn from(entry: WebConfigModel) -> Self {
        Self {
            config_name: entry.config_name,
            config_value: entry.config_value,
        }
    }
}

pub struct WebConfigService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WebConfigService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<WebConfigEntryDto>, Error> {
        let entries = WebConfigRepository::new(self.db).get_all().await?;

        Ok(entries.into_iter().map(WebConfigEntryDto::from).collect())
    }

    /// Upserts every entry by name and returns the stored rows
    pub async fn upsert(
        &self,
        entries: Vec<WebConfigEntryDto>,
    ) -> Result<Vec<WebConfigEntryDto>, Error> {
        if entries.iter().any(|e| e.config_name.trim().is_empty()) {
            return Err(ContentError::EmptyField("config_name").into());
        }

        let stored = WebConfigRepository::new(self.db)
            .upsert_many(
                entries
                    .into_iter()
                    .map(|e| (e.config_name.trim().to_string(), e.config_value))
                    .collect(),
            )
            .await?;

        Ok(stored.into_iter().map(WebConfigEntryDto::from).collect())
    }
}
