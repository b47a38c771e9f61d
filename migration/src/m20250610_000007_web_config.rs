use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WebConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(WebConfig::Id))
                    .col(string_uniq(WebConfig::ConfigName))
                    .col(json(WebConfig::ConfigValue))
                    .col(timestamp(WebConfig::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WebConfig::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WebConfig {
    Table,
    Id,
    ConfigName,
    ConfigValue,
    UpdatedAt,
}
