use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Benefit::Table)
                    .if_not_exists()
                    .col(pk_auto(Benefit::Id))
                    .col(string(Benefit::Title))
                    .col(text(Benefit::Description))
                    .col(string_null(Benefit::ImageUrl))
                    .col(boolean(Benefit::IsActive))
                    .col(timestamp(Benefit::CreatedAt))
                    .col(timestamp(Benefit::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Benefit::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Benefit {
    Table,
    Id,
    Title,
    Description,
    ImageUrl,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
