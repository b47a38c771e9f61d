use sea_orm_migration::{prelude::*, schema::*};

static IDX_BANNER_ORDER_INDEX: &str = "idx-banner-order_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Banner::Table)
                    .if_not_exists()
                    .col(pk_auto(Banner::Id))
                    .col(string(Banner::Title))
                    .col(string_null(Banner::Subtitle))
                    .col(string_null(Banner::LinkUrl))
                    .col(string_null(Banner::ImageUrl))
                    .col(integer(Banner::OrderIndex))
                    .col(boolean(Banner::IsActive))
                    .col(timestamp(Banner::CreatedAt))
                    .col(timestamp(Banner::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BANNER_ORDER_INDEX)
                    .table(Banner::Table)
                    .col(Banner::OrderIndex)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BANNER_ORDER_INDEX)
                    .table(Banner::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Banner::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Banner {
    Table,
    Id,
    Title,
    Subtitle,
    LinkUrl,
    ImageUrl,
    OrderIndex,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
