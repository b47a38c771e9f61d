use sea_orm_migration::{prelude::*, schema::*};

static IDX_OFFER_END_DATE: &str = "idx-offer-end_date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Offer::Table)
                    .if_not_exists()
                    .col(pk_auto(Offer::Id))
                    .col(string(Offer::Title))
                    .col(text(Offer::Description))
                    .col(string(Offer::Discount))
                    .col(string_null(Offer::ImageUrl))
                    .col(date(Offer::StartDate))
                    .col(date(Offer::EndDate))
                    .col(boolean(Offer::IsActive))
                    .col(timestamp(Offer::CreatedAt))
                    .col(timestamp(Offer::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OFFER_END_DATE)
                    .table(Offer::Table)
                    .col(Offer::EndDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OFFER_END_DATE)
                    .table(Offer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Offer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Offer {
    Table,
    Id,
    Title,
    Description,
    Discount,
    ImageUrl,
    StartDate,
    EndDate,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
