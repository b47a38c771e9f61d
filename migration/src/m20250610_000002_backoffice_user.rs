use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250610_000001_auth_account::AuthAccount;

static IDX_BACKOFFICE_USER_EMAIL: &str = "idx-backoffice_user-email";
static FK_BACKOFFICE_USER_ID: &str = "fk-backoffice_user-id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BackofficeUser::Table)
                    .if_not_exists()
                    .col(pk_uuid(BackofficeUser::Id))
                    .col(string(BackofficeUser::Email))
                    .col(string(BackofficeUser::Role))
                    .col(boolean(BackofficeUser::IsActive))
                    .col(timestamp(BackofficeUser::CreatedAt))
                    .col(timestamp(BackofficeUser::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BACKOFFICE_USER_ID)
                            .from_tbl(BackofficeUser::Table)
                            .from_col(BackofficeUser::Id)
                            .to_tbl(AuthAccount::Table)
                            .to_col(AuthAccount::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BACKOFFICE_USER_EMAIL)
                    .table(BackofficeUser::Table)
                    .col(BackofficeUser::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BACKOFFICE_USER_EMAIL)
                    .table(BackofficeUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BackofficeUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BackofficeUser {
    Table,
    Id,
    Email,
    Role,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
