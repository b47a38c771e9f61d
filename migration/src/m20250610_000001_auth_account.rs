use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthAccount::Table)
                    .if_not_exists()
                    .col(pk_uuid(AuthAccount::Id))
                    .col(string_uniq(AuthAccount::Email))
                    .col(string(AuthAccount::PasswordHash))
                    .col(string_null(AuthAccount::RecoveryToken))
                    .col(timestamp_null(AuthAccount::RecoverySentAt))
                    .col(timestamp_null(AuthAccount::LastSignInAt))
                    .col(timestamp(AuthAccount::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuthAccount::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AuthAccount {
    Table,
    Id,
    Email,
    PasswordHash,
    RecoveryToken,
    RecoverySentAt,
    LastSignInAt,
    CreatedAt,
}
