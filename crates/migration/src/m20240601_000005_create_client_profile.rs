//! Create `client_profile` table with a one-to-one FK to `user`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClientProfile::Table)
                    .if_not_exists()
                    .col(uuid(ClientProfile::Id).primary_key())
                    .col(uuid(ClientProfile::UserId).unique_key().not_null())
                    .col(string_len(ClientProfile::CompanyName, 255).not_null())
                    .col(string_len(ClientProfile::ContactPhone, 20).not_null())
                    .col(string_len(ClientProfile::Location, 255).not_null())
                    .col(timestamp_with_time_zone(ClientProfile::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(ClientProfile::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_profile_user")
                            .from(ClientProfile::Table, ClientProfile::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ClientProfile::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ClientProfile { Table, Id, UserId, CompanyName, ContactPhone, Location, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }
