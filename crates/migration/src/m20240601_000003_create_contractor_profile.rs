//! Create `contractor_profile` table with a one-to-one FK to `user`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContractorProfile::Table)
                    .if_not_exists()
                    .col(uuid(ContractorProfile::Id).primary_key())
                    .col(uuid(ContractorProfile::UserId).unique_key().not_null())
                    .col(text(ContractorProfile::Bio).not_null())
                    .col(string_len(ContractorProfile::Location, 255).not_null())
                    .col(double(ContractorProfile::HourlyRate).not_null())
                    .col(string_len_null(ContractorProfile::PortfolioLink, 200))
                    .col(timestamp_with_time_zone(ContractorProfile::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(ContractorProfile::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contractor_profile_user")
                            .from(ContractorProfile::Table, ContractorProfile::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ContractorProfile::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ContractorProfile {
    Table,
    Id,
    UserId,
    Bio,
    Location,
    HourlyRate,
    PortfolioLink,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum User { Table, Id }
