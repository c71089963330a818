//! Create `contractor_profile_service` join table.
//!
//! Many-to-many link between contractor profiles and the services they offer;
//! rows go away with either side.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContractorProfileService::Table)
                    .if_not_exists()
                    .col(uuid(ContractorProfileService::ContractorProfileId).not_null())
                    .col(uuid(ContractorProfileService::ServiceId).not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_contractor_profile_service")
                            .col(ContractorProfileService::ContractorProfileId)
                            .col(ContractorProfileService::ServiceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cps_contractor_profile")
                            .from(ContractorProfileService::Table, ContractorProfileService::ContractorProfileId)
                            .to(ContractorProfile::Table, ContractorProfile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cps_service")
                            .from(ContractorProfileService::Table, ContractorProfileService::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ContractorProfileService::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ContractorProfileService { Table, ContractorProfileId, ServiceId }

#[derive(DeriveIden)]
enum ContractorProfile { Table, Id }

#[derive(DeriveIden)]
enum Service { Table, Id }
