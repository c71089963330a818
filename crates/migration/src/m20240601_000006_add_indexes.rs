use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // List endpoints order by created_at
        manager
            .create_index(
                Index::create()
                    .name("idx_user_created_at")
                    .table(User::Table)
                    .col(User::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_service_created_at")
                    .table(Service::Table)
                    .col(Service::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contractor_profile_created_at")
                    .table(ContractorProfile::Table)
                    .col(ContractorProfile::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_client_profile_created_at")
                    .table(ClientProfile::Table)
                    .col(ClientProfile::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Join table: reverse lookup by service
        manager
            .create_index(
                Index::create()
                    .name("idx_cps_service")
                    .table(ContractorProfileService::Table)
                    .col(ContractorProfileService::ServiceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_index(Index::drop().name("idx_cps_service").table(ContractorProfileService::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_client_profile_created_at").table(ClientProfile::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_contractor_profile_created_at").table(ContractorProfile::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_service_created_at").table(Service::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_user_created_at").table(User::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum User { Table, CreatedAt }

#[derive(DeriveIden)]
enum Service { Table, CreatedAt }

#[derive(DeriveIden)]
enum ContractorProfile { Table, CreatedAt }

#[derive(DeriveIden)]
enum ClientProfile { Table, CreatedAt }

#[derive(DeriveIden)]
enum ContractorProfileService { Table, ServiceId }
