use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, TransactionTrait};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use models::{contractor_profile_service, errors::FieldErrors, service};
use crate::errors::ServiceError;
use crate::input::{optional, required, trimmed};
use crate::pagination::{fetch_page, Page, Pagination};
use crate::representation::ServiceRepr;
use crate::resource::Resource;

/// Write payload for catalog services.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceInput {
    #[serde(default, deserialize_with = "trimmed")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "trimmed")]
    pub description: Option<String>,
}

fn resolve_fields(input: ServiceInput, existing: Option<&service::Model>, partial: bool) -> Result<service::Fields, ServiceError> {
    let current = existing.filter(|_| partial);
    let mut errs = FieldErrors::new();
    let name = required(&mut errs, "name", input.name, current.map(|m| m.name.clone()));
    let fields = service::Fields {
        name: name.unwrap_or_default(),
        description: optional(input.description, current.map(|m| m.description.clone())),
    };
    errs.merge_new_fields(fields.check());
    errs.into_result()?;
    Ok(fields)
}

#[instrument(skip_all)]
pub async fn create_service(db: &DatabaseConnection, input: ServiceInput) -> Result<ServiceRepr, ServiceError> {
    let fields = resolve_fields(input, None, false)?;
    let created = service::create(db, fields).await?;
    info!(id = %created.id, name = %created.name, "created service");
    Ok(created.into())
}

pub async fn get_service(db: &DatabaseConnection, id: Uuid) -> Result<ServiceRepr, ServiceError> {
    let found = service::Entity::find_by_id(id).one(db).await?.ok_or_else(|| ServiceError::not_found("service"))?;
    Ok(found.into())
}

pub async fn list_services(db: &DatabaseConnection, opts: Pagination) -> Result<Page<ServiceRepr>, ServiceError> {
    let select = service::Entity::find()
        .order_by_asc(service::Column::CreatedAt)
        .order_by_asc(service::Column::Id);
    Ok(fetch_page(db, select, opts).await?.map(ServiceRepr::from))
}

#[instrument(skip(db, input))]
pub async fn update_service(db: &DatabaseConnection, id: Uuid, input: ServiceInput, partial: bool) -> Result<ServiceRepr, ServiceError> {
    let existing = service::Entity::find_by_id(id).one(db).await?.ok_or_else(|| ServiceError::not_found("service"))?;
    let fields = resolve_fields(input, Some(&existing), partial)?;
    let updated = service::update(db, existing, fields).await?;
    info!(id = %updated.id, "updated service");
    Ok(updated.into())
}

/// Delete a service and drop it from every contractor profile offering it.
#[instrument(skip(db))]
pub async fn delete_service(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    let unlinked = contractor_profile_service::delete_for_service(&txn, id).await?;
    let res = service::Entity::delete_by_id(id).exec(&txn).await?;
    if res.rows_affected == 0 {
        txn.rollback().await?;
        return Err(ServiceError::not_found("service"));
    }
    txn.commit().await?;
    info!(%id, unlinked, "deleted service");
    Ok(())
}

#[derive(Clone)]
pub struct ServiceResource {
    db: DatabaseConnection,
}

impl ServiceResource {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl Resource for ServiceResource {
    const NAME: &'static str = "service";
    type Input = ServiceInput;
    type Repr = ServiceRepr;
    type Filter = ();

    async fn list(&self, page: Pagination, _filter: ()) -> Result<Page<ServiceRepr>, ServiceError> { list_services(&self.db, page).await }

    async fn retrieve(&self, id: Uuid) -> Result<ServiceRepr, ServiceError> { get_service(&self.db, id).await }

    async fn create(&self, input: ServiceInput) -> Result<ServiceRepr, ServiceError> { create_service(&self.db, input).await }

    async fn update(&self, id: Uuid, input: ServiceInput, partial: bool) -> Result<ServiceRepr, ServiceError> {
        update_service(&self.db, id, input, partial).await
    }

    async fn destroy(&self, id: Uuid) -> Result<(), ServiceError> { delete_service(&self.db, id).await }
}
