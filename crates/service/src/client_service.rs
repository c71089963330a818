use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use models::{client_profile, errors::FieldErrors, user};
use crate::contractor_service::check_owner;
use crate::errors::ServiceError;
use crate::input::{optional, trimmed};
use crate::pagination::{fetch_page, Page, Pagination};
use crate::representation::ClientProfileRepr;
use crate::resource::Resource;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientProfileInput {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default, deserialize_with = "trimmed")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "trimmed")]
    pub contact_phone: Option<String>,
    #[serde(default, deserialize_with = "trimmed")]
    pub location: Option<String>,
}

async fn has_client_profile<C: ConnectionTrait>(db: &C, user_id: Option<Uuid>) -> Result<bool, ServiceError> {
    let Some(user_id) = user_id else { return Ok(false) };
    let found = client_profile::Entity::find()
        .filter(client_profile::Column::UserId.eq(user_id))
        .one(db)
        .await?;
    Ok(found.is_some())
}

async fn resolve_fields<C: ConnectionTrait>(
    db: &C,
    input: ClientProfileInput,
    existing: Option<&client_profile::Model>,
    partial: bool,
) -> Result<client_profile::Fields, ServiceError> {
    let current = existing.filter(|_| partial);
    let mut errs = FieldErrors::new();

    let owner = check_owner(
        db,
        &mut errs,
        input.user_id,
        existing.map(|m| m.user_id),
        has_client_profile(db, input.user_id),
    )
    .await?;
    let fields = client_profile::Fields {
        user_id: owner.unwrap_or_default(),
        company_name: optional(input.company_name, current.map(|m| m.company_name.clone())),
        contact_phone: optional(input.contact_phone, current.map(|m| m.contact_phone.clone())),
        location: optional(input.location, current.map(|m| m.location.clone())),
    };
    errs.merge_new_fields(fields.check());
    errs.into_result()?;
    Ok(fields)
}

async fn hydrate<C: ConnectionTrait>(db: &C, profile: client_profile::Model) -> Result<ClientProfileRepr, ServiceError> {
    let owner = user::Entity::find_by_id(profile.user_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::Db(format!("owner {} of client profile {} is missing", profile.user_id, profile.id)))?;
    Ok(ClientProfileRepr::from_parts(profile, owner))
}

#[instrument(skip_all)]
pub async fn create_client_profile(db: &DatabaseConnection, input: ClientProfileInput) -> Result<ClientProfileRepr, ServiceError> {
    let fields = resolve_fields(db, input, None, false).await?;
    let created = client_profile::create(db, fields).await?;
    let repr = hydrate(db, created).await?;
    info!(id = %repr.id, user = %repr.user.id, "created client profile");
    Ok(repr)
}

pub async fn get_client_profile(db: &DatabaseConnection, id: Uuid) -> Result<ClientProfileRepr, ServiceError> {
    let found = client_profile::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("client_profile"))?;
    hydrate(db, found).await
}

pub async fn list_client_profiles(db: &DatabaseConnection, opts: Pagination) -> Result<Page<ClientProfileRepr>, ServiceError> {
    let select = client_profile::Entity::find()
        .order_by_asc(client_profile::Column::CreatedAt)
        .order_by_asc(client_profile::Column::Id);
    let page = fetch_page(db, select, opts).await?;

    let owner_ids: Vec<Uuid> = page.results.iter().map(|p| p.user_id).collect();
    let owners: HashMap<Uuid, user::Model> = if owner_ids.is_empty() {
        HashMap::new()
    } else {
        user::Entity::find()
            .filter(user::Column::Id.is_in(owner_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect()
    };

    let mut results = Vec::with_capacity(page.results.len());
    for profile in page.results {
        let owner = owners
            .get(&profile.user_id)
            .cloned()
            .ok_or_else(|| ServiceError::Db(format!("owner {} of client profile {} is missing", profile.user_id, profile.id)))?;
        results.push(ClientProfileRepr::from_parts(profile, owner));
    }
    Ok(Page { count: page.count, page: page.page, per_page: page.per_page, results })
}

#[instrument(skip(db, input))]
pub async fn update_client_profile(
    db: &DatabaseConnection,
    id: Uuid,
    input: ClientProfileInput,
    partial: bool,
) -> Result<ClientProfileRepr, ServiceError> {
    let existing = client_profile::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("client_profile"))?;
    let fields = resolve_fields(db, input, Some(&existing), partial).await?;
    let updated = client_profile::update(db, existing, fields).await?;
    info!(%id, "updated client profile");
    hydrate(db, updated).await
}

#[instrument(skip(db))]
pub async fn delete_client_profile(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let res = client_profile::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("client_profile"));
    }
    info!(%id, "deleted client profile");
    Ok(())
}

#[derive(Clone)]
pub struct ClientProfileResource {
    db: DatabaseConnection,
}

impl ClientProfileResource {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl Resource for ClientProfileResource {
    const NAME: &'static str = "client_profile";
    type Input = ClientProfileInput;
    type Repr = ClientProfileRepr;
    type Filter = ();

    async fn list(&self, page: Pagination, _filter: ()) -> Result<Page<ClientProfileRepr>, ServiceError> {
        list_client_profiles(&self.db, page).await
    }

    async fn retrieve(&self, id: Uuid) -> Result<ClientProfileRepr, ServiceError> { get_client_profile(&self.db, id).await }

    async fn create(&self, input: ClientProfileInput) -> Result<ClientProfileRepr, ServiceError> {
        create_client_profile(&self.db, input).await
    }

    async fn update(&self, id: Uuid, input: ClientProfileInput, partial: bool) -> Result<ClientProfileRepr, ServiceError> {
        update_client_profile(&self.db, id, input, partial).await
    }

    async fn destroy(&self, id: Uuid) -> Result<(), ServiceError> { delete_client_profile(&self.db, id).await }
}
