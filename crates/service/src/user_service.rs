use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use models::{client_profile, contractor_profile, contractor_profile_service, errors::FieldErrors, user};
use crate::errors::ServiceError;
use crate::input::{optional, required, trimmed};
use crate::pagination::{fetch_page, Page, Pagination};
use crate::representation::UserRepr;
use crate::resource::Resource;

/// Write payload for users.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInput {
    #[serde(default, deserialize_with = "trimmed")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "trimmed")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "trimmed")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "trimmed")]
    pub last_name: Option<String>,
}

async fn username_taken<C: ConnectionTrait>(db: &C, username: &str, except: Option<Uuid>) -> Result<bool, ServiceError> {
    let mut q = user::Entity::find().filter(user::Column::Username.eq(username));
    if let Some(id) = except {
        q = q.filter(user::Column::Id.ne(id));
    }
    Ok(q.one(db).await?.is_some())
}

async fn resolve_fields<C: ConnectionTrait>(
    db: &C,
    input: UserInput,
    existing: Option<&user::Model>,
    partial: bool,
) -> Result<user::Fields, ServiceError> {
    let current = existing.filter(|_| partial);
    let mut errs = FieldErrors::new();

    let username = required(&mut errs, "username", input.username, current.map(|m| m.username.clone()));
    let fields = user::Fields {
        username: username.unwrap_or_default(),
        email: optional(input.email, current.map(|m| m.email.clone())),
        first_name: optional(input.first_name, current.map(|m| m.first_name.clone())),
        last_name: optional(input.last_name, current.map(|m| m.last_name.clone())),
    };
    errs.merge_new_fields(fields.check());

    if !errs.contains("username") && username_taken(db, &fields.username, existing.map(|m| m.id)).await? {
        errs.add("username", "a user with that username already exists");
    }
    errs.into_result()?;
    Ok(fields)
}

/// Create a user.
#[instrument(skip_all)]
pub async fn create_user(db: &DatabaseConnection, input: UserInput) -> Result<UserRepr, ServiceError> {
    let fields = resolve_fields(db, input, None, false).await?;
    let created = user::create(db, fields).await?;
    info!(id = %created.id, username = %created.username, "created user");
    Ok(created.into())
}

/// Get a user by id.
pub async fn get_user(db: &DatabaseConnection, id: Uuid) -> Result<UserRepr, ServiceError> {
    let found = user::Entity::find_by_id(id).one(db).await?.ok_or_else(|| ServiceError::not_found("user"))?;
    Ok(found.into())
}

/// List users, oldest first.
pub async fn list_users(db: &DatabaseConnection, opts: Pagination) -> Result<Page<UserRepr>, ServiceError> {
    let select = user::Entity::find()
        .order_by_asc(user::Column::CreatedAt)
        .order_by_asc(user::Column::Id);
    Ok(fetch_page(db, select, opts).await?.map(UserRepr::from))
}

/// Replace (`partial = false`) or patch a user.
#[instrument(skip(db, input))]
pub async fn update_user(db: &DatabaseConnection, id: Uuid, input: UserInput, partial: bool) -> Result<UserRepr, ServiceError> {
    let existing = user::Entity::find_by_id(id).one(db).await?.ok_or_else(|| ServiceError::not_found("user"))?;
    let fields = resolve_fields(db, input, Some(&existing), partial).await?;
    let updated = user::update(db, existing, fields).await?;
    info!(id = %updated.id, "updated user");
    Ok(updated.into())
}

/// Delete a user together with any profiles that reference it.
#[instrument(skip(db))]
pub async fn delete_user(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    if user::Entity::find_by_id(id).one(&txn).await?.is_none() {
        return Err(ServiceError::not_found("user"));
    }

    let contractor_ids: Vec<Uuid> = contractor_profile::Entity::find()
        .select_only()
        .column(contractor_profile::Column::Id)
        .filter(contractor_profile::Column::UserId.eq(id))
        .into_tuple()
        .all(&txn)
        .await?;
    for pid in &contractor_ids {
        contractor_profile_service::delete_for_profile(&txn, *pid).await?;
    }
    contractor_profile::Entity::delete_many()
        .filter(contractor_profile::Column::UserId.eq(id))
        .exec(&txn)
        .await?;
    client_profile::Entity::delete_many()
        .filter(client_profile::Column::UserId.eq(id))
        .exec(&txn)
        .await?;
    user::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    info!(%id, contractor_profiles = contractor_ids.len(), "deleted user");
    Ok(())
}

/// SeaORM-backed user viewset.
#[derive(Clone)]
pub struct UserResource {
    db: DatabaseConnection,
}

impl UserResource {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl Resource for UserResource {
    const NAME: &'static str = "user";
    type Input = UserInput;
    type Repr = UserRepr;
    type Filter = ();

    async fn list(&self, page: Pagination, _filter: ()) -> Result<Page<UserRepr>, ServiceError> { list_users(&self.db, page).await }

    async fn retrieve(&self, id: Uuid) -> Result<UserRepr, ServiceError> { get_user(&self.db, id).await }

    async fn create(&self, input: UserInput) -> Result<UserRepr, ServiceError> { create_user(&self.db, input).await }

    async fn update(&self, id: Uuid, input: UserInput, partial: bool) -> Result<UserRepr, ServiceError> {
        update_user(&self.db, id, input, partial).await
    }

    async fn destroy(&self, id: Uuid) -> Result<(), ServiceError> { delete_user(&self.db, id).await }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, unique};

    fn input(username: &str) -> UserInput {
        UserInput {
            username: Some(username.to_string()),
            email: Some(format!("{username}@example.com")),
            first_name: Some("Dana".into()),
            last_name: Some("Lee".into()),
        }
    }

    #[tokio::test]
    async fn user_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let name = unique("svc_user");
        let u = create_user(&db, input(&name)).await?;
        assert_eq!(u.username, name);
        assert_eq!(u.email, format!("{name}@example.com"));

        let found = get_user(&db, u.id).await?;
        assert_eq!(found, u);

        let patched = update_user(&db, u.id, UserInput { last_name: Some("Park".into()), ..Default::default() }, true).await?;
        assert_eq!(patched.last_name, "Park");
        assert_eq!(patched.first_name, "Dana");

        // full replace clears optional fields that were left out
        let replaced = update_user(&db, u.id, UserInput { username: Some(name.clone()), ..Default::default() }, false).await?;
        assert_eq!(replaced.first_name, "");
        assert_eq!(replaced.email, "");

        delete_user(&db, u.id).await?;
        assert!(matches!(get_user(&db, u.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(delete_user(&db, u.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn create_requires_username() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = create_user(&db, UserInput { email: Some("bad".into()), ..Default::default() }).await.unwrap_err();
        let fields = err.field_errors().expect("validation error");
        assert!(fields.contains("username"));
        assert!(fields.contains("email"));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_username_is_a_field_error() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let name = unique("dup");
        let first = create_user(&db, input(&name)).await?;
        let err = create_user(&db, input(&name)).await.unwrap_err();
        assert!(err.field_errors().is_some_and(|f| f.contains("username")));

        // renaming a user to its own name is fine
        update_user(&db, first.id, input(&name), false).await?;
        Ok(())
    }

    #[tokio::test]
    async fn list_is_paginated() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        for _ in 0..3 {
            create_user(&db, input(&unique("page"))).await?;
        }
        let page1 = list_users(&db, Pagination { page: 1, per_page: 2 }).await?;
        assert_eq!(page1.count, 3);
        assert_eq!(page1.results.len(), 2);
        let page2 = list_users(&db, Pagination { page: 2, per_page: 2 }).await?;
        assert_eq!(page2.results.len(), 1);
        assert!(page1.results.iter().all(|u| u.id != page2.results[0].id));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = update_user(&db, Uuid::new_v4(), input("ghost"), true).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }
}
