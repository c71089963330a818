//! Generic handler bodies shared by every resource collection.
//!
//! The concrete handlers in the sibling modules only unwrap their extractors
//! and forward here, so status codes and logging stay identical across
//! resources.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use service::pagination::{Page, Pagination, DEFAULT_PER_PAGE};
use service::Resource;

use crate::errors::JsonApiError;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page number
    pub page: Option<u32>,
    /// Page size, clamped to 1..=100
    pub per_page: Option<u32>,
}

impl From<ListQuery> for Pagination {
    fn from(q: ListQuery) -> Self {
        Pagination { page: q.page.unwrap_or(1), per_page: q.per_page.unwrap_or(DEFAULT_PER_PAGE) }
    }
}

/// `filter` is whatever narrowing the collection supports, `()` when none.
pub async fn list<R: Resource>(
    resource: &R,
    query: Result<Query<ListQuery>, QueryRejection>,
    filter: R::Filter,
) -> Result<Json<Page<R::Repr>>, JsonApiError> {
    let Query(q) = query?;
    let page = resource.list(q.into(), filter).await?;
    info!(resource = R::NAME, count = page.count, page = page.page, "list");
    Ok(Json(page))
}

pub async fn create<R: Resource>(
    resource: &R,
    body: Result<Json<R::Input>, JsonRejection>,
) -> Result<(StatusCode, Json<R::Repr>), JsonApiError> {
    let Json(input) = body?;
    let created = resource.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn retrieve<R: Resource>(
    resource: &R,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<R::Repr>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(resource.retrieve(id).await?))
}

/// PUT when `partial` is false, PATCH otherwise.
pub async fn update<R: Resource>(
    resource: &R,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<R::Input>, JsonRejection>,
    partial: bool,
) -> Result<Json<R::Repr>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = body?;
    Ok(Json(resource.update(id, input, partial).await?))
}

pub async fn destroy<R: Resource>(
    resource: &R,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    resource.destroy(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
