use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use service::catalog_service::ServiceInput;
use service::pagination::Page;
use service::representation::ServiceRepr;

use crate::errors::JsonApiError;
use crate::routes::viewset::{self, ListQuery};
use crate::routes::ServerState;

#[utoipa::path(
    get, path = "/api/services", tag = "services",
    params(ListQuery),
    responses((status = 200, description = "Paginated services", body = crate::openapi::ServicePageDoc))
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Page<ServiceRepr>>, JsonApiError> {
    viewset::list(state.services.as_ref(), query, ()).await
}

#[utoipa::path(
    post, path = "/api/services", tag = "services",
    request_body = crate::openapi::ServiceInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ServiceDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<ServiceInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ServiceRepr>), JsonApiError> {
    viewset::create(state.services.as_ref(), body).await
}

#[utoipa::path(
    get, path = "/api/services/{id}", tag = "services",
    params(("id" = Uuid, Path, description = "Service id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::ServiceDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn retrieve(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ServiceRepr>, JsonApiError> {
    viewset::retrieve(state.services.as_ref(), id).await
}

#[utoipa::path(
    put, path = "/api/services/{id}", tag = "services",
    params(("id" = Uuid, Path, description = "Service id")),
    request_body = crate::openapi::ServiceInputDoc,
    responses(
        (status = 200, description = "Replaced", body = crate::openapi::ServiceDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<ServiceInput>, JsonRejection>,
) -> Result<Json<ServiceRepr>, JsonApiError> {
    viewset::update(state.services.as_ref(), id, body, false).await
}

#[utoipa::path(
    patch, path = "/api/services/{id}", tag = "services",
    params(("id" = Uuid, Path, description = "Service id")),
    request_body = crate::openapi::ServiceInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ServiceDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn patch(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<ServiceInput>, JsonRejection>,
) -> Result<Json<ServiceRepr>, JsonApiError> {
    viewset::update(state.services.as_ref(), id, body, true).await
}

/// Contractor profiles that offered the service simply lose it.
#[utoipa::path(
    delete, path = "/api/services/{id}", tag = "services",
    params(("id" = Uuid, Path, description = "Service id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn destroy(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    viewset::destroy(state.services.as_ref(), id).await
}
