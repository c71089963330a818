use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use service::client_service::ClientProfileInput;
use service::pagination::Page;
use service::representation::ClientProfileRepr;

use crate::errors::JsonApiError;
use crate::routes::viewset::{self, ListQuery};
use crate::routes::ServerState;

#[utoipa::path(
    get, path = "/api/client-profiles", tag = "client-profiles",
    params(ListQuery),
    responses((status = 200, description = "Paginated client profiles", body = crate::openapi::ClientProfilePageDoc))
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Page<ClientProfileRepr>>, JsonApiError> {
    viewset::list(state.clients.as_ref(), query, ()).await
}

#[utoipa::path(
    post, path = "/api/client-profiles", tag = "client-profiles",
    request_body = crate::openapi::ClientProfileInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ClientProfileDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<ClientProfileInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ClientProfileRepr>), JsonApiError> {
    viewset::create(state.clients.as_ref(), body).await
}

#[utoipa::path(
    get, path = "/api/client-profiles/{id}", tag = "client-profiles",
    params(("id" = Uuid, Path, description = "Client profile id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::ClientProfileDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn retrieve(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ClientProfileRepr>, JsonApiError> {
    viewset::retrieve(state.clients.as_ref(), id).await
}

#[utoipa::path(
    put, path = "/api/client-profiles/{id}", tag = "client-profiles",
    params(("id" = Uuid, Path, description = "Client profile id")),
    request_body = crate::openapi::ClientProfileInputDoc,
    responses(
        (status = 200, description = "Replaced", body = crate::openapi::ClientProfileDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<ClientProfileInput>, JsonRejection>,
) -> Result<Json<ClientProfileRepr>, JsonApiError> {
    viewset::update(state.clients.as_ref(), id, body, false).await
}

#[utoipa::path(
    patch, path = "/api/client-profiles/{id}", tag = "client-profiles",
    params(("id" = Uuid, Path, description = "Client profile id")),
    request_body = crate::openapi::ClientProfileInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ClientProfileDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn patch(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<ClientProfileInput>, JsonRejection>,
) -> Result<Json<ClientProfileRepr>, JsonApiError> {
    viewset::update(state.clients.as_ref(), id, body, true).await
}

#[utoipa::path(
    delete, path = "/api/client-profiles/{id}", tag = "client-profiles",
    params(("id" = Uuid, Path, description = "Client profile id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn destroy(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    viewset::destroy(state.clients.as_ref(), id).await
}
