use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use service::contractor_service::{ContractorProfileFilter, ContractorProfileInput};
use service::pagination::Page;
use service::representation::ContractorProfileRepr;

use crate::errors::JsonApiError;
use crate::routes::viewset::{self, ListQuery};
use crate::routes::ServerState;

/// Discovery filters; shares the query string with `ListQuery`.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContractorFilterQuery {
    /// Only profiles offering this service id
    pub service: Option<Uuid>,
    /// Case-insensitive substring of the location
    pub location: Option<String>,
    /// Case-insensitive substring of the bio, owner's username or name, or an offered service name
    pub search: Option<String>,
}

impl From<ContractorFilterQuery> for ContractorProfileFilter {
    fn from(q: ContractorFilterQuery) -> Self {
        ContractorProfileFilter { service: q.service, location: q.location, search: q.search }
    }
}

#[utoipa::path(
    get, path = "/api/contractor-profiles", tag = "contractor-profiles",
    params(ListQuery, ContractorFilterQuery),
    responses(
        (status = 200, description = "Paginated contractor profiles", body = crate::openapi::ContractorProfilePageDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
    filter: Result<Query<ContractorFilterQuery>, QueryRejection>,
) -> Result<Json<Page<ContractorProfileRepr>>, JsonApiError> {
    let Query(filter) = filter?;
    viewset::list(state.contractors.as_ref(), query, filter.into()).await
}

#[utoipa::path(
    post, path = "/api/contractor-profiles", tag = "contractor-profiles",
    request_body = crate::openapi::ContractorProfileInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ContractorProfileDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<ContractorProfileInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ContractorProfileRepr>), JsonApiError> {
    viewset::create(state.contractors.as_ref(), body).await
}

#[utoipa::path(
    get, path = "/api/contractor-profiles/{id}", tag = "contractor-profiles",
    params(("id" = Uuid, Path, description = "Contractor profile id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::ContractorProfileDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn retrieve(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ContractorProfileRepr>, JsonApiError> {
    viewset::retrieve(state.contractors.as_ref(), id).await
}

/// Omitting `service_ids` clears the offered services.
#[utoipa::path(
    put, path = "/api/contractor-profiles/{id}", tag = "contractor-profiles",
    params(("id" = Uuid, Path, description = "Contractor profile id")),
    request_body = crate::openapi::ContractorProfileInputDoc,
    responses(
        (status = 200, description = "Replaced", body = crate::openapi::ContractorProfileDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<ContractorProfileInput>, JsonRejection>,
) -> Result<Json<ContractorProfileRepr>, JsonApiError> {
    viewset::update(state.contractors.as_ref(), id, body, false).await
}

#[utoipa::path(
    patch, path = "/api/contractor-profiles/{id}", tag = "contractor-profiles",
    params(("id" = Uuid, Path, description = "Contractor profile id")),
    request_body = crate::openapi::ContractorProfileInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ContractorProfileDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn patch(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<ContractorProfileInput>, JsonRejection>,
) -> Result<Json<ContractorProfileRepr>, JsonApiError> {
    viewset::update(state.contractors.as_ref(), id, body, true).await
}

#[utoipa::path(
    delete, path = "/api/contractor-profiles/{id}", tag = "contractor-profiles",
    params(("id" = Uuid, Path, description = "Contractor profile id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn destroy(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    viewset::destroy(state.contractors.as_ref(), id).await
}
