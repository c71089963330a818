use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use service::pagination::Page;
use service::representation::UserRepr;
use service::user_service::UserInput;

use crate::errors::JsonApiError;
use crate::routes::viewset::{self, ListQuery};
use crate::routes::ServerState;

#[utoipa::path(
    get, path = "/api/users", tag = "users",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated users", body = crate::openapi::UserPageDoc),
        (status = 400, description = "Bad query string")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Page<UserRepr>>, JsonApiError> {
    viewset::list(state.users.as_ref(), query, ()).await
}

#[utoipa::path(
    post, path = "/api/users", tag = "users",
    request_body = crate::openapi::UserInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::UserDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<UserInput>, JsonRejection>,
) -> Result<(StatusCode, Json<UserRepr>), JsonApiError> {
    viewset::create(state.users.as_ref(), body).await
}

#[utoipa::path(
    get, path = "/api/users/{id}", tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::UserDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn retrieve(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<UserRepr>, JsonApiError> {
    viewset::retrieve(state.users.as_ref(), id).await
}

#[utoipa::path(
    put, path = "/api/users/{id}", tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = crate::openapi::UserInputDoc,
    responses(
        (status = 200, description = "Replaced", body = crate::openapi::UserDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UserInput>, JsonRejection>,
) -> Result<Json<UserRepr>, JsonApiError> {
    viewset::update(state.users.as_ref(), id, body, false).await
}

#[utoipa::path(
    patch, path = "/api/users/{id}", tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = crate::openapi::UserInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::UserDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn patch(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UserInput>, JsonRejection>,
) -> Result<Json<UserRepr>, JsonApiError> {
    viewset::update(state.users.as_ref(), id, body, true).await
}

/// Also removes the user's contractor and client profiles.
#[utoipa::path(
    delete, path = "/api/users/{id}", tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn destroy(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    viewset::destroy(state.users.as_ref(), id).await
}
