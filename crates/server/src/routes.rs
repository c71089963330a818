use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::{
    catalog_service::ServiceResource, client_service::ClientProfileResource,
    contractor_service::ContractorProfileResource, user_service::UserResource,
};

use crate::openapi::ApiDoc;

pub mod client_profiles;
pub mod contractor_profiles;
pub mod services;
pub mod users;
pub mod viewset;

/// Shared handler state: one resource per collection, all on the same pool.
#[derive(Clone)]
pub struct ServerState {
    pub users: Arc<UserResource>,
    pub services: Arc<ServiceResource>,
    pub contractors: Arc<ContractorProfileResource>,
    pub clients: Arc<ClientProfileResource>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: Arc::new(UserResource::new(db.clone())),
            services: Arc::new(ServiceResource::new(db.clone())),
            contractors: Arc::new(ContractorProfileResource::new(db.clone())),
            clients: Arc::new(ClientProfileResource::new(db)),
        }
    }
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let api = Router::new()
        .route("/api/users", get(users::list).post(users::create))
        .route(
            "/api/users/:id",
            get(users::retrieve).put(users::replace).patch(users::patch).delete(users::destroy),
        )
        .route("/api/services", get(services::list).post(services::create))
        .route(
            "/api/services/:id",
            get(services::retrieve).put(services::replace).patch(services::patch).delete(services::destroy),
        )
        .route("/api/contractor-profiles", get(contractor_profiles::list).post(contractor_profiles::create))
        .route(
            "/api/contractor-profiles/:id",
            get(contractor_profiles::retrieve)
                .put(contractor_profiles::replace)
                .patch(contractor_profiles::patch)
                .delete(contractor_profiles::destroy),
        )
        .route("/api/client-profiles", get(client_profiles::list).post(client_profiles::create))
        .route(
            "/api/client-profiles/:id",
            get(client_profiles::retrieve)
                .put(client_profiles::replace)
                .patch(client_profiles::patch)
                .delete(client_profiles::destroy),
        );

    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时记录状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
