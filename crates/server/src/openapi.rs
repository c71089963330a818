use std::collections::BTreeMap;

use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub message: Option<String>,
    /// Field name to messages; present on validation errors only
    pub fields: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(ToSchema)]
pub struct UserDoc { pub id: Uuid, pub username: String, pub email: String, pub first_name: String, pub last_name: String }

#[derive(ToSchema)]
pub struct UserInputDoc { pub username: String, pub email: Option<String>, pub first_name: Option<String>, pub last_name: Option<String> }

#[derive(ToSchema)]
pub struct ServiceDoc { pub id: Uuid, pub name: String, pub description: String }

#[derive(ToSchema)]
pub struct ServiceInputDoc { pub name: String, pub description: Option<String> }

#[derive(ToSchema)]
pub struct ContractorProfileDoc {
    pub id: Uuid,
    pub user: UserDoc,
    pub bio: String,
    pub location: String,
    pub hourly_rate: f64,
    pub services: Vec<ServiceDoc>,
    pub portfolio_link: Option<String>,
}

/// `user_id` is fixed after creation; `service_ids` replaces the offered set.
#[derive(ToSchema)]
pub struct ContractorProfileInputDoc {
    pub user_id: Uuid,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub hourly_rate: f64,
    pub portfolio_link: Option<String>,
    pub service_ids: Option<Vec<Uuid>>,
}

#[derive(ToSchema)]
pub struct ClientProfileDoc {
    pub id: Uuid,
    pub user: UserDoc,
    pub company_name: String,
    pub contact_phone: String,
    pub location: String,
}

#[derive(ToSchema)]
pub struct ClientProfileInputDoc {
    pub user_id: Uuid,
    pub company_name: Option<String>,
    pub contact_phone: Option<String>,
    pub location: Option<String>,
}

#[derive(ToSchema)]
pub struct UserPageDoc { pub count: u64, pub page: u32, pub per_page: u32, pub results: Vec<UserDoc> }

#[derive(ToSchema)]
pub struct ServicePageDoc { pub count: u64, pub page: u32, pub per_page: u32, pub results: Vec<ServiceDoc> }

#[derive(ToSchema)]
pub struct ContractorProfilePageDoc { pub count: u64, pub page: u32, pub per_page: u32, pub results: Vec<ContractorProfileDoc> }

#[derive(ToSchema)]
pub struct ClientProfilePageDoc { pub count: u64, pub page: u32, pub per_page: u32, pub results: Vec<ClientProfileDoc> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::list,
        crate::routes::users::create,
        crate::routes::users::retrieve,
        crate::routes::users::replace,
        crate::routes::users::patch,
        crate::routes::users::destroy,
        crate::routes::services::list,
        crate::routes::services::create,
        crate::routes::services::retrieve,
        crate::routes::services::replace,
        crate::routes::services::patch,
        crate::routes::services::destroy,
        crate::routes::contractor_profiles::list,
        crate::routes::contractor_profiles::create,
        crate::routes::contractor_profiles::retrieve,
        crate::routes::contractor_profiles::replace,
        crate::routes::contractor_profiles::patch,
        crate::routes::contractor_profiles::destroy,
        crate::routes::client_profiles::list,
        crate::routes::client_profiles::create,
        crate::routes::client_profiles::retrieve,
        crate::routes::client_profiles::replace,
        crate::routes::client_profiles::patch,
        crate::routes::client_profiles::destroy,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            UserDoc,
            UserInputDoc,
            UserPageDoc,
            ServiceDoc,
            ServiceInputDoc,
            ServicePageDoc,
            ContractorProfileDoc,
            ContractorProfileInputDoc,
            ContractorProfilePageDoc,
            ClientProfileDoc,
            ClientProfileInputDoc,
            ClientProfilePageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "services"),
        (name = "contractor-profiles"),
        (name = "client-profiles")
    )
)]
pub struct ApiDoc;
