//! The generic resource viewset: five CRUD operations over one entity type.
use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};

#[async_trait]
pub trait Resource: Send + Sync + 'static {
    /// Singular name used in logs and not-found messages.
    const NAME: &'static str;

    /// Write payload. Every field optional; `update(partial = false)` enforces required ones.
    type Input: Send + 'static;
    /// Read representation.
    type Repr: Serialize + Send + 'static;
    /// List narrowing; `()` for collections that are not searchable.
    type Filter: Default + Send + 'static;

    async fn list(&self, page: Pagination, filter: Self::Filter) -> Result<Page<Self::Repr>, ServiceError>;
    async fn retrieve(&self, id: Uuid) -> Result<Self::Repr, ServiceError>;
    async fn create(&self, input: Self::Input) -> Result<Self::Repr, ServiceError>;
    /// Full replace when `partial` is false, field-wise patch otherwise.
    async fn update(&self, id: Uuid, input: Self::Input, partial: bool) -> Result<Self::Repr, ServiceError>;
    async fn destroy(&self, id: Uuid) -> Result<(), ServiceError>;
}
