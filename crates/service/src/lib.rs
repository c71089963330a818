//! Service layer providing resource-oriented CRUD operations on top of models.
//! - Maps persisted rows to their wire representation (`representation`).
//! - Exposes every entity through the generic `Resource` viewset trait.
//! - Reuses validation and entity definitions in `models` crate.

pub mod errors;
pub mod pagination;
pub mod representation;
pub mod resource;
mod input;
pub mod user_service;
pub mod catalog_service;
pub mod contractor_service;
pub mod client_service;
#[cfg(test)]
pub mod test_support;

pub use resource::Resource;
