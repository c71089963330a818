pub mod errors;
pub mod db;
pub mod user;
pub mod service;
pub mod contractor_profile;
pub mod contractor_profile_service;
pub mod client_profile;

#[cfg(test)]
mod tests;
