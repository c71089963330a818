use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use anyhow::Result;

use crate::db::{connect_with_config, DatabaseConfig};



/// Transaction handling tests
pub mod transaction_tests;

/// Fresh in-memory schema per test; `TEST_DATABASE_URL` points the suite at a real server.
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    let cfg = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => DatabaseConfig { url, ..DatabaseConfig::from_env() },
        Err(_) => DatabaseConfig::in_memory(),
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub(crate) fn unique(prefix: &str) -> String {
    format!("{prefix}_{}", &uuid::Uuid::new_v4().simple().to_string()[..12])
}
