#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// In-memory SQLite by default (fresh schema per call); set `TEST_DATABASE_URL`
/// to run against a shared server instead.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
        migration::Migrator::up(&db, None).await?;
        return Ok(db);
    };

    let mut cfg = DatabaseConfig { url, ..DatabaseConfig::from_env() };
    cfg.max_connections = cfg.max_connections.max(10);
    cfg.min_connections = cfg.min_connections.min(1);
    cfg.acquire_timeout = std::time::Duration::from_secs(10);

    // Run migrations exactly once, with a throwaway connection
    MIGRATED
        .get_or_try_init(|| async {
            let db = connect_with_config(&cfg).await?;
            migration::Migrator::up(&db, None).await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;

    connect_with_config(&cfg).await
}

pub fn unique(prefix: &str) -> String {
    format!("{prefix}_{}", &uuid::Uuid::new_v4().simple().to_string()[..12])
}
