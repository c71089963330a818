use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Open the pool, verify it, and apply pending migrations when enabled.
pub async fn prepare_database(cfg: &configs::DatabaseConfig) -> Result<DatabaseConnection, StartupError> {
    let mut cfg = cfg.clone();
    cfg.normalize_from_env();
    cfg.validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

    let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg)).await?;
    models::db::test_connection(&db)
        .await
        .map_err(|e| StartupError::Runtime(format!("database ping failed: {e}")))?;

    if cfg.auto_migrate {
        migration::Migrator::up(&db, None).await.map_err(|e| StartupError::Runtime(format!("migrations failed: {e}")))?;
        info!("migrations applied");
    } else {
        warn!("auto_migrate disabled; assuming schema is current");
    }
    Ok(db)
}

pub fn app(db: DatabaseConnection) -> Router {
    routes::build_router(ServerState::new(db), build_cors())
}

/// Public entry: build the app and run the HTTP server until `shutdown` resolves.
pub async fn run_with_shutdown<F>(shutdown: F) -> Result<(), StartupError>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    dotenv().ok();
    let cfg = AppConfig::load_or_env();

    let db = prepare_database(&cfg.database).await?;
    let app = app(db);

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Runtime(format!("bind {addr}: {e}")))?;
    info!(%addr, "contractor hub listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    info!("server stopped");
    Ok(())
}

pub async fn run() -> Result<(), StartupError> {
    run_with_shutdown(async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}
