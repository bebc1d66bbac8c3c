//! Jobwatch - Main Entry Point
//! JSON-RPC server over the subscription and job search use cases

mod settings;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobwatch_api_rpc::{RpcHandler, RpcServer, RpcServerConfig};
use jobwatch_core::application::{JobSearchService, SubscriptionService};
use jobwatch_core::port::id_provider::UuidProvider;
use jobwatch_core::port::time_provider::SystemTimeProvider;
use jobwatch_infra_http::HttpExternalJobSource;
use jobwatch_infra_sqlite::{
    create_pool, run_migrations, SqliteJobStore, SqliteSubscriberRepository,
};
use settings::Settings;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let settings = Settings::load().map_err(|e| anyhow::anyhow!("{}", e))?;

    // 2. Initialize logging
    init_logging(&settings.log_format)?;
    info!("Jobwatch v{} starting...", VERSION);

    // 3. Initialize database
    info!(database_url = %settings.database_url, "Initializing database...");
    ensure_parent_dir(&settings.database_url)?;
    let pool = create_pool(&settings.database_url)
        .await
        .map_err(|e| anyhow::anyhow!("DB pool creation failed: {}", e))?;
    run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;

    // 4. Setup dependencies (DI wiring)
    let subscribers = Arc::new(SqliteSubscriberRepository::new(pool.clone()));
    let job_store = Arc::new(SqliteJobStore::new(pool.clone()));
    let external_source = Arc::new(
        HttpExternalJobSource::new(
            settings.external_jobs_url.clone(),
            Duration::from_secs(settings.external_timeout_secs),
        )
        .map_err(|e| anyhow::anyhow!("{}", e))?,
    );

    let subscriptions = Arc::new(SubscriptionService::new(
        subscribers.clone(),
        Arc::new(UuidProvider),
        Arc::new(SystemTimeProvider),
    ));
    let search = Arc::new(JobSearchService::new(
        subscribers,
        job_store,
        external_source,
    ));

    // 5. Start JSON-RPC server
    let rpc_config = RpcServerConfig {
        host: settings.rpc_host.clone(),
        port: settings.rpc_port,
    };
    let rpc_server = RpcServer::new(rpc_config, Arc::new(RpcHandler::new(subscriptions, search)));
    let (rpc_handle, addr) = rpc_server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    info!(%addr, external_jobs_url = %settings.external_jobs_url, "System ready");
    info!("Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");
    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;
    pool.close().await;

    info!("Shutdown complete.");
    Ok(())
}

fn init_logging(format: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("jobwatch=info"))?;

    match format {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .try_init()?,
        _ => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty())
            .try_init()?,
    }
    Ok(())
}

// SQLite creates the file but not its directory
fn ensure_parent_dir(database_url: &str) -> Result<()> {
    if database_url.contains(":memory:") {
        return Ok(());
    }
    let path = database_url
        .trim_start_matches("sqlite:")
        .trim_start_matches("//");
    let path = path.split('?').next().unwrap_or(path);
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
