//! Server lifecycle management helpers.
//!
//! Encapsulates the heavy lifting otherwise done in `main.rs`:
//! opening storage, wiring application components, running the HTTP
//! server, and coordinating graceful shutdown.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use actix_web::{App, HttpServer};
use anyhow::Result;
use log::{info, warn};
use pantry_api::app::{AppComponents, ALL_PARTITIONS};
use pantry_store::{RocksDbBackend, StorageBackend};

use crate::config::ServerConfig;
use crate::middleware;

/// Open storage and build the application components.
pub async fn bootstrap(config: &ServerConfig) -> Result<AppComponents> {
    let phase_start = Instant::now();
    let db_path = PathBuf::from(&config.storage.data_dir);
    std::fs::create_dir_all(&db_path)?;

    let backend: Arc<dyn StorageBackend> =
        Arc::new(RocksDbBackend::open(&db_path, ALL_PARTITIONS)?);
    info!(
        "RocksDB initialized at {} ({:.2}ms)",
        db_path.display(),
        phase_start.elapsed().as_secs_f64() * 1000.0
    );

    let components = AppComponents::new(
        backend,
        PathBuf::from(&config.storage.media_dir),
        config.auth.bcrypt_cost,
    );

    create_initial_superuser(&components).await?;

    Ok(components)
}

/// Start the HTTP server and manage graceful shutdown.
pub async fn run(config: &ServerConfig, components: AppComponents) -> Result<()> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting HTTP server on {}", bind_addr);

    let workers = if config.server.workers == 0 {
        num_cpus::get()
    } else {
        config.server.workers
    };
    info!("Server config: workers={}", workers);

    let app_components = components.clone();
    let cors_config = config.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::request_logger())
            .wrap(middleware::build_cors_from_config(&cors_config))
            .configure(|cfg| app_components.configure(cfg))
    })
    .bind(&bind_addr)?
    .workers(workers)
    .run();

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    tokio::select! {
        result = server_task => {
            if let Err(e) = result {
                log::error!("Server task failed: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
            server_handle.stop(true).await;
        }
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Create an initial superuser on first startup when the
/// PANTRY_ADMIN_EMAIL and PANTRY_ADMIN_PASSWORD environment variables are
/// set. Subsequent startups with the same email are a no-op.
async fn create_initial_superuser(components: &AppComponents) -> Result<()> {
    let (email, password) = match (
        std::env::var("PANTRY_ADMIN_EMAIL"),
        std::env::var("PANTRY_ADMIN_PASSWORD"),
    ) {
        (Ok(email), Ok(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        (Ok(_), Err(_)) | (Err(_), Ok(_)) => {
            warn!("Both PANTRY_ADMIN_EMAIL and PANTRY_ADMIN_PASSWORD must be set; skipping superuser bootstrap");
            return Ok(());
        }
        _ => return Ok(()),
    };

    if components.identity.get_by_email(&email).await?.is_some() {
        log::debug!("Superuser '{}' already exists, skipping initialization", email);
        return Ok(());
    }

    components.identity.create_superuser(&email, &password).await?;
    info!("✓ Created initial superuser '{}'", email);
    Ok(())
}
