// Pantry server entrypoint
//!
//! The heavy lifting (initialization, middleware wiring, graceful shutdown)
//! lives in dedicated modules so this file remains a thin orchestrator.

use std::env;
use std::path::Path;

use anyhow::Result;
use log::info;
use pantry_server::{commands, config::ServerConfig, lifecycle, logging};

#[actix_web::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Load configuration; fall back to defaults when config.toml is absent
    let config_path = "config.toml";
    let config = if Path::new(config_path).exists() {
        match ServerConfig::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("❌ FATAL: Failed to load {}: {}", config_path, e);
                std::process::exit(1);
            }
        }
    } else {
        eprintln!("⚠ No {} found, using default configuration", config_path);
        let mut cfg = ServerConfig::default();
        cfg.apply_env_overrides()?;
        cfg.validate()?;
        cfg
    };

    // Logging before any other side effects
    logging::init_logging(
        &config.logging.level,
        &config.logging.file_path,
        config.logging.log_to_console,
        &config.logging.format,
    )?;

    info!("Pantry server v{}", env!("CARGO_PKG_VERSION"));
    info!("Host: {}  Port: {}", config.server.host, config.server.port);

    // Subcommand dispatch
    if let Some(command) = args.get(1) {
        match command.as_str() {
            "create-superuser" => {
                return commands::create_superuser::create_superuser(&config, &args[2..]).await;
            }
            other => {
                anyhow::bail!("Unknown command '{}'. Available: create-superuser", other);
            }
        }
    }

    // Build application state and run the HTTP server until terminated
    let components = lifecycle::bootstrap(&config).await?;
    lifecycle::run(&config, components).await
}
