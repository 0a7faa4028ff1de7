//! Create superuser command for pantry-server
//!
//! Provides a CLI command to create an administrator account with staff
//! and superuser privileges:
//!
//! ```sh
//! pantry-server create-superuser admin@example.com <password>
//! ```

use anyhow::{Context, Result};
use log::info;

use crate::config::ServerConfig;
use crate::lifecycle;

/// Create a superuser account against the configured storage.
///
/// Must not run while the server holds the database (RocksDB is
/// single-process).
pub async fn create_superuser(config: &ServerConfig, args: &[String]) -> Result<()> {
    let [email, password] = args else {
        anyhow::bail!("usage: pantry-server create-superuser <email> <password>");
    };

    let components = lifecycle::bootstrap(config)
        .await
        .context("Failed to open storage")?;

    let user = components
        .identity
        .create_superuser(email, password)
        .await
        .context("Superuser creation failed")?;

    info!("Created superuser '{}' (id {})", user.email, user.id);
    println!("Superuser '{}' created", user.email);
    Ok(())
}
