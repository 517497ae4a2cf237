//! # Shelf Web Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration (file, then environment)
//! 3. Serve the book list until ctrl-c

use shelf_web::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shelf_web::init_tracing();

    let config = AppConfig::load(None)?;
    tracing::info!(addr = %config.server.bind_address(), "Starting Shelf");

    shelf_web::serve(config).await?;
    Ok(())
}
