//! `Stockdeck` entry point: wires configuration, the product store, and the
//! terminal shell together.

use dotenvy::dotenv;
use stockdeck::{
    config::{catalog, settings},
    core::{dashboard::Dashboard, store::ProductStore},
    errors::Result,
    shell::{self, panels::TerminalSurfaces},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the catalog configuration (built-in catalog if no file)
    let config_path = settings::config_path();
    let config = catalog::load_or_default(&config_path)?;

    // 4. Seed the product store
    let store = ProductStore::new(config.products);
    info!(products = store.len(), "Product store seeded.");

    // 5. Run the shell
    let mut dashboard = Dashboard::new(store, config.sellers, TerminalSurfaces::new());
    shell::run(&mut dashboard)?;

    Ok(())
}
