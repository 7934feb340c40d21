//! Sightline - Main Entry Point

use app::{init_logging, run, Settings};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1);
    let settings = Settings::load(config_path.as_deref())?;
    init_logging(&settings.log_level)?;

    info!("=== Sightline v{} ===", env!("CARGO_PKG_VERSION"));
    run(settings).await
}
