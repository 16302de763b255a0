use anyhow::{Context, Result};
use std::sync::Arc;

use tenderlot_web::{app, config, logging, InMemoryLotProvider, LotProvider};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let settings = config::Settings::from_env()?;

    logging::init_logging(&settings);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        "Starting tender lot service"
    );

    let lots: Arc<dyn LotProvider> = match &settings.lots_file {
        Some(path) => Arc::new(
            InMemoryLotProvider::from_json_file(path)
                .with_context(|| format!("Failed to load lots from {}", path.display()))?,
        ),
        None => {
            tracing::info!("LOTS_FILE not set, serving the built-in sample lot");
            Arc::new(InMemoryLotProvider::with_sample().context("Built-in sample lot is invalid")?)
        }
    };

    if lots.is_empty() {
        tracing::warn!("Lot provider is empty; every lot page will return 404");
    }

    let state = app::AppState::new(settings.clone(), lots);
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
