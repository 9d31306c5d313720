use std::sync::Arc;

use anyhow::Context;

use comparo_api::config::Settings;
use comparo_catalog::CatalogStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    comparo_observability::init(&settings.log_level);

    tracing::info!(
        data_file = %settings.data_file_path,
        bind = %settings.bind_addr(),
        "starting comparo API"
    );

    // A failed load is a fatal startup condition; nothing retries it.
    let store = CatalogStore::load(&settings.data_file_path)
        .with_context(|| format!("failed to load catalog from {}", settings.data_file_path))?;

    let app = comparo_api::app::build_app(Arc::new(store), &settings);

    let listener = tokio::net::TcpListener::bind(settings.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr()))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
