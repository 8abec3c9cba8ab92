use std::sync::Arc;

use event_catalog::{api, config::AppConfig, db::memory::MemoryEventStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "event_catalog=info,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;

    let app = api::router(api::AppState {
        store: Arc::new(MemoryEventStore::default()),
    });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "event catalog listening");
    axum::serve(listener, app).await?;

    Ok(())
}
