use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use clinic_reports::modules::reports::adapters::outbound::appointments_in_memory::InMemoryAppointments;
use clinic_reports::shell::config::AppConfig;
use clinic_reports::shell::http::router;
use clinic_reports::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    let appointments = match &config.seed_path {
        Some(path) => {
            let store = InMemoryAppointments::from_json_file(path)?;
            if store.is_empty().await {
                tracing::warn!(path = %path.display(), "appointment seed holds no rows");
            }
            tracing::info!(
                path = %path.display(),
                appointments = store.len().await,
                "seeded appointment store"
            );
            store
        }
        None => InMemoryAppointments::new(),
    };
    let app = router(AppState::new(Arc::new(appointments)));

    let addr = config.addr();
    tracing::info!("Reports endpoint: http://{}/reports", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}
