use std::sync::Arc;

use anyhow::Context;

use agrisite_api::ApiConfig;
use agrisite_forms::{HttpFormRelay, Submitter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    agrisite_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    if config.access_key.is_empty() {
        tracing::warn!(
            "{} not set; the form relay will refuse every submission",
            agrisite_api::config::ACCESS_KEY_VAR
        );
    }

    let relay = HttpFormRelay::new(config.relay_url.clone(), config.relay_timeout)
        .context("failed to build form relay client")?;
    let submitter = Submitter::new(Arc::new(relay), config.access_key.clone());

    let app = agrisite_api::app::build_app(submitter);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        relay = %config.relay_url,
        "listening"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
