use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use synergie_api::config::Config;
use synergie_api::llm_client::LlmClient;
use synergie_api::routes::build_router;
use synergie_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (exits non-zero on a missing API key, before binding)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{crate_name}={level},tower_http={level}",
                crate_name = env!("CARGO_CRATE_NAME"),
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Synergie API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(
        config.api_key.clone(),
        &config.gemini_base_url,
        &config.gemini_model,
    )?;
    info!(
        "LLM client initialized (endpoint: {}, timeout: {:?})",
        llm.endpoint(),
        config.llm_timeout
    );

    // Build app state
    let state = AppState {
        generator: Arc::new(llm),
        llm_timeout: config.llm_timeout,
        static_dir: config.static_dir.clone(),
    };
    info!("Serving static files from {}", config.static_dir.display());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
