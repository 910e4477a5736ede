use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use career_api::config::Config;
use career_api::llm_client::GeminiClient;
use career_api::routes::build_router;
use career_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values or inverted deadlines)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("career_api={},tower_http=info", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Compass API v{}", env!("CARGO_PKG_VERSION"));

    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; career requests will fail with a configuration error");
    }

    // Process-scoped model handle, created once at startup
    let model = GeminiClient::shared(config.gemini_api_base.clone())?;
    info!(
        "Model client initialized (model: {}, deadline: {}ms, platform ceiling: {}ms)",
        config.gemini_model,
        config.model_deadline.as_millis(),
        config.platform_timeout.as_millis()
    );

    let state = AppState {
        config: config.clone(),
        model: Arc::new(model),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
