use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use futurefit_api::assessment::questions::futurefit_catalog;
use futurefit_api::assessment::store::SessionStore;
use futurefit_api::config::Config;
use futurefit_api::routes::build_router;
use futurefit_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting FutureFit API v{}", env!("CARGO_PKG_VERSION"));

    // A malformed catalog must refuse to serve, not fail once a respondent
    // reaches the broken section.
    let catalog = Arc::new(futurefit_catalog()?);
    info!(
        "Question catalog loaded: {} sections, {} questions",
        catalog.section_count(),
        catalog.question_count()
    );

    let state = AppState {
        config: config.clone(),
        catalog,
        sessions: SessionStore::new(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
