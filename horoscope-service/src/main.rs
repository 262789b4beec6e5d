mod api;
mod config;
mod error;
mod horoscope;
mod state;
mod zodiac;

use axum::{http::Method, routing::get, Router};
use config::Config;
use state::AppState;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = Config::load()?;
    let state = Arc::new(AppState::from_config(&cfg)?);
    let app = router(state, cfg.cors_permissive.unwrap_or_default());

    let addr: SocketAddr = cfg.listen_addr().parse()?;
    info!(%addr, "Starting horoscope-service");

    let server = axum::Server::bind(&addr).serve(app.into_make_service());

    let graceful = server.with_graceful_shutdown(shutdown_signal());
    graceful.await?;
    Ok(())
}

fn router(state: Arc<AppState>, cors_permissive: bool) -> Router {
    let mut app = Router::new()
        .route("/", get(api::index_handler))
        .route("/health", get(api::health_handler))
        .route("/api/horoscope", get(api::horoscope_handler))
        .route("/api/zodiac-signs", get(api::zodiac_signs_handler))
        .with_state(state);

    if cors_permissive {
        info!("CORS: allowing GET from any origin");
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET]),
        );
    }

    app.layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    info!("Shutdown signal received");
}
