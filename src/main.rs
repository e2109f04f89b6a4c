use anyhow::Result;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod components;
mod config;
mod controllers;
mod db_ops;
mod errors;
mod extractors;
mod middleware;
mod models;
mod routes;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notes=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!(?config, "starting");

    let db = db_ops::create_pool(&config).await?;
    let state = models::AppState {
        store: Arc::new(db),
    };
    let app = routes::get_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("listening on http://{}", config.listen_addr);
    axum::Server::bind(&config.listen_addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
