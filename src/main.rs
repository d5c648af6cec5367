mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "rolegate failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;

    let app = routes::app(conf.leptos_options);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "rolegate listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
