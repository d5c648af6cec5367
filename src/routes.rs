//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the Leptos SSR routes for every page in the client's route table,
//! serves the compiled WASM/CSS bundle under `/pkg`, and exposes `/healthz`.
//! There are no API routes: identity lives entirely in the browser.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application router: Leptos SSR pages, static assets, health check.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(rolegate_client::app::App);
    let pkg_dir = pkg_dir(leptos_options.site_root.as_ref(), leptos_options.site_pkg_dir.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || rolegate_client::app::shell(opts.clone())
        })
        .with_state(leptos_options)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Directory holding the compiled client bundle.
fn pkg_dir(site_root: &str, site_pkg_dir: &str) -> PathBuf {
    Path::new(site_root).join(site_pkg_dir)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
