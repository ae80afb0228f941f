//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module mounts the REST API for every record type and stitches it
//! with Leptos SSR rendering under a single Axum router. Uploaded documents
//! are served as static files under `/uploads`.

pub mod auth;
pub mod error;
pub mod resources;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use records::{
    Category, Distribution, FinancialYear, Grn, Institute, Invoice, Item, Location, PurchaseOrder, QuickGrn,
    QuickInvoice, Return, StockEntry, Unit, Vendor,
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// REST API, health check and uploaded files.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .merge(resources::routes::<Vendor>())
        .merge(resources::routes::<Unit>())
        .merge(resources::routes::<Category>())
        .merge(resources::routes::<Item>())
        .merge(resources::routes::<Institute>())
        .merge(resources::routes::<Location>())
        .merge(resources::routes::<FinancialYear>())
        .merge(resources::routes::<PurchaseOrder>())
        .merge(resources::routes::<Grn>())
        .merge(resources::routes::<Invoice>())
        .merge(resources::routes::<Distribution>())
        .merge(resources::routes::<Return>())
        .merge(resources::routes::<StockEntry>())
        .merge(resources::routes::<QuickGrn>())
        .merge(resources::routes::<QuickInvoice>())
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_token))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes));

    Router::new()
        .merge(api)
        .route("/healthz", get(healthz))
        .nest_service("/uploads", ServeDir::new(&state.config.upload_dir))
        .layer(cors)
        .with_state(state)
}

/// API routes plus the Leptos SSR console and its static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) live under the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
