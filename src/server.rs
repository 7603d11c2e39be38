//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::FromRef,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::assets::AssetLoader;
use crate::models::AppConfig;
use crate::services::{ColourService, TemplateService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub colours: Arc<ColourService>,
    pub templates: Arc<TemplateService>,
}

impl FromRef<AppState> for Arc<ColourService> {
    fn from_ref(state: &AppState) -> Self {
        state.colours.clone()
    }
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = Arc::new(AppConfig::load_from_assets(&asset_loader));
    let colours = Arc::new(
        ColourService::load(&asset_loader, &config)
            .map_err(|e| anyhow::anyhow!("Failed to load colour names: {e}"))?,
    );
    let templates = Arc::new(TemplateService::new(&asset_loader)?);

    Ok(AppState {
        config,
        colours,
        templates,
    })
}

/// Build the router with all pages, API endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(api::handle_index))
        .route("/rgb", get(api::handle_rgb_page))
        .route("/rgb/:colour", get(api::handle_rgb_page))
        .route("/hsv", get(api::handle_hsv_page))
        .route("/hsv/:colour", get(api::handle_hsv_page))
        .route("/cmyk", get(api::handle_cmyk_page))
        .route("/cmyk/:colour", get(api::handle_cmyk_page))
        .route("/:colour", get(api::handle_hex_page))
        .route("/static/colours.css", get(api::handle_stylesheet))
        // JSON API
        .route("/api/colour/:value", get(api::handle_colour))
        .route("/api/names/:name", get(api::handle_name))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
