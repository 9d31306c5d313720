//! HTTP API application wiring (axum router + service wiring).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use comparo_catalog::{CatalogStore, ComparisonService};

use crate::config::Settings;

pub mod dto;
pub mod errors;
pub mod routes;

/// Versioned URL prefix for catalog endpoints.
pub const API_PREFIX: &str = "/api/v1";

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests). The store must be fully loaded before this is called;
/// nothing past this point performs I/O on the catalog.
pub fn build_app(store: Arc<CatalogStore>, settings: &Settings) -> Router {
    let service = Arc::new(ComparisonService::new(store));

    let versioned = routes::router().layer(Extension(service));

    Router::new()
        .route("/", get(routes::system::root))
        .route("/health", get(routes::system::health))
        .nest(API_PREFIX, versioned)
        .layer(ServiceBuilder::new().layer(cors_layer(&settings.cors_origins)))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let parsed: Vec<axum::http::HeaderValue> =
        origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods(Any)
        .allow_headers(Any)
}
