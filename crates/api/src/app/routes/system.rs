use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::app::API_PREFIX;

pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy",
            "service": "comparo-api",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// Service metadata and endpoint map.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "Comparo API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "get_all_products": format!("{API_PREFIX}/products"),
            "get_product_by_id": format!("{API_PREFIX}/products/{{id}}"),
            "compare_products": format!("{API_PREFIX}/products/compare/batch"),
            "product_count": format!("{API_PREFIX}/products/health/count"),
        },
    }))
}
