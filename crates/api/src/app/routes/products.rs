use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use comparo_catalog::ComparisonService;
use comparo_core::ProductId;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/compare/batch", get(compare_products))
        .route("/health/count", get(product_count))
        .route("/:id", get(get_product))
}

#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    /// Comma-separated list of product UUIDs.
    ids: String,
}

pub async fn list_products(
    Extension(service): Extension<Arc<ComparisonService>>,
) -> axum::response::Response {
    tracing::info!("listing all products");
    match service.get_all() {
        Ok(products) => {
            let items = products
                .iter()
                .map(dto::ProductResponse::from_product)
                .collect::<Vec<_>>();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(service): Extension<Arc<ComparisonService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id");
        }
    };

    match service.get_by_id(id) {
        Ok(product) => (
            StatusCode::OK,
            Json(dto::ProductResponse::from_product(&product)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn compare_products(
    Extension(service): Extension<Arc<ComparisonService>>,
    Query(query): Query<CompareQuery>,
) -> axum::response::Response {
    let mut ids = Vec::new();
    for raw in query.ids.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match raw.parse::<ProductId>() {
            Ok(id) => ids.push(id),
            Err(_) => {
                return errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_id",
                    format!("'{raw}' is not a valid product id"),
                );
            }
        }
    }

    tracing::info!(requested = ids.len(), "comparison request");
    match service.get_for_comparison(&ids) {
        Ok(products) => {
            let items = products
                .iter()
                .map(dto::ProductResponse::from_product)
                .collect::<Vec<_>>();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn product_count(
    Extension(service): Extension<Arc<ComparisonService>>,
) -> axum::response::Response {
    match service.count() {
        Ok(count) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "count": count,
                "status": "healthy",
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
