use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use serde_json::{Map, Value};

use comparo_catalog::Product;

// -------------------------
// Response DTOs
// -------------------------

/// Product as rendered on the wire: identifier and URL as text, price as a
/// plain float. Separate from the domain type so the API contract can move
/// independently.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub description: String,
    pub price: f64,
    pub rating: f64,
    pub specifications: Map<String, Value>,
    pub currency: String,
}

impl ProductResponse {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            image_url: product.image_url().to_string(),
            description: product.description().to_string(),
            price: product.price().to_f64().unwrap_or_default(),
            rating: product.rating(),
            specifications: product.specifications().clone(),
            currency: product.currency().to_string(),
        }
    }
}
