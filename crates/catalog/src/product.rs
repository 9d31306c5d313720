//! Product record and its construction-time validation.
//!
//! Every `Product` held by the catalog satisfies all field constraints.
//! Enforcement happens exactly once, when a raw record from the backing
//! source is converted; a record failing any constraint is never inserted.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use url::Url;

use comparo_core::ProductId;

pub const MAX_NAME_CHARS: usize = 200;
pub const MAX_DESCRIPTION_CHARS: usize = 2000;
pub const MAX_RATING: f64 = 5.0;

/// Prices carry exactly this many fractional digits after construction.
const PRICE_SCALE: u32 = 2;

/// Validation failure for a single raw record.
///
/// Recovered locally during catalog load (the record is logged and skipped);
/// never propagates past the store constructor.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProductError {
    #[error("name must be 1..={MAX_NAME_CHARS} characters, got {0}")]
    InvalidName(usize),

    #[error("image_url is not a valid absolute URL: {0}")]
    InvalidImageUrl(String),

    #[error("description must be 1..={MAX_DESCRIPTION_CHARS} characters, got {0}")]
    InvalidDescription(usize),

    #[error("price must be positive with at most 2 decimal places, got {0:?}")]
    InvalidPrice(String),

    #[error("rating must be within 0.0..={MAX_RATING}, got {0}")]
    InvalidRating(f64),

    #[error("currency must be exactly 3 letters, got {0:?}")]
    InvalidCurrency(String),
}

/// Raw product record as it appears in the backing JSON document.
///
/// This is the deserialization shape only; all invariants live in
/// [`Product::from_record`].
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    #[serde(default)]
    pub id: Option<ProductId>,
    pub name: String,
    pub image_url: String,
    pub description: String,
    pub price: RawPrice,
    pub rating: f64,
    #[serde(default)]
    pub specifications: Map<String, Value>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Price as found in the source: a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

impl RawPrice {
    fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Decimal::from_f64(*n),
            Self::Text(s) => s.trim().parse::<Decimal>().ok(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// A validated catalog product. Immutable after construction; callers only
/// ever receive clones out of the store's index.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    image_url: Url,
    description: String,
    price: Decimal,
    rating: f64,
    specifications: Map<String, Value>,
    currency: String,
}

impl Product {
    /// Validate a raw record and construct a product from it.
    ///
    /// Normalizations applied: currency uppercased, price rescaled to
    /// exactly two fractional digits, missing id generated.
    pub fn from_record(record: ProductRecord) -> Result<Self, ProductError> {
        let name_chars = record.name.chars().count();
        if name_chars == 0 || name_chars > MAX_NAME_CHARS {
            return Err(ProductError::InvalidName(name_chars));
        }

        let image_url = Url::parse(&record.image_url)
            .map_err(|e| ProductError::InvalidImageUrl(e.to_string()))?;

        let description_chars = record.description.chars().count();
        if description_chars == 0 || description_chars > MAX_DESCRIPTION_CHARS {
            return Err(ProductError::InvalidDescription(description_chars));
        }

        let price = validate_price(&record.price)?;

        if !record.rating.is_finite() || !(0.0..=MAX_RATING).contains(&record.rating) {
            return Err(ProductError::InvalidRating(record.rating));
        }

        let currency = validate_currency(&record.currency)?;

        Ok(Self {
            id: record.id.unwrap_or_else(ProductId::new),
            name: record.name,
            image_url,
            description: record.description,
            price,
            rating: record.rating,
            specifications: record.specifications,
            currency,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_url(&self) -> &Url {
        &self.image_url
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Price with exactly two fractional digits.
    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn specifications(&self) -> &Map<String, Value> {
        &self.specifications
    }

    /// Three-letter uppercase currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

fn validate_price(raw: &RawPrice) -> Result<Decimal, ProductError> {
    let mut price = raw
        .to_decimal()
        .ok_or_else(|| ProductError::InvalidPrice(raw.describe()))?
        .normalize();

    if price <= Decimal::ZERO || price.scale() > PRICE_SCALE {
        return Err(ProductError::InvalidPrice(raw.describe()));
    }

    price.rescale(PRICE_SCALE);
    Ok(price)
}

fn validate_currency(code: &str) -> Result<String, ProductError> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ProductError::InvalidCurrency(code.to_string()));
    }
    Ok(code.to_ascii_uppercase())
}
