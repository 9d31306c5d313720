//! Catalog repository port and its JSON-file adapter.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use comparo_core::{DomainError, DomainResult, ProductId};

use crate::product::{Product, ProductRecord};

/// Read-only access to the product index.
///
/// Every method returns a `DomainResult` so callers handle the
/// [`DomainError::StoreFailure`] arm even though the in-memory adapter has
/// no failure path of its own.
pub trait ProductRepository: Send + Sync {
    fn find_by_id(&self, id: &ProductId) -> DomainResult<Option<Product>>;

    /// Unknown ids are silently omitted; detecting them is the caller's
    /// responsibility. Result order is unspecified.
    fn find_by_ids(&self, ids: &[ProductId]) -> DomainResult<Vec<Product>>;

    /// Order unspecified but stable across repeated calls within a session.
    fn find_all(&self) -> DomainResult<Vec<Product>>;

    fn exists(&self, id: &ProductId) -> DomainResult<bool>;

    fn count(&self) -> DomainResult<usize>;
}

/// In-memory product index loaded eagerly from a JSON document.
///
/// Built once by [`CatalogStore::load`] before the process starts serving
/// traffic and never mutated afterwards, so any number of threads may query
/// it concurrently without locking.
#[derive(Debug)]
pub struct CatalogStore {
    products: HashMap<ProductId, Product>,
}

impl CatalogStore {
    /// Load and index the catalog from a `{ "products": [...] }` document.
    ///
    /// A missing or unparsable file is [`DomainError::StoreUnavailable`]; a
    /// document without a `products` array is [`DomainError::InvalidData`].
    /// Records failing validation are logged and skipped, never fatal. A
    /// later record with a duplicate id overwrites an earlier one.
    pub fn load(path: impl AsRef<Path>) -> DomainResult<Self> {
        let path = path.as_ref();

        let raw = fs::read_to_string(path).map_err(|e| {
            DomainError::store_unavailable(format!("cannot read {}: {e}", path.display()))
        })?;

        let document: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
            DomainError::store_unavailable(format!("invalid JSON in {}: {e}", path.display()))
        })?;

        let records = document
            .get("products")
            .ok_or_else(|| {
                DomainError::invalid_data("expected top-level \"products\" field")
            })?
            .as_array()
            .ok_or_else(|| DomainError::invalid_data("\"products\" must be an array"))?;

        let mut products = HashMap::with_capacity(records.len());
        let mut skipped = 0usize;

        for (index, value) in records.iter().enumerate() {
            let record: ProductRecord = match serde_json::from_value(value.clone()) {
                Ok(record) => record,
                Err(err) => {
                    tracing::warn!(index, %err, "skipping malformed product record");
                    skipped += 1;
                    continue;
                }
            };

            match Product::from_record(record) {
                Ok(product) => {
                    products.insert(product.id(), product);
                }
                Err(err) => {
                    tracing::warn!(index, %err, "skipping invalid product record");
                    skipped += 1;
                }
            }
        }

        tracing::info!(loaded = products.len(), skipped, "catalog loaded");
        Ok(Self { products })
    }
}

impl ProductRepository for CatalogStore {
    fn find_by_id(&self, id: &ProductId) -> DomainResult<Option<Product>> {
        Ok(self.products.get(id).cloned())
    }

    fn find_by_ids(&self, ids: &[ProductId]) -> DomainResult<Vec<Product>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.products.get(id).cloned())
            .collect())
    }

    fn find_all(&self) -> DomainResult<Vec<Product>> {
        Ok(self.products.values().cloned().collect())
    }

    fn exists(&self, id: &ProductId) -> DomainResult<bool> {
        Ok(self.products.contains_key(id))
    }

    fn count(&self) -> DomainResult<usize> {
        Ok(self.products.len())
    }
}
