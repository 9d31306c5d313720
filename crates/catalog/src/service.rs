//! Comparison service: use-case level operations over the catalog.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use comparo_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;
use crate::repository::ProductRepository;

/// Stateless orchestrator adding request validation and ordering guarantees
/// on top of a [`ProductRepository`].
#[derive(Clone)]
pub struct ComparisonService {
    repository: Arc<dyn ProductRepository>,
}

impl ComparisonService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub fn get_by_id(&self, id: ProductId) -> DomainResult<Product> {
        tracing::debug!(%id, "retrieving product");
        match self.repository.find_by_id(&id)? {
            Some(product) => Ok(product),
            None => {
                tracing::warn!(%id, "product not found");
                Err(DomainError::not_found(format!(
                    "Product with ID '{id}' not found"
                )))
            }
        }
    }

    /// Batch lookup with all-or-nothing semantics: either every requested
    /// product is returned, in exactly the requested order, or the call
    /// fails naming every missing identifier.
    pub fn get_for_comparison(&self, ids: &[ProductId]) -> DomainResult<Vec<Product>> {
        if ids.is_empty() {
            return Err(DomainError::invalid_request(
                "at least one product ID must be provided",
            ));
        }

        let unique: HashSet<ProductId> = ids.iter().copied().collect();
        if unique.len() != ids.len() {
            return Err(DomainError::invalid_request("product IDs must be unique"));
        }

        tracing::debug!(requested = ids.len(), "retrieving products for comparison");
        let found = self.repository.find_by_ids(ids)?;

        let mut by_id: HashMap<ProductId, Product> =
            found.into_iter().map(|p| (p.id(), p)).collect();

        let mut missing: Vec<ProductId> = ids
            .iter()
            .filter(|id| !by_id.contains_key(id))
            .copied()
            .collect();
        if !missing.is_empty() {
            missing.sort();
            let listing = missing
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(missing = %listing, "comparison request names unknown products");
            return Err(DomainError::not_found(format!(
                "Products not found: {listing}"
            )));
        }

        // Store iteration order is unspecified; re-emit in request order.
        let mut ordered = Vec::with_capacity(ids.len());
        for id in ids {
            match by_id.remove(id) {
                Some(product) => ordered.push(product),
                None => {
                    return Err(DomainError::store_failure(format!(
                        "product '{id}' present in lookup but absent during reorder"
                    )));
                }
            }
        }
        Ok(ordered)
    }

    /// Every catalog product; may be empty, never partial.
    pub fn get_all(&self) -> DomainResult<Vec<Product>> {
        self.repository.find_all()
    }

    pub fn exists(&self, id: ProductId) -> DomainResult<bool> {
        self.repository.exists(&id)
    }

    pub fn count(&self) -> DomainResult<usize> {
        self.repository.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{ProductRecord, RawPrice};
    use proptest::prelude::*;
    use serde_json::Map;

    /// Map-backed repository standing in for the JSON store.
    struct FixtureRepository {
        products: HashMap<ProductId, Product>,
    }

    impl FixtureRepository {
        fn new(products: Vec<Product>) -> Self {
            Self {
                products: products.into_iter().map(|p| (p.id(), p)).collect(),
            }
        }
    }

    impl ProductRepository for FixtureRepository {
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

    /// Repository whose every method fails, to check error propagation.
    struct BrokenRepository;

    impl ProductRepository for BrokenRepository {
        fn find_by_id(&self, _: &ProductId) -> DomainResult<Option<Product>> {
            Err(DomainError::store_failure("index corrupted"))
        }

        fn find_by_ids(&self, _: &[ProductId]) -> DomainResult<Vec<Product>> {
            Err(DomainError::store_failure("index corrupted"))
        }

        fn find_all(&self) -> DomainResult<Vec<Product>> {
            Err(DomainError::store_failure("index corrupted"))
        }

        fn exists(&self, _: &ProductId) -> DomainResult<bool> {
            Err(DomainError::store_failure("index corrupted"))
        }

        fn count(&self) -> DomainResult<usize> {
            Err(DomainError::store_failure("index corrupted"))
        }
    }

    fn product(name: &str) -> Product {
        Product::from_record(ProductRecord {
            id: Some(ProductId::new()),
            name: name.to_string(),
            image_url: format!("https://x.example/{name}.jpg"),
            description: "d".to_string(),
            price: RawPrice::Text("19.99".to_string()),
            rating: 4.0,
            specifications: Map::new(),
            currency: "USD".to_string(),
        })
        .unwrap()
    }

    fn service_with(products: Vec<Product>) -> ComparisonService {
        ComparisonService::new(Arc::new(FixtureRepository::new(products)))
    }

    #[test]
    fn get_by_id_returns_the_exact_product() {
        let p = product("a");
        let service = service_with(vec![p.clone()]);
        assert_eq!(service.get_by_id(p.id()).unwrap(), p);
    }

    #[test]
    fn get_by_id_names_the_missing_identifier() {
        let service = service_with(vec![]);
        let id = ProductId::new();
        let err = service.get_by_id(id).unwrap_err();
        match err {
            DomainError::NotFound(msg) => assert!(msg.contains(&id.to_string())),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn comparison_rejects_empty_request() {
        let service = service_with(vec![product("a")]);
        let err = service.get_for_comparison(&[]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRequest(_)));
    }

    #[test]
    fn comparison_rejects_duplicate_ids() {
        let p = product("a");
        let service = service_with(vec![p.clone()]);
        let err = service.get_for_comparison(&[p.id(), p.id()]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRequest(_)));
    }

    #[test]
    fn comparison_preserves_request_order() {
        let a = product("a");
        let b = product("b");
        let service = service_with(vec![a.clone(), b.clone()]);

        let forward = service.get_for_comparison(&[a.id(), b.id()]).unwrap();
        assert_eq!(forward[0].id(), a.id());
        assert_eq!(forward[1].id(), b.id());

        let reverse = service.get_for_comparison(&[b.id(), a.id()]).unwrap();
        assert_eq!(reverse[0].id(), b.id());
        assert_eq!(reverse[1].id(), a.id());
    }

    #[test]
    fn comparison_is_all_or_nothing_and_names_only_missing_ids() {
        let known = product("a");
        let unknown = ProductId::new();
        let service = service_with(vec![known.clone()]);

        let err = service
            .get_for_comparison(&[known.id(), unknown])
            .unwrap_err();
        match err {
            DomainError::NotFound(msg) => {
                assert!(msg.contains(&unknown.to_string()));
                assert!(!msg.contains(&known.id().to_string()));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn comparison_lists_all_missing_ids_sorted() {
        let service = service_with(vec![]);
        let mut ids = vec![ProductId::new(), ProductId::new(), ProductId::new()];

        let err = service.get_for_comparison(&ids).unwrap_err();
        ids.sort();
        let expected = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        assert_eq!(err, DomainError::NotFound(format!("Products not found: {expected}")));
    }

    #[test]
    fn count_matches_get_all_length() {
        let service = service_with(vec![product("a"), product("b"), product("c")]);
        assert_eq!(service.count().unwrap(), service.get_all().unwrap().len());
    }

    #[test]
    fn exists_delegates_to_repository() {
        let p = product("a");
        let service = service_with(vec![p.clone()]);
        assert!(service.exists(p.id()).unwrap());
        assert!(!service.exists(ProductId::new()).unwrap());
    }

    #[test]
    fn store_failures_propagate_unchanged() {
        let service = ComparisonService::new(Arc::new(BrokenRepository));
        let err = service.get_for_comparison(&[ProductId::new()]).unwrap_err();
        assert_eq!(err, DomainError::store_failure("index corrupted"));
        assert!(service.get_all().is_err());
        assert!(service.count().is_err());
    }

    proptest! {
        /// Any permutation of the fixture ids comes back in exactly the
        /// requested order.
        #[test]
        fn any_permutation_preserves_request_order(
            order in Just((0..5usize).collect::<Vec<_>>()).prop_shuffle()
        ) {
            let products: Vec<Product> =
                ["a", "b", "c", "d", "e"].iter().map(|n| product(n)).collect();
            let service = service_with(products.clone());

            let ids: Vec<ProductId> = order.iter().map(|&i| products[i].id()).collect();
            let result = service.get_for_comparison(&ids).unwrap();

            let result_ids: Vec<ProductId> = result.iter().map(Product::id).collect();
            prop_assert_eq!(result_ids, ids);
        }
    }
}
