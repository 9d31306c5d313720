//! Catalog domain: validated product records, the in-memory catalog store,
//! and the comparison service layered on top of it.
//!
//! The store is loaded once at startup and read-only afterwards; the service
//! adds batch validation and ordering guarantees the store does not provide.

pub mod product;
pub mod repository;
pub mod service;

pub use product::{Product, ProductError, ProductRecord};
pub use repository::{CatalogStore, ProductRepository};
pub use service::ComparisonService;
