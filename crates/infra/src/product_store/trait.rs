use async_trait::async_trait;
use thiserror::Error;

use catalogd_core::ProductId;
use catalogd_products::{NewProduct, Product, ProductPatch};

/// Storage-layer failure, classified for the service boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A targeted mutation (or lookup) matched no row.
    ///
    /// This is a typed signal derived from "no row affected", never from
    /// matching backend-specific error codes.
    #[error("row not found")]
    RowNotFound,

    /// Any other backend failure (connectivity, constraints, row decoding).
    /// The detail stays inside the process: callers log it and answer with a
    /// generic internal failure.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Persistence operations for the product catalog.
///
/// One implementation per backend (Postgres for production, in-memory for
/// tests/dev). Every method is a single storage call; ordering and id
/// assignment are the backend's concern. Concurrent calls may interleave;
/// last-write-wins is acceptable at this layer.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All present products, in storage order.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// A single product, or `None` when absent.
    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Insert a validated record; the store assigns a fresh unique id.
    async fn insert(&self, record: NewProduct) -> Result<Product, StoreError>;

    /// Apply the present fields of `patch` to the row at `id` and return the
    /// complete updated record. [`StoreError::RowNotFound`] when absent.
    async fn update(&self, id: ProductId, patch: ProductPatch) -> Result<Product, StoreError>;

    /// Permanently remove the row at `id`. [`StoreError::RowNotFound`] when
    /// absent.
    async fn delete(&self, id: ProductId) -> Result<(), StoreError>;
}
