use std::sync::Arc;

use catalogd_core::{DomainError, DomainResult, ProductId};
use catalogd_infra::{ProductStore, StoreError};
use catalogd_products::{validate_full, validate_partial, Product, ProductInput};

/// Operation orchestration for the product catalog.
///
/// Each method accepts already-parsed identifiers and raw bodies, runs the
/// precondition checks in order (identifier parsing happens in the handlers,
/// before body validation), issues at most one storage call, and classifies
/// the outcome into [`DomainError`].
pub struct AppServices {
    store: Arc<dyn ProductStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub async fn products_list(&self) -> DomainResult<Vec<Product>> {
        self.store.list().await.map_err(classify_store_error)
    }

    pub async fn products_get(&self, id: ProductId) -> DomainResult<Product> {
        match self.store.get(id).await {
            Ok(Some(product)) => Ok(product),
            Ok(None) => Err(DomainError::not_found()),
            Err(e) => Err(classify_store_error(e)),
        }
    }

    pub async fn products_create(&self, body: ProductInput) -> DomainResult<Product> {
        let record = validate_full(&body).map_err(DomainError::validation)?;
        self.store.insert(record).await.map_err(classify_store_error)
    }

    pub async fn products_update(&self, id: ProductId, body: ProductInput) -> DomainResult<Product> {
        let patch = validate_partial(&body).map_err(DomainError::validation)?;
        self.store.update(id, patch).await.map_err(classify_store_error)
    }

    pub async fn products_delete(&self, id: ProductId) -> DomainResult<()> {
        self.store.delete(id).await.map_err(classify_store_error)
    }
}

/// Map storage failures into the domain taxonomy.
///
/// `RowNotFound` is the typed "targeted mutation matched nothing" signal and
/// becomes `NotFound`. Everything else is logged in full here and leaves the
/// process only as a generic internal failure.
fn classify_store_error(err: StoreError) -> DomainError {
    match err {
        StoreError::RowNotFound => DomainError::not_found(),
        StoreError::Backend(detail) => {
            tracing::error!(error = %detail, "storage backend failure");
            DomainError::internal("storage failure")
        }
    }
}
