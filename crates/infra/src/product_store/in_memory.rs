use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use catalogd_core::ProductId;
use catalogd_products::{NewProduct, Product, ProductPatch};

use super::r#trait::{ProductStore, StoreError};

#[derive(Debug, Default)]
struct State {
    next_id: i64,
    rows: BTreeMap<i64, Product>,
}

/// In-memory product store.
///
/// Intended for tests/dev. Ids come from a monotonic counter and are never
/// reused after deletion, matching the Postgres sequence behavior. The lock
/// is storage state, not cross-request coordination: operations interleave
/// freely and last-write-wins.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    state: RwLock<State>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> StoreError {
    StoreError::Backend("lock poisoned".to_string())
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let state = self.state.read().map_err(|_| poisoned())?;
        Ok(state.rows.values().cloned().collect())
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let state = self.state.read().map_err(|_| poisoned())?;
        Ok(state.rows.get(&id.as_i64()).cloned())
    }

    async fn insert(&self, record: NewProduct) -> Result<Product, StoreError> {
        let mut state = self.state.write().map_err(|_| poisoned())?;

        state.next_id += 1;
        let product = Product {
            id: ProductId::new(state.next_id),
            title: record.title,
            description: record.description,
            price: record.price,
            featured: record.featured,
        };

        state.rows.insert(product.id.as_i64(), product.clone());
        Ok(product)
    }

    async fn update(&self, id: ProductId, patch: ProductPatch) -> Result<Product, StoreError> {
        let mut state = self.state.write().map_err(|_| poisoned())?;

        let row = state
            .rows
            .get_mut(&id.as_i64())
            .ok_or(StoreError::RowNotFound)?;

        if let Some(title) = patch.title {
            row.title = title;
        }
        if let Some(description) = patch.description {
            row.description = description;
        }
        if let Some(price) = patch.price {
            row.price = price;
        }
        if let Some(featured) = patch.featured {
            row.featured = featured;
        }

        Ok(row.clone())
    }

    async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let mut state = self.state.write().map_err(|_| poisoned())?;

        state
            .rows
            .remove(&id.as_i64())
            .map(|_| ())
            .ok_or(StoreError::RowNotFound)
    }
}
