//! Infrastructure layer: storage adapters for the product catalog.

pub mod product_store;

pub use product_store::{InMemoryProductStore, PostgresProductStore, ProductStore, StoreError};
