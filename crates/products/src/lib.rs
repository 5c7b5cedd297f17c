//! Products domain: the catalog record and its schema validation.
//!
//! This crate contains the business rules for the product catalog, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;
pub mod validate;

pub use product::{NewProduct, Product, ProductPatch};
pub use validate::{validate_full, validate_partial, ProductInput, MIN_DESCRIPTION_LEN, MIN_TITLE_LEN};
