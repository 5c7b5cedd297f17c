use serde::{Deserialize, Serialize};

use catalogd_core::ProductId;

/// A catalog product as stored and served.
///
/// Every persisted product satisfies the field rules enforced by
/// [`crate::validate`]; records reach storage only through that gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub featured: bool,
}

/// A fully validated record ready for insertion. The id is store-assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub featured: bool,
}

/// A validated partial update. `None` fields keep their stored values; they
/// are never defaulted or nulled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub featured: Option<bool>,
}
