use serde_json::json;

use catalogd_products::Product;

/// Product JSON shape served by every success response.
pub fn product_to_json(product: Product) -> serde_json::Value {
    json!({
        "id": product.id.as_i64(),
        "title": product.title,
        "description": product.description,
        "price": product.price,
        "featured": product.featured,
    })
}
