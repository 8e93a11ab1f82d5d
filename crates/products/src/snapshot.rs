//! Product-store snapshot codec.
//!
//! The store hands the catalog a JSON array of product records. Decoding is the
//! only place a malformed record can surface; everything downstream works on
//! well-typed [`Product`] values.

use shelfwise_core::{DomainError, DomainResult};

use crate::product::Product;

/// Decode a full product collection (JSON array).
pub fn decode_snapshot(json: &str) -> DomainResult<Vec<Product>> {
    let products: Vec<Product> =
        serde_json::from_str(json).map_err(|e| DomainError::malformed(e.to_string()))?;
    tracing::debug!(count = products.len(), "decoded product snapshot");
    Ok(products)
}

/// Decode a single product record.
pub fn decode_product(json: &str) -> DomainResult<Product> {
    serde_json::from_str(json).map_err(|e| DomainError::malformed(e.to_string()))
}

/// Encode a single product record (e.g. as a navigation payload for a detail view).
pub fn encode_product(product: &Product) -> DomainResult<String> {
    serde_json::to_string(product).map_err(|e| DomainError::malformed(e.to_string()))
}
