use serde::{Deserialize, Serialize};

use shelfwise_products::Product;

/// Total on-hand quantity of a product.
///
/// Without variations the product's own `stocks` is authoritative. With
/// variations, it is ignored and the variation counts are summed.
pub fn total_stock(product: &Product) -> u64 {
    if !product.has_variations() {
        return product.stocks();
    }
    product
        .variations()
        .iter()
        .fold(0u64, |acc, v| acc.saturating_add(v.stocks))
}

/// Coarse stock classification for a total quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StockLevel {
    OutOfStock,
    Low,
    InStock,
}

impl StockLevel {
    /// `Low` means strictly below `low_threshold` but not zero.
    pub fn classify(total: u64, low_threshold: u64) -> Self {
        if total == 0 {
            StockLevel::OutOfStock
        } else if total < low_threshold {
            StockLevel::Low
        } else {
            StockLevel::InStock
        }
    }

    pub fn of(product: &Product, low_threshold: u64) -> Self {
        Self::classify(total_stock(product), low_threshold)
    }
}
