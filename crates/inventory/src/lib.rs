//! Inventory domain module.
//!
//! Stock arithmetic over product records: reconciling a product's own stock
//! count with the counts of its variations. Deterministic, no IO.

pub mod stock;

pub use stock::{StockLevel, total_stock};
