//! Products domain module.
//!
//! Product records as the catalog sees them: a value snapshot handed over by the
//! product store, with per-variation prices and stock counts. Pure data and
//! codecs only (no IO, no storage).

pub mod money;
pub mod product;
pub mod snapshot;
pub mod timestamp;

pub use money::Money;
pub use product::{Product, Variation};
pub use snapshot::{decode_product, decode_snapshot, encode_product};
pub use timestamp::display_date;
