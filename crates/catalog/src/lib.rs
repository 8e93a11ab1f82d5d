//! `shelfwise-catalog`
//!
//! **Responsibility:** derive display-ready views of a product collection.
//!
//! - [`apply`] filters and orders the full collection by one [`Criterion`].
//! - [`price_range`] renders the low–high price of a product's variations.
//! - [`select_by_index`] resolves a (possibly out-of-range) list position.
//! - [`CatalogView`] keeps the session state of a product screen, recomputing
//!   its filtered snapshot from the full collection on every change.
//!
//! All computations are pure; the only time input comes from an injected
//! [`shelfwise_core::Clock`].

pub mod collation;
pub mod criterion;
pub mod engine;
pub mod policy;
pub mod pricing;
pub mod selection;
pub mod view;

pub use criterion::Criterion;
pub use engine::{apply, apply_default};
pub use policy::FilterPolicy;
pub use pricing::{PriceRange, display_price_range, price_range};
pub use selection::select_by_index;
pub use view::CatalogView;
