//! `shelfwise-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog crates
//! (no IO beyond reading the wall clock through [`SystemClock`]).

pub mod clock;
pub mod error;
pub mod id;
pub mod value_object;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use value_object::ValueObject;
