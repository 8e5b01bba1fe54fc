//! Suppliers domain module.
//!
//! This crate contains the `Supplier` aggregate root, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod supplier;

pub use supplier::{NAME_MAX_CHARS, NAME_MIN_CHARS, NewSupplier, Supplier};
