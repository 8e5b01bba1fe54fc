//! `supplychain-core` — shared kernel of the supply-chain bounded context.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, the value-object and aggregate-root traits, and the
//! validated value objects every aggregate in the context composes.

pub mod aggregate;
pub mod currency;
pub mod datetime;
pub mod error;
pub mod id;
pub mod money;
pub mod validation;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use currency::Currency;
pub use datetime::DateTime;
pub use error::{DomainError, DomainResult};
pub use id::{ProductId, SupplierId};
pub use money::{MONEY_SCALE, Money};
pub use value_object::ValueObject;

/// Re-exported so callers can build amounts without a direct dependency.
pub use rust_decimal::Decimal;
