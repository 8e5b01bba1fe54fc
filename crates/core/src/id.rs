//! Strongly-typed identifiers used across the supply-chain context.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::validation::parse_uuid;
use crate::value_object::ValueObject;

/// Identifier of a supplier (aggregate root).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SupplierId(Uuid);

/// Identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(Uuid);

macro_rules! impl_uuid_newtype {
    ($t:ident, $name:literal) => {
        impl $t {
            /// Wrap a caller-supplied UUID string (canonical hyphenated form).
            pub fn new(value: &str) -> Result<Self, DomainError> {
                parse_uuid(value).map(Self).ok_or_else(|| {
                    DomainError::validation($name, format!("Invalid {}: {}", $name, value))
                })
            }

            /// Create a new identifier around a random (v4) UUID.
            ///
            /// Uniqueness is probabilistic, not checked.
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            /// Hyphenated lowercase rendering of the UUID.
            pub fn value(&self) -> String {
                self.0.hyphenated().to_string()
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl ValueObject for $t {}

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0.hyphenated(), f)
            }
        }

        impl From<Uuid> for $t {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.value()
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(&value)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

impl_uuid_newtype!(SupplierId, "SupplierId");
impl_uuid_newtype!(ProductId, "ProductId");

// Distinct identifier types never denote the same thing, even over equal UUIDs.
macro_rules! impl_distinct_ids {
    ($a:ty, $b:ty) => {
        impl PartialEq<$b> for $a {
            fn eq(&self, _other: &$b) -> bool {
                false
            }
        }

        impl PartialEq<$a> for $b {
            fn eq(&self, _other: &$a) -> bool {
                false
            }
        }
    };
}

impl_distinct_ids!(SupplierId, ProductId);
