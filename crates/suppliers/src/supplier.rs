use serde::{Deserialize, Serialize};
use tracing::debug;

use supplychain_core::validation::{has_char_len_between, is_valid_email};
use supplychain_core::{AggregateRoot, DomainError, DomainResult, Money, SupplierId};

/// Shortest accepted supplier name, in characters.
pub const NAME_MIN_CHARS: usize = 2;
/// Longest accepted supplier name, in characters.
pub const NAME_MAX_CHARS: usize = 100;

/// Input for registering a supplier.
///
/// `id` and `name` are mandatory; the contact email and last order total are
/// optional and validated only when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSupplier {
    pub id: SupplierId,
    pub name: String,
    pub contact_email: Option<String>,
    pub last_order_total_price: Option<Money>,
}

impl NewSupplier {
    pub fn new(id: SupplierId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            contact_email: None,
            last_order_total_price: None,
        }
    }

    pub fn with_contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = Some(email.into());
        self
    }

    pub fn with_last_order_total_price(mut self, price: Money) -> Self {
        self.last_order_total_price = Some(price);
        self
    }
}

/// Aggregate root: Supplier.
///
/// Fields are only reachable through accessors. The two optional fields are
/// replaced wholesale through guarded mutators, so every invariant holds after
/// each call, successful or not.
///
/// There is no internal locking; concurrent writers must serialise access to
/// a given instance themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SupplierRecord", into = "SupplierRecord")]
pub struct Supplier {
    id: SupplierId,
    name: String,
    contact_email: Option<String>,
    last_order_total_price: Option<Money>,
}

impl Supplier {
    pub fn new(input: NewSupplier) -> DomainResult<Self> {
        let NewSupplier {
            id,
            name,
            contact_email,
            last_order_total_price,
        } = input;

        ensure_name(&name)?;
        if let Some(email) = contact_email.as_deref() {
            ensure_email(email)?;
        }

        debug!(supplier = %id, "supplier created");

        Ok(Self {
            id,
            name,
            contact_email,
            last_order_total_price,
        })
    }

    pub fn id_typed(&self) -> SupplierId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact_email(&self) -> Option<&str> {
        self.contact_email.as_deref()
    }

    pub fn last_order_total_price(&self) -> Option<&Money> {
        self.last_order_total_price.as_ref()
    }

    /// Replace the contact email. An invalid address leaves the current one in place.
    pub fn set_contact_email(&mut self, email: impl Into<String>) -> DomainResult<()> {
        let email = email.into();
        if let Err(e) = ensure_email(&email) {
            debug!(supplier = %self.id, field = e.field(), error = %e, "supplier mutation rejected");
            return Err(e);
        }
        self.contact_email = Some(email);
        debug!(supplier = %self.id, "contact email updated");
        Ok(())
    }

    /// Remove the contact email.
    pub fn clear_contact_email(&mut self) {
        self.contact_email = None;
        debug!(supplier = %self.id, "contact email cleared");
    }

    pub fn set_last_order_total_price(&mut self, price: Money) {
        debug!(supplier = %self.id, price = %price, "last order total updated");
        self.last_order_total_price = Some(price);
    }

    pub fn clear_last_order_total_price(&mut self) {
        self.last_order_total_price = None;
        debug!(supplier = %self.id, "last order total cleared");
    }
}

impl AggregateRoot for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn ensure_name(name: &str) -> DomainResult<()> {
    if !has_char_len_between(name, NAME_MIN_CHARS, NAME_MAX_CHARS) {
        return Err(DomainError::validation(
            "name",
            format!("name must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters"),
        ));
    }
    Ok(())
}

fn ensure_email(email: &str) -> DomainResult<()> {
    if !is_valid_email(email) {
        return Err(DomainError::validation(
            "contactEmail",
            "contactEmail must be a valid email address",
        ));
    }
    Ok(())
}

/// Wire shape of a supplier; deserialisation re-runs every constructor check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SupplierRecord {
    id: SupplierId,
    name: String,
    #[serde(default)]
    contact_email: Option<String>,
    #[serde(default)]
    last_order_total_price: Option<Money>,
}

impl TryFrom<SupplierRecord> for Supplier {
    type Error = DomainError;

    fn try_from(value: SupplierRecord) -> Result<Self, Self::Error> {
        Supplier::new(NewSupplier {
            id: value.id,
            name: value.name,
            contact_email: value.contact_email,
            last_order_total_price: value.last_order_total_price,
        })
    }
}

impl From<Supplier> for SupplierRecord {
    fn from(value: Supplier) -> Self {
        Self {
            id: value.id,
            name: value.name,
            contact_email: value.contact_email,
            last_order_total_price: value.last_order_total_price,
        }
    }
}
