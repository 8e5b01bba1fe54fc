//! Drives a supplier through registration and updates the way an outer layer
//! (HTTP handler, persistence mapper) would.

use anyhow::Result;
use supplychain_core::{AggregateRoot, Currency, DateTime, Decimal, DomainError, Money, ProductId, SupplierId};
use supplychain_suppliers::{NewSupplier, Supplier};

fn init_tracing() {
    supplychain_observability::init();
}

#[test]
fn register_then_update_supplier() -> Result<()> {
    init_tracing();

    let id: SupplierId = "0f8fad5b-d9cb-469f-a165-70867728950e".parse()?;
    let mut supplier = Supplier::new(NewSupplier::new(id, "Acme Corp"))?;
    assert_eq!(supplier.id(), &id);

    supplier.set_contact_email("purchasing@acme.com")?;
    assert_eq!(supplier.contact_email(), Some("purchasing@acme.com"));

    let unit_price = Money::new(Decimal::new(1999, 2), Currency::new("USD")?)?;
    let shipping = Money::from_f64(5.0, Currency::Usd)?;
    let total = unit_price.multiply(Decimal::from(3))?.add(&shipping)?;
    assert_eq!(total.to_string(), "USD 64.97");

    supplier.set_last_order_total_price(total);
    assert_eq!(supplier.last_order_total_price(), Some(&total));

    Ok(())
}

#[test]
fn rejected_input_surfaces_field_and_message() {
    init_tracing();

    let mut supplier = Supplier::new(NewSupplier::new(SupplierId::generate(), "Acme Corp"))
        .expect("valid supplier");

    match supplier.set_contact_email("bad-email") {
        Err(DomainError::Validation { field, message }) => {
            assert_eq!(field, "contactEmail");
            assert_eq!(message, "contactEmail must be a valid email address");
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }

    let eur = Money::new(Decimal::from(10), Currency::Eur).expect("valid money");
    let usd = Money::new(Decimal::from(10), Currency::Usd).expect("valid money");
    assert_eq!(usd.add(&eur).unwrap_err().field(), "currency");
}

#[test]
fn identifiers_of_different_kinds_are_not_interchangeable() -> Result<()> {
    let raw = "7c9e6679-7425-40de-944b-e07fc1f90ae7";
    let supplier_id = SupplierId::new(raw)?;
    let product_id = ProductId::new(raw)?;
    assert!(supplier_id != product_id);
    assert_eq!(supplier_id.value(), product_id.value());
    Ok(())
}

#[test]
fn supplier_snapshot_round_trips_through_json() -> Result<()> {
    let supplier = Supplier::new(
        NewSupplier::new(SupplierId::generate(), "Northwind Traders")
            .with_contact_email("ap@northwind.example")
            .with_last_order_total_price(Money::new(Decimal::new(4200, 2), Currency::Gbp)?),
    )?;

    let json = serde_json::to_string(&supplier)?;
    let restored: Supplier = serde_json::from_str(&json)?;
    assert_eq!(restored, supplier);

    let placed_at = DateTime::parse("2023-10-05T14:48:00.000Z")?;
    assert_eq!(placed_at.to_iso_string(), "2023-10-05T14:48:00.000Z");
    Ok(())
}
