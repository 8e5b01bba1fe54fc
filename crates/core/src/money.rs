//! Money value object: a non-negative amount in a single currency.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Number of decimal places every amount is stored with.
pub const MONEY_SCALE: u32 = 2;

/// Immutable monetary value.
///
/// The amount is rounded to [`MONEY_SCALE`] places on every construction using
/// round-half-away-from-zero, which for a non-negative domain is the familiar
/// round-half-up. Arithmetic returns new instances and re-rounds, so repeated
/// additions never accumulate sub-cent drift.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRecord", into = "MoneyRecord")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::validation("amount", "amount must be positive"));
        }
        Ok(Self {
            amount: round_amount(amount),
            currency,
        })
    }

    /// Construct from a binary float; NaN and infinities are rejected.
    pub fn from_f64(amount: f64, currency: Currency) -> DomainResult<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::validation("amount", "amount must be positive"));
        }
        let amount = Decimal::try_from(amount)
            .map_err(|e| DomainError::validation("amount", format!("amount out of range: {e}")))?;
        Self::new(amount, currency)
    }

    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: round_amount(Decimal::ZERO),
            currency,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Sum of two amounts in the same currency.
    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        if self.currency != other.currency {
            return Err(DomainError::validation(
                "currency",
                format!(
                    "cannot add {} to {}: currencies must match",
                    other.currency, self.currency
                ),
            ));
        }
        let sum = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| DomainError::validation("amount", "amount overflow"))?;
        Money::new(sum, self.currency)
    }

    /// Scale by a non-negative factor.
    pub fn multiply(&self, multiplier: Decimal) -> DomainResult<Money> {
        if multiplier.is_sign_negative() && !multiplier.is_zero() {
            return Err(invalid_multiplier());
        }
        let product = self
            .amount
            .checked_mul(multiplier)
            .ok_or_else(|| DomainError::validation("amount", "amount overflow"))?;
        Money::new(product, self.currency)
    }

    pub fn multiply_f64(&self, multiplier: f64) -> DomainResult<Money> {
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(invalid_multiplier());
        }
        let multiplier = Decimal::try_from(multiplier).map_err(|_| invalid_multiplier())?;
        self.multiply(multiplier)
    }
}

impl ValueObject for Money {}

fn invalid_multiplier() -> DomainError {
    DomainError::validation("multiplier", "multiplier must be a non-negative finite number")
}

fn round_amount(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        // Drop any negative-zero sign carried in from the input.
        rounded = Decimal::ZERO;
    }
    rounded.rescale(MONEY_SCALE);
    rounded
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {:.2}", self.currency, self.amount)
    }
}

/// Wire shape: `{ "amount": "100.00", "currency": "USD" }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MoneyRecord {
    amount: Decimal,
    currency: Currency,
}

impl TryFrom<MoneyRecord> for Money {
    type Error = DomainError;

    fn try_from(value: MoneyRecord) -> Result<Self, Self::Error> {
        Money::new(value.amount, value.currency)
    }
}

impl From<Money> for MoneyRecord {
    fn from(value: Money) -> Self {
        Self {
            amount: value.amount,
            currency: value.currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn usd(amount: i64) -> Money {
        Money::new(Decimal::from(amount), Currency::Usd).unwrap()
    }

    #[test]
    fn add_same_currency() {
        let sum = usd(100).add(&usd(50)).unwrap();
        assert_eq!(sum, usd(150));
    }

    #[test]
    fn add_rejects_currency_mismatch() {
        let eur = Money::new(Decimal::from(50), Currency::Eur).unwrap();
        let err = usd(100).add(&eur).unwrap_err();
        assert_eq!(err.field(), "currency");
    }

    #[test]
    fn add_leaves_operands_untouched() {
        let a = usd(100);
        let b = usd(50);
        let _ = a.add(&b).unwrap();
        assert_eq!(a, usd(100));
        assert_eq!(b, usd(50));
    }

    #[test]
    fn multiply_by_factor() {
        assert_eq!(usd(100).multiply(Decimal::from(2)).unwrap(), usd(200));
        assert_eq!(usd(100).multiply_f64(2.0).unwrap(), usd(200));
    }

    #[test]
    fn multiply_by_zero_yields_zero() {
        let zero = usd(100).multiply(Decimal::ZERO).unwrap();
        assert!(zero.is_zero());
        assert_eq!(zero, Money::zero(Currency::Usd));
    }

    #[test]
    fn multiply_rejects_negative_and_non_finite() {
        assert!(usd(100).multiply(Decimal::from(-1)).is_err());
        assert!(usd(100).multiply_f64(-1.0).is_err());
        assert!(usd(100).multiply_f64(f64::NAN).is_err());
        assert!(usd(100).multiply_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn negative_and_non_finite_amounts_are_rejected() {
        let err = Money::new(Decimal::from(-1), Currency::Usd).unwrap_err();
        assert_eq!(err.message(), "amount must be positive");
        assert!(Money::from_f64(-0.01, Currency::Usd).is_err());
        assert!(Money::from_f64(f64::NAN, Currency::Usd).is_err());
        assert!(Money::from_f64(f64::NEG_INFINITY, Currency::Usd).is_err());
    }

    #[test]
    fn zero_is_valid() {
        let zero = Money::from_f64(0.0, Currency::Gbp).unwrap();
        assert!(zero.is_zero());
        assert_eq!(zero.to_string(), "GBP 0.00");
    }

    #[test]
    fn rounds_half_up_to_two_places() {
        let m = Money::new(Decimal::new(10_005, 3), Currency::Usd).unwrap();
        assert_eq!(m.amount(), Decimal::new(1001, 2));
        let m = Money::new(Decimal::new(10_004, 3), Currency::Usd).unwrap();
        assert_eq!(m.amount(), Decimal::new(1000, 2));
    }

    #[test]
    fn repeated_adds_do_not_drift() {
        let dime = Money::from_f64(0.1, Currency::Usd).unwrap();
        let mut total = Money::zero(Currency::Usd);
        for _ in 0..10 {
            total = total.add(&dime).unwrap();
        }
        assert_eq!(total, usd(1));
    }

    #[test]
    fn display_uses_code_and_two_decimals() {
        assert_eq!(usd(100).to_string(), "USD 100.00");
        let jpy = Money::new(Decimal::new(12_345, 1), Currency::Jpy).unwrap();
        assert_eq!(jpy.to_string(), "JPY 1234.50");
    }

    #[test]
    fn equality_requires_same_currency() {
        let eur = Money::new(Decimal::from(100), Currency::Eur).unwrap();
        assert_ne!(usd(100), eur);
        assert_eq!(usd(100), Money::new(Decimal::new(10_000, 2), Currency::Usd).unwrap());
    }

    #[test]
    fn serde_validates_on_the_way_in() {
        let json = serde_json::to_value(usd(100)).unwrap();
        assert_eq!(json["currency"], "USD");
        let back: Money = serde_json::from_value(json).unwrap();
        assert_eq!(back, usd(100));

        let negative = serde_json::json!({ "amount": "-5.00", "currency": "USD" });
        assert!(serde_json::from_value::<Money>(negative).is_err());
        let bad_currency = serde_json::json!({ "amount": "5.00", "currency": "XXX" });
        assert!(serde_json::from_value::<Money>(bad_currency).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: the stored amount is the input rounded to two places.
        #[test]
        fn amount_is_rounded_to_two_places(mantissa in 0i64..1_000_000_000i64, scale in 0u32..6) {
            let raw = Decimal::new(mantissa, scale);
            let money = Money::new(raw, Currency::Usd).unwrap();
            let expected = raw.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            prop_assert_eq!(money.amount(), expected);
            prop_assert!(money.amount().scale() == MONEY_SCALE);
        }

        /// Property: addition is commutative and stays at two places.
        #[test]
        fn add_is_commutative(a in 0i64..10_000_000i64, b in 0i64..10_000_000i64) {
            let x = Money::new(Decimal::new(a, 2), Currency::Eur).unwrap();
            let y = Money::new(Decimal::new(b, 2), Currency::Eur).unwrap();
            prop_assert_eq!(x.add(&y).unwrap(), y.add(&x).unwrap());
            prop_assert_eq!(x.add(&y).unwrap().amount(), Decimal::new(a + b, 2));
        }
    }
}
