//! Money types with exact fixed-point arithmetic
//!
//! A [`Money`] value stores its amount as an integer count of the currency's
//! subunits (e.g. cents). Comparison and arithmetic work on that integer only;
//! the decimal major-unit amount is derived for display and never fed back
//! into calculations.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::sync::Arc;
use thiserror::Error;

use crate::currency::{Currency, CurrencyError};
use crate::parser;
use crate::registry::CurrencyRegistry;
use crate::rounding::RoundingMode;

/// Errors that can occur during money operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: operations are allowed only for the same currency ({0} => {1})")]
    CurrencyMismatch(String, String),

    #[error("Money string \"{input}\" is invalid, expected e.g. $1500.00, -$1250.15 or +$800.15")]
    InvalidMoneyString {
        input: String,
        #[source]
        source: Option<CurrencyError>,
    },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow during calculation")]
    Overflow,
}

impl MoneyError {
    pub(crate) fn invalid_money_string(input: &str) -> Self {
        MoneyError::InvalidMoneyString {
            input: input.to_string(),
            source: None,
        }
    }
}

/// A monetary amount with associated currency
///
/// The currency is shared, so cloning a `Money` is cheap. Two values are
/// operable together only when their currencies are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Money {
    amount_in_subunit: i64,
    currency: Arc<Currency>,
}

impl Money {
    /// Creates Money from a decimal amount in major units
    ///
    /// The amount is truncated toward zero to whole subunits, so `1.999` EUR
    /// becomes 199 cents. Use [`Money::of_rounded`] to round instead.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the amount does not fit in `i64` subunits.
    pub fn of(amount: Decimal, currency: impl Into<Arc<Currency>>) -> Result<Self, MoneyError> {
        let currency = currency.into();
        let scaled = Self::scale(amount, &currency)?;
        let amount_in_subunit = scaled.trunc().to_i64().ok_or(MoneyError::Overflow)?;

        Ok(Self {
            amount_in_subunit,
            currency,
        })
    }

    /// Creates Money from a decimal amount, rounding to whole subunits
    pub fn of_rounded(
        amount: Decimal,
        currency: impl Into<Arc<Currency>>,
        rounding: RoundingMode,
    ) -> Result<Self, MoneyError> {
        let currency = currency.into();
        let amount_in_subunit = rounding.round_to_subunits(Self::scale(amount, &currency)?)?;

        Ok(Self {
            amount_in_subunit,
            currency,
        })
    }

    /// Creates Money from an exact integer amount of subunits (e.g., cents)
    pub fn of_subunit(amount: i64, currency: impl Into<Arc<Currency>>) -> Self {
        Self {
            amount_in_subunit: amount,
            currency: currency.into(),
        }
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: impl Into<Arc<Currency>>) -> Self {
        Self::of_subunit(0, currency)
    }

    /// Parses a string such as `-€1250.15` using the registry's symbols
    pub fn parse(input: &str, registry: &CurrencyRegistry) -> Result<Self, MoneyError> {
        parser::parse_money(input, registry)
    }

    fn scale(amount: Decimal, currency: &Currency) -> Result<Decimal, MoneyError> {
        amount
            .checked_mul(Decimal::from(currency.fraction()))
            .ok_or(MoneyError::Overflow)
    }

    /// Returns the amount in major units, e.g. `12.50` for 1250 cents
    pub fn amount(&self) -> Decimal {
        Decimal::new(self.amount_in_subunit, self.currency.precision())
    }

    /// Returns the exact amount in subunits
    pub fn amount_in_subunit(&self) -> i64 {
        self.amount_in_subunit
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the shared currency handle
    pub fn shared_currency(&self) -> Arc<Currency> {
        Arc::clone(&self.currency)
    }

    /// Returns true if both values are in the same currency
    pub fn is_comparable(&self, other: &Money) -> bool {
        self.currency == other.currency
    }

    fn ensure_comparable(&self, other: &Money) -> Result<(), MoneyError> {
        if self.is_comparable(other) {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch(
                self.currency.code().to_string(),
                other.currency.code().to_string(),
            ))
        }
    }

    fn with_subunits(&self, amount_in_subunit: i64) -> Self {
        Self::of_subunit(amount_in_subunit, Arc::clone(&self.currency))
    }

    /// Three-way comparison of the subunit amounts
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` if the currencies differ.
    pub fn compare(&self, other: &Money) -> Result<Ordering, MoneyError> {
        self.ensure_comparable(other)?;
        Ok(self.amount_in_subunit.cmp(&other.amount_in_subunit))
    }

    pub fn equals(&self, other: &Money) -> Result<bool, MoneyError> {
        Ok(self.compare(other)?.is_eq())
    }

    pub fn greater_than(&self, other: &Money) -> Result<bool, MoneyError> {
        Ok(self.compare(other)?.is_gt())
    }

    pub fn greater_than_or_equal_to(&self, other: &Money) -> Result<bool, MoneyError> {
        Ok(self.compare(other)?.is_ge())
    }

    pub fn less_than(&self, other: &Money) -> Result<bool, MoneyError> {
        Ok(self.compare(other)?.is_lt())
    }

    pub fn less_than_or_equal_to(&self, other: &Money) -> Result<bool, MoneyError> {
        Ok(self.compare(other)?.is_le())
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount_in_subunit == 0
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount_in_subunit > 0
    }

    /// Returns true if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.amount_in_subunit < 0
    }

    /// Checked addition that returns an error on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_comparable(other)?;
        let sum = self
            .amount_in_subunit
            .checked_add(other.amount_in_subunit)
            .ok_or(MoneyError::Overflow)?;
        Ok(self.with_subunits(sum))
    }

    /// Checked subtraction that returns an error on currency mismatch
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_comparable(other)?;
        let difference = self
            .amount_in_subunit
            .checked_sub(other.amount_in_subunit)
            .ok_or(MoneyError::Overflow)?;
        Ok(self.with_subunits(difference))
    }

    /// Multiplies by a scalar, rounding the result to whole subunits
    pub fn multiply(&self, factor: Decimal, rounding: RoundingMode) -> Result<Money, MoneyError> {
        let product = Decimal::from(self.amount_in_subunit)
            .checked_mul(factor)
            .ok_or(MoneyError::Overflow)?;
        Ok(self.with_subunits(rounding.round_to_subunits(product)?))
    }

    /// Multiplies by a scalar using half-up rounding
    pub fn multiply_default(&self, factor: Decimal) -> Result<Money, MoneyError> {
        self.multiply(factor, RoundingMode::default())
    }

    /// Divides by a scalar, rounding the result to whole subunits
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::DivisionByZero` for a zero divisor.
    pub fn divide(&self, divisor: Decimal, rounding: RoundingMode) -> Result<Money, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let quotient = Decimal::from(self.amount_in_subunit)
            .checked_div(divisor)
            .ok_or(MoneyError::Overflow)?;
        Ok(self.with_subunits(rounding.round_to_subunits(quotient)?))
    }

    /// Divides by a scalar using half-up rounding
    pub fn divide_default(&self, divisor: Decimal) -> Result<Money, MoneyError> {
        self.divide(divisor, RoundingMode::default())
    }

    /// Rounds to a whole number of major units, e.g. €2.35 to €2.00
    pub fn round_to_nearest(&self, rounding: RoundingMode) -> Result<Money, MoneyError> {
        Money::of(rounding.round(self.amount()), self.shared_currency())
    }

    /// Returns the absolute value
    ///
    /// `i64::MIN` subunits saturate to `i64::MAX`; use [`Money::checked_abs`]
    /// to get an error instead.
    pub fn abs(&self) -> Money {
        self.with_subunits(self.amount_in_subunit.saturating_abs())
    }

    /// Returns the absolute value
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` for `i64::MIN` subunits.
    pub fn checked_abs(&self) -> Result<Money, MoneyError> {
        let amount = self
            .amount_in_subunit
            .checked_abs()
            .ok_or(MoneyError::Overflow)?;
        Ok(self.with_subunits(amount))
    }

    /// Flips the sign
    ///
    /// `i64::MIN` subunits saturate to `i64::MAX`; use [`Money::checked_negate`]
    /// to get an error instead.
    pub fn negate(&self) -> Money {
        self.with_subunits(self.amount_in_subunit.saturating_neg())
    }

    /// Flips the sign
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` for `i64::MIN` subunits.
    pub fn checked_negate(&self) -> Result<Money, MoneyError> {
        let amount = self
            .amount_in_subunit
            .checked_neg()
            .ok_or(MoneyError::Overflow)?;
        Ok(self.with_subunits(amount))
    }

    /// Returns the negative of the absolute value; zero and negative amounts
    /// are returned unchanged
    pub fn to_negative(&self) -> Money {
        if self.is_positive() {
            self.negate()
        } else {
            self.clone()
        }
    }

    /// Allocates the money into n equal parts, handling remainders
    /// The remainder is distributed among the first allocations
    pub fn allocate(&self, n: u32) -> Result<Vec<Money>, MoneyError> {
        if n == 0 {
            return Err(MoneyError::InvalidAmount(
                "Cannot allocate to zero parts".to_string(),
            ));
        }

        let parts = i64::from(n);
        let base_amount = self.amount_in_subunit / parts;
        let remainder = (self.amount_in_subunit % parts).unsigned_abs();
        let step = self.amount_in_subunit.signum();

        let allocations = (0..u64::from(n))
            .map(|i| {
                if i < remainder {
                    self.with_subunits(base_amount + step)
                } else {
                    self.with_subunits(base_amount)
                }
            })
            .collect();

        Ok(allocations)
    }

    /// Allocates money according to given ratios
    /// Returns allocations in the same order as the ratios
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` if the ratios are empty, sum to
    /// zero or include a negative ratio.
    pub fn allocate_by_ratios(&self, ratios: &[Decimal]) -> Result<Vec<Money>, MoneyError> {
        if ratios.is_empty() {
            return Err(MoneyError::InvalidAmount("Empty ratios".to_string()));
        }
        if let Some(ratio) = ratios.iter().find(|ratio| **ratio < Decimal::ZERO) {
            return Err(MoneyError::InvalidAmount(format!("Negative ratio {ratio}")));
        }

        let total_ratio: Decimal = ratios.iter().sum();
        if total_ratio.is_zero() {
            return Err(MoneyError::InvalidAmount("Total ratio is zero".to_string()));
        }

        let total = Decimal::from(self.amount_in_subunit);
        let mut allocated = Money::zero(self.shared_currency());
        let mut allocations = Vec::with_capacity(ratios.len());

        for (i, ratio) in ratios.iter().enumerate() {
            if i == ratios.len() - 1 {
                // Last allocation gets the remainder to ensure sum equals original
                allocations.push(self.checked_sub(&allocated)?);
            } else {
                let share = total
                    .checked_mul(*ratio)
                    .and_then(|scaled| scaled.checked_div(total_ratio))
                    .ok_or(MoneyError::Overflow)?;
                let allocation =
                    self.with_subunits(RoundingMode::HalfEven.round_to_subunits(share)?);
                allocated = allocated.checked_add(&allocation)?;
                allocations.push(allocation);
            }
        }

        Ok(allocations)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let dp = self.currency.precision();
        write!(
            f,
            "{}{}{:.dp$}",
            sign,
            self.currency.symbol(),
            self.amount().abs(),
            dp = dp as usize
        )
    }
}

impl PartialOrd for Money {
    /// Orders amounts of the same currency; other currencies are unordered
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Neg for &Money {
    type Output = Money;

    fn neg(self) -> Money {
        self.negate()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Money", 3)?;
        state.serialize_field("amount", &self.amount())?;
        state.serialize_field("amount_in_subunit", &self.amount_in_subunit)?;
        state.serialize_field("currency", self.currency.code())?;
        state.end()
    }
}
