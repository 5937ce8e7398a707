//! Rounding of scaled amounts to whole subunits

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::money::MoneyError;

/// Tie-breaking rule used when a value lies exactly halfway between two integers
///
/// Values that are not ties always round to the nearest integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Ties go to the even neighbour (banker's rounding)
    HalfEven,
    /// Ties go towards zero
    HalfDown,
    /// Ties go to the odd neighbour
    HalfOdd,
    /// Ties go away from zero
    #[default]
    HalfUp,
}

impl RoundingMode {
    /// Rounds a value to an integer-valued decimal
    pub fn round(self, value: Decimal) -> Decimal {
        match self {
            RoundingMode::HalfEven => {
                value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            }
            RoundingMode::HalfDown => {
                value.round_dp_with_strategy(0, RoundingStrategy::MidpointTowardZero)
            }
            RoundingMode::HalfUp => {
                value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            }
            RoundingMode::HalfOdd => round_half_odd(value),
        }
    }

    /// Rounds a subunit-scaled value to a whole number of subunits
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the result does not fit in an `i64`.
    pub fn round_to_subunits(self, value: Decimal) -> Result<i64, MoneyError> {
        self.round(value).to_i64().ok_or(MoneyError::Overflow)
    }
}

fn round_half_odd(value: Decimal) -> Decimal {
    let truncated = value.trunc();
    if (value - truncated).abs() != dec!(0.5) {
        return value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    }

    if !(truncated % dec!(2)).is_zero() {
        truncated
    } else if value.is_sign_negative() {
        truncated - Decimal::ONE
    } else {
        truncated + Decimal::ONE
    }
}
