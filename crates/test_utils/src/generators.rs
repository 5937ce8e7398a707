//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use money_kernel::{Currency, Money, RoundingMode};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::fixtures::CurrencyFixtures;

/// Strategy for generating built-in and synthetic currencies
pub fn currency_strategy() -> impl Strategy<Value = Arc<Currency>> {
    prop_oneof![
        Just(CurrencyFixtures::euro()),
        Just(CurrencyFixtures::us_dollar()),
        Just(CurrencyFixtures::koruna()),
        Just(Arc::new(CurrencyFixtures::whole_only())),
        Just(Arc::new(CurrencyFixtures::three_places())),
    ]
}

/// Strategy for generating two distinct currencies
pub fn distinct_currencies_strategy() -> impl Strategy<Value = (Arc<Currency>, Arc<Currency>)> {
    (currency_strategy(), currency_strategy()).prop_filter("currencies must differ", |(a, b)| a != b)
}

/// Strategy for generating subunit fractions allowed by `Subunit`
pub fn fraction_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![Just(1u32), Just(10u32), Just(100u32), Just(1000u32)]
}

/// Strategy for generating every rounding mode
pub fn rounding_mode_strategy() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::HalfEven),
        Just(RoundingMode::HalfDown),
        Just(RoundingMode::HalfOdd),
        Just(RoundingMode::HalfUp),
    ]
}

/// Strategy for generating valid amount ranges in subunits
pub fn amount_subunit_strategy() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

/// Strategy for generating non-zero amounts in subunits
pub fn nonzero_amount_subunit_strategy() -> impl Strategy<Value = i64> {
    amount_subunit_strategy().prop_filter("amount must be non-zero", |amount| *amount != 0)
}

/// Strategy for generating valid Money values (can be negative)
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (amount_subunit_strategy(), currency_strategy())
        .prop_map(|(amount, currency)| Money::of_subunit(amount, currency))
}

/// Strategy for generating two Money values sharing a currency
pub fn same_currency_pair_strategy() -> impl Strategy<Value = (Money, Money)> {
    (amount_subunit_strategy(), amount_subunit_strategy(), currency_strategy()).prop_map(
        |(a, b, currency)| {
            (
                Money::of_subunit(a, Arc::clone(&currency)),
                Money::of_subunit(b, currency),
            )
        },
    )
}

/// Strategy for generating two Money values in different currencies
pub fn mismatched_pair_strategy() -> impl Strategy<Value = (Money, Money)> {
    (amount_subunit_strategy(), amount_subunit_strategy(), distinct_currencies_strategy())
        .prop_map(|(a, b, (first, second))| {
            (Money::of_subunit(a, first), Money::of_subunit(b, second))
        })
}

/// Strategy for generating positive Decimal factors with up to 4 decimal places
pub fn factor_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64, 0u32..4u32).prop_map(|(m, s)| Decimal::new(m, s))
}
