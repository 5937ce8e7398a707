//! Money string parsing
//!
//! Accepts an optional sign, a currency symbol of one to three characters and
//! a plain decimal number: `€1500.00`, `-€1250.15`, `+€800.15`. Grouping
//! separators, spaces and bare numbers are rejected outright.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

use crate::money::{Money, MoneyError};
use crate::registry::CurrencyRegistry;

static MONEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-])?([^0-9+-]{1,3})([0-9]+(?:\.[0-9]+)?)$")
        .expect("Invalid money string regex pattern")
});

/// Parses a money string, resolving its symbol through the registry
///
/// # Errors
///
/// Returns `MoneyError::InvalidMoneyString` if the input does not follow the
/// grammar or its symbol is unknown to the registry (the lookup error is kept
/// as the source).
pub fn parse_money(input: &str, registry: &CurrencyRegistry) -> Result<Money, MoneyError> {
    let Some(captures) = MONEY_PATTERN.captures(input) else {
        debug!(input, "Rejected money string");
        return Err(MoneyError::invalid_money_string(input));
    };

    let negative = captures.get(1).is_some_and(|sign| sign.as_str() == "-");
    let symbol = &captures[2];
    let digits = &captures[3];

    let currency = registry
        .lookup_by_symbol(symbol)
        .map_err(|source| MoneyError::InvalidMoneyString {
            input: input.to_string(),
            source: Some(source),
        })?;

    let amount = Decimal::from_str(digits).map_err(|e| {
        debug!(input, error = %e, "Money string amount out of range");
        MoneyError::invalid_money_string(input)
    })?;

    Money::of(if negative { -amount } else { amount }, currency)
}
