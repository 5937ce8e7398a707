//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for money values that give
//! more meaningful error messages than standard assertions.

use money_kernel::Money;

/// Asserts that two Money values have the same currency and subunit amount
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ
pub fn assert_money_eq(actual: &Money, expected: &Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );
    assert_eq!(
        actual.amount_in_subunit(),
        expected.amount_in_subunit(),
        "Money amounts differ: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that a Money value is positive
pub fn assert_money_positive(money: &Money) {
    assert!(money.is_positive(), "Expected positive money, got {}", money);
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(money.is_zero(), "Expected zero money, got {}", money);
}

/// Asserts that a Money value is negative
pub fn assert_money_negative(money: &Money) {
    assert!(money.is_negative(), "Expected negative money, got {}", money);
}

/// Asserts that money values sum to a total
///
/// # Panics
///
/// Panics if the sum doesn't equal the total
pub fn assert_money_sum_equals(parts: &[Money], total: &Money) {
    let sum = parts.iter().fold(Money::zero(total.shared_currency()), |acc, m| {
        acc.checked_add(m).expect("Currency mismatch in sum")
    });

    assert_eq!(
        sum.amount_in_subunit(),
        total.amount_in_subunit(),
        "Sum of parts ({}) doesn't equal total ({})",
        sum,
        total
    );
}
