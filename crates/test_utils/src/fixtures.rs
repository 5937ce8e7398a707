//! Pre-built Test Fixtures
//!
//! Provides ready-to-use currencies and money values. Fixture currencies are
//! shared, so money built from the same fixture compares equal.

use money_kernel::{Currency, CurrencyRegistry, Money, Subunit, Superunit};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

static EURO: Lazy<Arc<Currency>> = Lazy::new(|| Arc::new(Currency::EURO));
static US_DOLLAR: Lazy<Arc<Currency>> = Lazy::new(|| Arc::new(Currency::US_DOLLAR));
static KORUNA: Lazy<Arc<Currency>> = Lazy::new(|| Arc::new(Currency::KORUNA_CESKA));

/// Fixture for currency test data
pub struct CurrencyFixtures;

impl CurrencyFixtures {
    pub fn euro() -> Arc<Currency> {
        Arc::clone(&EURO)
    }

    pub fn us_dollar() -> Arc<Currency> {
        Arc::clone(&US_DOLLAR)
    }

    pub fn koruna() -> Arc<Currency> {
        Arc::clone(&KORUNA)
    }

    /// Pound sterling, which is not a built-in currency
    pub fn pound() -> Currency {
        Currency::new(
            Superunit::new("GBP", "£").expect("valid GBP unit"),
            Subunit::new("penny", "p", 100).expect("valid penny unit"),
        )
    }

    /// A currency without a minor unit (fraction 1)
    pub fn whole_only() -> Currency {
        Currency::new(
            Superunit::new("XWO", "W").expect("valid XWO unit"),
            Subunit::new("whole", "w", 1).expect("valid whole unit"),
        )
    }

    /// A currency with three decimal places (fraction 1000)
    pub fn three_places() -> Currency {
        Currency::new(
            Superunit::new("KWD", "KD").expect("valid KWD unit"),
            Subunit::new("fils", "f", 1000).expect("valid fils unit"),
        )
    }

    /// Registry with the built-ins plus the pound
    pub fn extended_registry() -> CurrencyRegistry {
        CurrencyRegistry::builder()
            .register(Self::pound())
            .expect("pound does not clash with built-ins")
            .with_builtin()
            .build()
    }
}

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Creates a EUR amount from a decimal
    pub fn eur(amount: Decimal) -> Money {
        Money::of(amount, CurrencyFixtures::euro()).expect("amount fits in subunits")
    }

    /// Creates a USD amount from a decimal
    pub fn usd(amount: Decimal) -> Money {
        Money::of(amount, CurrencyFixtures::us_dollar()).expect("amount fits in subunits")
    }

    /// Creates a standard EUR amount for testing
    pub fn eur_100() -> Money {
        Self::eur(dec!(100.00))
    }

    /// Creates a USD amount for currency mismatch tests
    pub fn usd_100() -> Money {
        Self::usd(dec!(100.00))
    }

    /// Creates a zero amount
    pub fn eur_zero() -> Money {
        Money::zero(CurrencyFixtures::euro())
    }

    /// Creates a negative amount for refund scenarios
    pub fn eur_refund() -> Money {
        Self::eur(dec!(-1250.15))
    }
}
