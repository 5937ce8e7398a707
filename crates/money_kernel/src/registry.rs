//! Currency Registry
//!
//! Maps currency codes and symbols to shared [`Currency`] values. A registry is
//! an ordinary value: build it once at startup and hand it to whatever needs
//! lookups or money-string parsing. It is read-only after construction and can
//! be shared across threads.
//!
//! # Usage
//!
//! ```rust
//! use money_kernel::{Currency, CurrencyRegistry};
//!
//! let registry = CurrencyRegistry::builtin();
//! let euro = registry.lookup_by_code("eur").unwrap();
//! assert_eq!(*euro, Currency::EURO);
//!
//! let price = registry.parse_money("-€1250.15").unwrap();
//! assert_eq!(price.to_string(), "-€1250.15");
//! ```
//!
//! # Custom currencies
//!
//! ```rust
//! use money_kernel::{Currency, CurrencyRegistry, Subunit, Superunit};
//!
//! let pound = Currency::new(
//!     Superunit::new("GBP", "£").unwrap(),
//!     Subunit::new("penny", "p", 100).unwrap(),
//! );
//! let registry = CurrencyRegistry::builder()
//!     .register(pound).unwrap()
//!     .with_builtin()
//!     .build();
//! assert!(registry.contains_code("GBP"));
//! ```
//!
//! A registry also carries the rounding mode used by [`CurrencyRegistry::multiply`]
//! and [`CurrencyRegistry::divide`]. It is half-up unless configured otherwise.

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::KernelConfig;
use crate::currency::{Currency, CurrencyError};
use crate::error::CoreError;
use crate::money::{Money, MoneyError};
use crate::parser;
use crate::rounding::RoundingMode;

/// Lookup table of supported currencies, keyed by code and by symbol
#[derive(Debug, Clone)]
pub struct CurrencyRegistry {
    by_code: HashMap<String, Arc<Currency>>,
    by_symbol: HashMap<String, Arc<Currency>>,
    default_rounding: RoundingMode,
}

impl CurrencyRegistry {
    /// Creates a registry holding the built-in currencies (CZK, EUR, USD)
    pub fn builtin() -> Self {
        Self::builder().with_builtin().build()
    }

    /// Starts an empty registry builder
    pub fn builder() -> CurrencyRegistryBuilder {
        CurrencyRegistryBuilder::default()
    }

    /// Builds a registry from configuration
    ///
    /// Configured currencies are registered first, so they take precedence
    /// over built-ins sharing a code or symbol. The configured rounding mode
    /// becomes the registry's default.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Currency` if a configured currency is invalid or
    /// clashes with another configured currency.
    pub fn from_config(config: &KernelConfig) -> Result<Self, CoreError> {
        let mut builder = Self::builder().with_default_rounding(config.default_rounding);
        for definition in &config.currencies {
            builder = Currency::try_from(definition)
                .and_then(|currency| builder.register(currency))
                .map_err(|e| {
                    warn!(code = %definition.code, error = %e, "Rejected configured currency");
                    e
                })?;
        }
        if config.include_builtin {
            builder = builder.with_builtin();
        }

        let registry = builder.build();
        info!(
            currencies = registry.len(),
            configured = config.currencies.len(),
            rounding = ?registry.default_rounding,
            "Currency registry built from configuration"
        );
        Ok(registry)
    }

    /// Looks up a currency by ISO code, ignoring case
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnsupportedCode` if the code is not registered.
    pub fn lookup_by_code(&self, code: &str) -> Result<Arc<Currency>, CurrencyError> {
        self.by_code
            .get(&code.to_uppercase())
            .cloned()
            .ok_or_else(|| {
                debug!(code, "Unsupported currency code");
                CurrencyError::UnsupportedCode(code.to_string())
            })
    }

    /// Looks up a currency by its exact symbol
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnsupportedSymbol` if the symbol is not registered.
    pub fn lookup_by_symbol(&self, symbol: &str) -> Result<Arc<Currency>, CurrencyError> {
        self.by_symbol.get(symbol).cloned().ok_or_else(|| {
            debug!(symbol, "Unsupported currency symbol");
            CurrencyError::UnsupportedSymbol(symbol.to_string())
        })
    }

    /// Parses a money string such as `+€800.15`
    pub fn parse_money(&self, input: &str) -> Result<Money, MoneyError> {
        parser::parse_money(input, self)
    }

    /// Rounding mode applied when a caller does not pick one
    pub fn default_rounding(&self) -> RoundingMode {
        self.default_rounding
    }

    /// Multiplies money using the registry's default rounding mode
    pub fn multiply(&self, money: &Money, factor: Decimal) -> Result<Money, MoneyError> {
        money.multiply(factor, self.default_rounding)
    }

    /// Divides money using the registry's default rounding mode
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::DivisionByZero` for a zero divisor.
    pub fn divide(&self, money: &Money, divisor: Decimal) -> Result<Money, MoneyError> {
        money.divide(divisor, self.default_rounding)
    }

    /// Returns true if a currency with this code is registered
    pub fn contains_code(&self, code: &str) -> bool {
        self.by_code.contains_key(&code.to_uppercase())
    }

    /// Returns the registered codes in alphabetical order
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.by_code.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Builder for [`CurrencyRegistry`]
#[derive(Debug, Default)]
pub struct CurrencyRegistryBuilder {
    by_code: HashMap<String, Arc<Currency>>,
    by_symbol: HashMap<String, Arc<Currency>>,
    default_rounding: RoundingMode,
}

impl CurrencyRegistryBuilder {
    /// Sets the rounding mode used by the registry's `multiply` and `divide`
    pub fn with_default_rounding(mut self, rounding: RoundingMode) -> Self {
        self.default_rounding = rounding;
        self
    }

    /// Registers a currency under its code and symbol
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::DuplicateCode` or `CurrencyError::DuplicateSymbol`
    /// if either key is already taken.
    pub fn register(mut self, currency: Currency) -> Result<Self, CurrencyError> {
        if self.by_code.contains_key(currency.code()) {
            return Err(CurrencyError::DuplicateCode(currency.code().to_string()));
        }
        if self.by_symbol.contains_key(currency.symbol()) {
            return Err(CurrencyError::DuplicateSymbol(currency.symbol().to_string()));
        }

        self.insert(currency);
        Ok(self)
    }

    /// Adds the built-in currencies whose code and symbol are still free
    pub fn with_builtin(mut self) -> Self {
        for currency in Currency::builtin() {
            if self.by_code.contains_key(currency.code())
                || self.by_symbol.contains_key(currency.symbol())
            {
                debug!(code = currency.code(), "Built-in currency shadowed");
                continue;
            }
            self.insert(currency);
        }
        self
    }

    fn insert(&mut self, currency: Currency) {
        let code = currency.code().to_string();
        let symbol = currency.symbol().to_string();
        let currency = Arc::new(currency);

        self.by_symbol.insert(symbol, Arc::clone(&currency));
        self.by_code.insert(code, currency);
    }

    pub fn build(self) -> CurrencyRegistry {
        CurrencyRegistry {
            by_code: self.by_code,
            by_symbol: self.by_symbol,
            default_rounding: self.default_rounding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{Subunit, Superunit};

    fn pound() -> Currency {
        Currency::new(
            Superunit::new("GBP", "£").unwrap(),
            Subunit::new("penny", "p", 100).unwrap(),
        )
    }

    #[test]
    fn test_builtin_registry() {
        let registry = CurrencyRegistry::builtin();
        assert_eq!(registry.codes(), vec!["CZK", "EUR", "USD"]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.default_rounding(), RoundingMode::HalfUp);
    }

    #[test]
    fn test_default_rounding_drives_arithmetic() {
        let registry = CurrencyRegistry::builder()
            .with_builtin()
            .with_default_rounding(RoundingMode::HalfEven)
            .build();
        let five_cents = Money::of_subunit(5, Currency::EURO);

        let half = registry.multiply(&five_cents, Decimal::new(5, 1)).unwrap();
        assert_eq!(half.amount_in_subunit(), 2);
        let halved = registry.divide(&five_cents, Decimal::from(2)).unwrap();
        assert_eq!(halved.amount_in_subunit(), 2);
        assert_eq!(
            registry.divide(&five_cents, Decimal::ZERO),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_lookup_by_code_is_case_insensitive() {
        let registry = CurrencyRegistry::default();
        assert_eq!(*registry.lookup_by_code("usd").unwrap(), Currency::US_DOLLAR);
        assert_eq!(*registry.lookup_by_code("Czk").unwrap(), Currency::KORUNA_CESKA);
    }

    #[test]
    fn test_lookups_share_one_instance() {
        let registry = CurrencyRegistry::builtin();
        let by_code = registry.lookup_by_code("EUR").unwrap();
        let by_symbol = registry.lookup_by_symbol("€").unwrap();
        assert!(Arc::ptr_eq(&by_code, &by_symbol));
    }

    #[test]
    fn test_unknown_lookups() {
        let registry = CurrencyRegistry::builtin();
        assert_eq!(
            registry.lookup_by_code("SKK"),
            Err(CurrencyError::UnsupportedCode("SKK".to_string()))
        );
        assert_eq!(
            registry.lookup_by_symbol("Sk"),
            Err(CurrencyError::UnsupportedSymbol("Sk".to_string()))
        );
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let builder = CurrencyRegistry::builder().register(pound()).unwrap();
        assert!(matches!(
            builder.register(pound()),
            Err(CurrencyError::DuplicateCode(code)) if code == "GBP"
        ));

        let fake_euro = Currency::new(
            Superunit::new("XEU", "€").unwrap(),
            Subunit::new("cent", "c", 100).unwrap(),
        );
        let builder = CurrencyRegistry::builder().with_builtin();
        assert!(matches!(
            builder.register(fake_euro),
            Err(CurrencyError::DuplicateSymbol(symbol)) if symbol == "€"
        ));
    }

    #[test]
    fn test_registered_currency_shadows_builtin() {
        let milli_euro = Currency::new(
            Superunit::new("EUR", "€").unwrap(),
            Subunit::new("mill", "m", 1000).unwrap(),
        );
        let registry = CurrencyRegistry::builder()
            .register(milli_euro.clone())
            .unwrap()
            .with_builtin()
            .build();

        assert_eq!(*registry.lookup_by_symbol("€").unwrap(), milli_euro);
        assert_eq!(registry.len(), 3);
    }
}
