//! Currency unit descriptors
//!
//! A currency is described by two units: the major unit ([`Superunit`], e.g. the
//! euro) identified by its ISO 4217 code, and the minor unit ([`Subunit`], e.g.
//! the cent) which also fixes how many minor units make up one major unit.

use serde::Serialize;
use std::borrow::Cow;

use crate::currency::CurrencyError;

/// Minor units per major unit that a [`Subunit`] may declare
pub const ALLOWED_FRACTIONS: [u32; 4] = [1, 10, 100, 1000];

/// The major unit of a currency, e.g. `EUR` / `€`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Superunit {
    code: Cow<'static, str>,
    symbol: Cow<'static, str>,
}

impl Superunit {
    /// Creates a major unit, uppercasing the code first
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::InvalidUnit` if the code is not exactly three
    /// Latin letters or the symbol is empty.
    pub fn new(code: impl AsRef<str>, symbol: impl Into<String>) -> Result<Self, CurrencyError> {
        let code = code.as_ref().to_uppercase();
        let symbol = symbol.into();

        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(CurrencyError::InvalidUnit(format!(
                "currency code \"{code}\" must consist of exactly three letters"
            )));
        }
        if symbol.is_empty() {
            return Err(CurrencyError::InvalidUnit(format!(
                "currency {code} must have a non-empty symbol"
            )));
        }

        Ok(Self {
            code: Cow::Owned(code),
            symbol: Cow::Owned(symbol),
        })
    }

    /// Builds a unit from literals already known to be valid
    pub(crate) const fn from_static(code: &'static str, symbol: &'static str) -> Self {
        Self {
            code: Cow::Borrowed(code),
            symbol: Cow::Borrowed(symbol),
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the display symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

/// The minor unit of a currency, e.g. `cent` / `c` with 100 per euro
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Subunit {
    code: Cow<'static, str>,
    symbol: Cow<'static, str>,
    fraction: u32,
}

impl Subunit {
    /// Creates a minor unit
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::InvalidUnit` if the name or symbol is empty, or
    /// if the fraction is not one of [`ALLOWED_FRACTIONS`].
    pub fn new(
        code: impl Into<String>,
        symbol: impl Into<String>,
        fraction: u32,
    ) -> Result<Self, CurrencyError> {
        let code = code.into();
        let symbol = symbol.into();

        if code.is_empty() {
            return Err(CurrencyError::InvalidUnit(
                "subunit name must not be empty".to_string(),
            ));
        }
        if symbol.is_empty() {
            return Err(CurrencyError::InvalidUnit(format!(
                "subunit {code} must have a non-empty symbol"
            )));
        }
        if !ALLOWED_FRACTIONS.contains(&fraction) {
            return Err(CurrencyError::InvalidUnit(format!(
                "subunit fraction {fraction} must be one of {ALLOWED_FRACTIONS:?}"
            )));
        }

        Ok(Self {
            code: Cow::Owned(code),
            symbol: Cow::Owned(symbol),
            fraction,
        })
    }

    pub(crate) const fn from_static(
        code: &'static str,
        symbol: &'static str,
        fraction: u32,
    ) -> Self {
        Self {
            code: Cow::Borrowed(code),
            symbol: Cow::Borrowed(symbol),
            fraction,
        }
    }

    /// Returns the subunit name, e.g. "cent"
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns how many subunits make up one major unit
    pub fn fraction(&self) -> u32 {
        self.fraction
    }

    /// Returns the number of decimal places, i.e. log10 of the fraction
    pub fn precision(&self) -> u32 {
        self.fraction.ilog10()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superunit_uppercases_code() {
        let unit = Superunit::new("eur", "€").unwrap();
        assert_eq!(unit.code(), "EUR");
        assert_eq!(unit.symbol(), "€");
    }

    #[test]
    fn test_superunit_rejects_bad_codes() {
        for code in ["", "EU", "EURO", "E1R", "€UR", "E R"] {
            assert!(
                matches!(Superunit::new(code, "€"), Err(CurrencyError::InvalidUnit(_))),
                "code {code:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_superunit_rejects_empty_symbol() {
        assert!(matches!(
            Superunit::new("EUR", ""),
            Err(CurrencyError::InvalidUnit(_))
        ));
    }

    #[test]
    fn test_subunit_precision() {
        for (precision, fraction) in [(0, 1), (1, 10), (2, 100), (3, 1000)] {
            let subunit = Subunit::new("cent", "c", fraction).unwrap();
            assert_eq!(subunit.precision(), precision);
        }
    }

    #[test]
    fn test_subunit_rejects_fraction_out_of_range() {
        for fraction in [0, 2, 50, 10_000] {
            assert!(Subunit::new("cent", "c", fraction).is_err());
        }
    }

    #[test]
    fn test_static_units_match_validated_units() {
        assert_eq!(
            Superunit::from_static("EUR", "€"),
            Superunit::new("EUR", "€").unwrap()
        );
        assert_eq!(
            Subunit::from_static("cent", "c", 100),
            Subunit::new("cent", "c", 100).unwrap()
        );
    }
}
