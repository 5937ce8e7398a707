//! Currencies composed of a major and a minor unit
//!
//! A [`Currency`] is a plain value: two currencies are the same currency when
//! both of their units are equal. Well-known currencies are provided as
//! constants; others can be defined at runtime from validated units.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::config::CurrencyDefinition;
use crate::unit::{Subunit, Superunit};

/// Errors raised while defining or looking up currencies
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("Invalid currency unit: {0}")]
    InvalidUnit(String),

    #[error("Currency code \"{0}\" is currently not supported")]
    UnsupportedCode(String),

    #[error("Currency symbol \"{0}\" is currently not supported")]
    UnsupportedSymbol(String),

    #[error("Currency code \"{0}\" is already registered")]
    DuplicateCode(String),

    #[error("Currency symbol \"{0}\" is already registered")]
    DuplicateSymbol(String),
}

/// A currency, e.g. the euro: `EUR` / `€` divided into 100 cents
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Currency {
    main_unit: Superunit,
    subunit: Subunit,
}

impl Currency {
    /// Euro, divided into 100 cents
    pub const EURO: Currency = Currency::new(
        Superunit::from_static("EUR", "€"),
        Subunit::from_static("cent", "c", 100),
    );

    /// US dollar, divided into 100 cents
    pub const US_DOLLAR: Currency = Currency::new(
        Superunit::from_static("USD", "$"),
        Subunit::from_static("cent", "c", 100),
    );

    /// Czech koruna, divided into 100 haléřů
    pub const KORUNA_CESKA: Currency = Currency::new(
        Superunit::from_static("CZK", "Kč"),
        Subunit::from_static("haler", "h", 100),
    );

    /// Creates a currency from its two units
    pub const fn new(main_unit: Superunit, subunit: Subunit) -> Self {
        Self { main_unit, subunit }
    }

    /// Returns every currency known without configuration
    pub fn builtin() -> [Currency; 3] {
        [Self::KORUNA_CESKA, Self::EURO, Self::US_DOLLAR]
    }

    pub fn main_unit(&self) -> &Superunit {
        &self.main_unit
    }

    pub fn subunit(&self) -> &Subunit {
        &self.subunit
    }

    /// Returns the ISO 4217 code of the major unit
    pub fn code(&self) -> &str {
        self.main_unit.code()
    }

    /// Returns the symbol of the major unit
    pub fn symbol(&self) -> &str {
        self.main_unit.symbol()
    }

    /// Returns the number of subunits per major unit
    pub fn fraction(&self) -> u32 {
        self.subunit.fraction()
    }

    /// Returns the number of decimal places amounts are shown with
    pub fn precision(&self) -> u32 {
        self.subunit.precision()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<&CurrencyDefinition> for Currency {
    type Error = CurrencyError;

    fn try_from(definition: &CurrencyDefinition) -> Result<Self, Self::Error> {
        Ok(Self::new(
            Superunit::new(&definition.code, definition.symbol.clone())?,
            Subunit::new(
                definition.subunit_code.clone(),
                definition.subunit_symbol.clone(),
                definition.fraction,
            )?,
        ))
    }
}
