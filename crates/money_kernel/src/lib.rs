//! Money Kernel - Exact, currency-tagged monetary values
//!
//! This crate provides the building blocks for handling money safely:
//! - Currency units and currencies with validated definitions
//! - A registry resolving currencies by ISO code or symbol
//! - Money stored as integer subunits with rounding-aware arithmetic
//! - Parsing and formatting of money strings such as `-€1250.15`

pub mod unit;
pub mod currency;
pub mod registry;
pub mod rounding;
pub mod money;
pub mod parser;
pub mod config;
pub mod telemetry;
pub mod error;

pub use unit::{Subunit, Superunit};
pub use currency::{Currency, CurrencyError};
pub use registry::{CurrencyRegistry, CurrencyRegistryBuilder};
pub use rounding::RoundingMode;
pub use money::{Money, MoneyError};
pub use config::{CurrencyDefinition, KernelConfig};
pub use error::CoreError;
