//! Core error types used across the kernel

use thiserror::Error;
use crate::currency::CurrencyError;
use crate::money::MoneyError;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Currency error: {0}")]
    Currency(#[from] CurrencyError),

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn configuration(message: impl Into<String>) -> Self {
        CoreError::Configuration(message.into())
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(error: config::ConfigError) -> Self {
        CoreError::Configuration(error.to_string())
    }
}
