//! Logging setup for applications embedding the kernel
//!
//! The kernel itself only emits `tracing` events; nothing is printed until the
//! host installs a subscriber, either its own or the one built here.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::CoreError;

/// Installs a global fmt subscriber filtered at the given level
///
/// `RUST_LOG` overrides `log_level` when set. Falls back to `info` if neither
/// parses as a filter.
///
/// # Errors
///
/// Returns `CoreError::Configuration` if a global subscriber is already set.
pub fn init_tracing(log_level: &str) -> Result<(), CoreError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| CoreError::configuration(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails_instead_of_panicking() {
        let _ = init_tracing("debug");
        assert!(matches!(
            init_tracing("debug"),
            Err(CoreError::Configuration(_))
        ));
    }
}
