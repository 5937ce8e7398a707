//! Tests for money string parsing

use money_kernel::{Currency, CurrencyError, CurrencyRegistry, Money, MoneyError};
use rust_decimal_macros::dec;
use std::error::Error;

fn registry() -> CurrencyRegistry {
    CurrencyRegistry::builtin()
}

mod accepted {
    use super::*;

    #[test]
    fn test_parse_examples() {
        let registry = registry();
        for (input, expected) in [
            ("€1500.00", dec!(1500.00)),
            ("-€1250.15", dec!(-1250.15)),
            ("+€800.15", dec!(800.15)),
            ("€0", dec!(0)),
            ("€0.00", dec!(0)),
            ("-€0", dec!(0)),
            ("€1.25", dec!(1.25)),
            ("-€1.25", dec!(-1.25)),
            ("€1500", dec!(1500)),
        ] {
            let money = Money::parse(input, &registry).unwrap();
            assert_eq!(money.amount(), expected, "parsing {input:?}");
            assert_eq!(money.currency(), &Currency::EURO);
        }
    }

    #[test]
    fn test_parse_other_currencies() {
        let registry = registry();
        assert_eq!(registry.parse_money("$9.99").unwrap().currency().code(), "USD");
        assert_eq!(registry.parse_money("-Kč100").unwrap().amount_in_subunit(), -10000);
    }

    #[test]
    fn test_extra_fraction_digits_are_truncated() {
        let money = registry().parse_money("€1.999").unwrap();
        assert_eq!(money.amount_in_subunit(), 199);
    }
}

mod rejected {
    use super::*;

    #[test]
    fn test_invalid_strings() {
        let registry = registry();
        for input in ["0", "0.00", "125", "$1 250,00", "$1,250.50", "", "€", "€ 1", "1€", "€1.2.3"] {
            let result = Money::parse(input, &registry);
            assert!(
                matches!(result, Err(MoneyError::InvalidMoneyString { input: ref got, .. }) if got == input),
                "{input:?} should be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn test_unknown_symbol_has_currency_source() {
        let error = registry().parse_money("£10.00").unwrap_err();
        let source = error.source().and_then(|s| s.downcast_ref::<CurrencyError>());
        assert_eq!(source, Some(&CurrencyError::UnsupportedSymbol("£".to_string())));
        assert!(error.to_string().contains("£10.00"));
    }

    #[test]
    fn test_symbol_longer_than_three_characters() {
        let result = registry().parse_money("EURO100");
        assert!(matches!(result, Err(MoneyError::InvalidMoneyString { source: None, .. })));
    }
}
