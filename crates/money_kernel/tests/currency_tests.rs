//! Tests for currency units and currencies

use money_kernel::{Currency, CurrencyDefinition, CurrencyError, Subunit, Superunit};
use proptest::prelude::*;
use test_utils::{fraction_strategy, CurrencyFixtures};

mod units {
    use super::*;

    #[test]
    fn test_subunit_keeps_its_fields() {
        for fraction in [1, 10, 100, 1000] {
            let subunit = Subunit::new("cent", "c", fraction).unwrap();
            assert_eq!(subunit.code(), "cent");
            assert_eq!(subunit.symbol(), "c");
            assert_eq!(subunit.fraction(), fraction);
        }
    }

    #[test]
    fn test_subunit_rejects_fraction_out_of_range() {
        assert!(matches!(
            Subunit::new("cent", "c", 2),
            Err(CurrencyError::InvalidUnit(_))
        ));
    }

    #[test]
    fn test_subunit_rejects_empty_fields() {
        assert!(Subunit::new("", "c", 100).is_err());
        assert!(Subunit::new("cent", "", 100).is_err());
    }

    #[test]
    fn test_subunit_equality() {
        let cent = Subunit::new("cent", "c", 100).unwrap();
        let penny = Subunit::new("penny", "p", 10).unwrap();

        assert_eq!(cent, cent.clone());
        assert_ne!(cent, penny);
    }

    #[test]
    fn test_superunit_equality() {
        let euro = Superunit::new("eur", "€").unwrap();
        assert_eq!(euro, Superunit::new("EUR", "€").unwrap());
        assert_ne!(euro, Superunit::new("EUR", "EUR").unwrap());
    }

    proptest! {
        #[test]
        fn precision_is_log10_of_fraction(fraction in fraction_strategy()) {
            let subunit = Subunit::new("cent", "c", fraction).unwrap();
            prop_assert_eq!(10u32.pow(subunit.precision()), fraction);
        }

        #[test]
        fn codes_outside_three_letters_are_rejected(code in "[A-Za-z]{0,2}|[A-Za-z]{4,6}|[A-Za-z]{0,2}[0-9 _-][A-Za-z]{0,2}") {
            prop_assert!(matches!(Superunit::new(&code, "€"), Err(CurrencyError::InvalidUnit(_))));
        }

        #[test]
        fn three_letter_codes_are_accepted(code in "[A-Za-z]{3}") {
            let unit = Superunit::new(&code, "¤").unwrap();
            prop_assert_eq!(unit.code(), code.to_uppercase());
        }
    }
}

mod currencies {
    use super::*;

    #[test]
    fn test_builtin_currencies() {
        let codes: Vec<String> = Currency::builtin().iter().map(|c| c.code().to_string()).collect();
        assert_eq!(codes, vec!["CZK", "EUR", "USD"]);
        assert_eq!(Currency::KORUNA_CESKA.symbol(), "Kč");
        assert_eq!(Currency::US_DOLLAR.symbol(), "$");
    }

    #[test]
    fn test_accessors_delegate_to_units() {
        let pound = CurrencyFixtures::pound();
        assert_eq!(pound.code(), pound.main_unit().code());
        assert_eq!(pound.fraction(), pound.subunit().fraction());
        assert_eq!(pound.precision(), 2);
        assert_eq!(CurrencyFixtures::three_places().precision(), 3);
        assert_eq!(CurrencyFixtures::whole_only().precision(), 0);
    }

    #[test]
    fn test_currency_from_definition() {
        let definition = CurrencyDefinition {
            code: "gbp".to_string(),
            symbol: "£".to_string(),
            subunit_code: "penny".to_string(),
            subunit_symbol: "p".to_string(),
            fraction: 100,
        };
        assert_eq!(Currency::try_from(&definition).unwrap(), CurrencyFixtures::pound());
    }

    #[test]
    fn test_invalid_definition_is_rejected() {
        let definition = CurrencyDefinition {
            code: "GBP".to_string(),
            symbol: "£".to_string(),
            subunit_code: "penny".to_string(),
            subunit_symbol: "p".to_string(),
            fraction: 12,
        };
        assert!(matches!(
            Currency::try_from(&definition),
            Err(CurrencyError::InvalidUnit(_))
        ));
    }
}
