//! Interchangeable `rent_price` modules.
//!
//! Both are pure: the quote depends only on the name and the duration, is
//! non-decreasing in the duration, and never touches storage.

use soroban_sdk::{vec, Env, String, Symbol, Vec};

use domains_lib::{
    validation::validate_name, RegistryError, DEFAULT_RATE_PER_SECOND, FLAT_RATE_PER_SECOND,
    FOUR_CHAR_RATE_PER_SECOND, ONE_CHAR_RATE_PER_SECOND, RENT_PRICE,
    THREE_CHAR_RATE_PER_SECOND, TWO_CHAR_RATE_PER_SECOND,
};

use super::Facet;

// u64::MAX seconds at the highest rate still fits comfortably in an i128.
fn price(rate_per_second: i128, duration: u64) -> i128 {
    rate_per_second * duration as i128
}

/// Default pricing: shorter names cost more per second.
pub struct LengthPricing;

impl LengthPricing {
    pub fn rate_for(name: &String) -> i128 {
        match name.len() {
            0 | 1 => ONE_CHAR_RATE_PER_SECOND,
            2 => TWO_CHAR_RATE_PER_SECOND,
            3 => THREE_CHAR_RATE_PER_SECOND,
            4 => FOUR_CHAR_RATE_PER_SECOND,
            _ => DEFAULT_RATE_PER_SECOND,
        }
    }
}

impl Facet for LengthPricing {
    fn selectors(&self, env: &Env) -> Vec<Symbol> {
        vec![env, RENT_PRICE]
    }

    fn rent_price(&self, _env: &Env, name: &String, duration: u64) -> Result<i128, RegistryError> {
        validate_name(name)?;
        Ok(price(Self::rate_for(name), duration))
    }
}

/// Same rate for every name.
pub struct FlatPricing;

impl Facet for FlatPricing {
    fn selectors(&self, env: &Env) -> Vec<Symbol> {
        vec![env, RENT_PRICE]
    }

    fn rent_price(&self, _env: &Env, name: &String, duration: u64) -> Result<i128, RegistryError> {
        validate_name(name)?;
        Ok(price(FLAT_RATE_PER_SECOND, duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn shorter_names_cost_more() {
        let env = Env::default();
        let quote = |name: &str| {
            LengthPricing
                .rent_price(&env, &String::from_str(&env, name), 100)
                .unwrap()
        };

        assert_eq!(quote("a"), 16_000);
        assert_eq!(quote("ab"), 8_000);
        assert_eq!(quote("abc"), 4_000);
        assert_eq!(quote("abcd"), 2_000);
        assert_eq!(quote("myDomain"), 1_000);
    }

    #[test]
    fn flat_pricing_ignores_length() {
        let env = Env::default();
        let short = FlatPricing
            .rent_price(&env, &String::from_str(&env, "a"), 2_629_810)
            .unwrap();
        let long = FlatPricing
            .rent_price(&env, &String::from_str(&env, "myDomain"), 2_629_810)
            .unwrap();
        assert_eq!(short, long);
        assert_eq!(short, 26_298_100);
    }

    #[test]
    fn invalid_names_are_not_quoted() {
        let env = Env::default();
        assert_eq!(
            LengthPricing.rent_price(&env, &String::from_str(&env, ""), 10),
            Err(RegistryError::InvalidName)
        );
        assert_eq!(
            FlatPricing.rent_price(&env, &String::from_str(&env, "no spaces"), 10),
            Err(RegistryError::InvalidName)
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_price_is_monotonic_in_duration(
            name in "[a-zA-Z0-9_-]{1,64}",
            a in 0u64..=u64::MAX,
            b in 0u64..=u64::MAX,
        ) {
            let env = Env::default();
            let name = String::from_str(&env, &name);
            let (shorter, longer) = if a <= b { (a, b) } else { (b, a) };

            for facet in [&LengthPricing as &dyn Facet, &FlatPricing] {
                let low = facet.rent_price(&env, &name, shorter).unwrap();
                let high = facet.rent_price(&env, &name, longer).unwrap();
                prop_assert!(low <= high);
                prop_assert_eq!(
                    facet.rent_price(&env, &name, shorter).unwrap(),
                    low
                );
            }
        }
    }
}
