//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::eval::EvalConfig;
use proptest::prelude::*;

fn arb_endpoints() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[A-Za-z][A-Za-z0-9 >-]{0,20}", 1..12)
        .prop_map(|set| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_distinct_endpoints_with_samples_are_valid(
        endpoints in arb_endpoints(),
        seed in any::<u64>(),
        samples in 1usize..5000,
    ) {
        let config = EvalConfig::default()
            .with_endpoints(endpoints)
            .with_seed(seed)
            .with_samples(samples);
        prop_assume!(!config.endpoints.contains(&config.molecule_column));
        prop_assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn prop_repeating_an_endpoint_is_rejected(endpoints in arb_endpoints(), pick in any::<prop::sample::Index>()) {
        let repeated = endpoints[pick.index(endpoints.len())].clone();
        let mut with_repeat = endpoints.clone();
        with_repeat.push(repeated.clone());
        let config = EvalConfig::default().with_endpoints(with_repeat);
        prop_assume!(!config.endpoints.contains(&config.molecule_column));
        prop_assert_eq!(
            validate_config(&config),
            Err(ValidationError::DuplicateEndpoint(repeated))
        );
    }
}
