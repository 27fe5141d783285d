//! Invariant suite for the simulation and pricing pipeline.

use gbmsim_models::GbmParams;
use gbmsim_pricing::mc::{discounted_mean, MonteCarloEngine, SimulationConfig};
use gbmsim_pricing::payoffs::{evaluate_payoffs, OptionPayoff};
use gbmsim_pricing::PricingError;
use proptest::prelude::*;

fn engine(n_paths: usize, n_steps: usize, seed: u64) -> MonteCarloEngine {
    let config = SimulationConfig::builder()
        .n_paths(n_paths)
        .n_steps(n_steps)
        .seed(seed)
        .build()
        .unwrap();
    MonteCarloEngine::new(config).unwrap()
}

const ALL_PAYOFFS: [OptionPayoff; 8] = [
    OptionPayoff::EuropeanCall { strike: 100.0 },
    OptionPayoff::EuropeanPut { strike: 100.0 },
    OptionPayoff::AsianArithmeticCall { strike: 100.0 },
    OptionPayoff::AsianArithmeticPut { strike: 100.0 },
    OptionPayoff::AsianGeometricCall { strike: 100.0 },
    OptionPayoff::AsianGeometricPut { strike: 100.0 },
    OptionPayoff::LookbackFloatingCall,
    OptionPayoff::LookbackFloatingPut,
];

#[test]
fn ensemble_is_positive_with_spot_initial_column() {
    let mut engine = engine(5_000, 100, 42);
    let model = GbmParams::new(80.0, 0.02, 0.35, 2.0);
    engine.simulate(model).unwrap();

    let stride = engine.config().n_steps() + 1;
    for (path_idx, row) in engine.paths().chunks(stride).enumerate() {
        assert_eq!(row[0], 80.0, "path {path_idx} initial column");
        for &price in row {
            assert!(price > 0.0 && price.is_finite(), "path {path_idx}: {price}");
        }
    }
}

#[test]
fn identical_seeds_reproduce_the_ensemble() {
    let model = GbmParams::default();

    let mut engine1 = engine(1_000, 50, 1234);
    let mut engine2 = engine(1_000, 50, 1234);
    engine1.simulate(model).unwrap();
    engine2.simulate(model).unwrap();

    assert_eq!(engine1.paths(), engine2.paths());
}

#[test]
fn different_seeds_produce_different_ensembles() {
    let model = GbmParams::default();

    let mut engine1 = engine(1_000, 50, 1);
    let mut engine2 = engine(1_000, 50, 2);
    engine1.simulate(model).unwrap();
    engine2.simulate(model).unwrap();

    assert!(engine1
        .paths()
        .iter()
        .zip(engine2.paths())
        .any(|(a, b)| a != b));
}

#[test]
fn all_payoff_vectors_are_non_negative() {
    let mut engine = engine(2_000, 50, 42);
    engine.simulate(GbmParams::default()).unwrap();

    for payoff in ALL_PAYOFFS {
        let payoffs = engine.evaluate(payoff).unwrap();
        assert_eq!(payoffs.len(), 2_000);
        for &value in &payoffs {
            assert!(value >= 0.0, "{payoff:?} produced negative payoff {value}");
        }
    }
}

#[test]
fn payoff_vectors_for_different_types_coexist() {
    // Four vectors derived from the same ensemble, none derived from
    // another: evaluation twice for the same type is identical because the
    // ensemble is read-only.
    let mut engine = engine(500, 20, 42);
    engine.simulate(GbmParams::default()).unwrap();

    let first = engine.evaluate(OptionPayoff::european_call(100.0)).unwrap();
    let _other = engine
        .evaluate(OptionPayoff::asian_arithmetic_call(100.0))
        .unwrap();
    let second = engine.evaluate(OptionPayoff::european_call(100.0)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn aggregating_an_empty_vector_fails_explicitly() {
    assert_eq!(
        discounted_mean(&[], 0.05, 1.0).unwrap_err(),
        PricingError::EmptyInput
    );
}

#[test]
fn averaging_window_excludes_the_initial_column() {
    // Handcrafted 1-path, 2-step ensemble: [S0, S1, S2] = [100, 110, 120].
    // Averaging columns 1..=2 gives 115; including column 0 would give 110.
    let paths = [100.0, 110.0, 120.0];
    let payoffs = evaluate_payoffs(&paths, 1, 2, OptionPayoff::asian_arithmetic_call(100.0));
    assert_eq!(payoffs, vec![15.0]);
}

#[test]
fn validation_failure_aborts_the_whole_suite() {
    let mut engine = engine(100, 10, 42);

    // Negative volatility fails before any of the four prices is computed
    let bad_model = GbmParams::new(100.0, 0.05, -0.2, 1.0);
    let err = engine.price_suite(bad_model, 100.0).unwrap_err();
    assert!(err.is_invalid_parameter());

    // Negative strike likewise
    let err = engine.price_suite(GbmParams::default(), -100.0).unwrap_err();
    assert!(err.is_invalid_parameter());
}

proptest! {
    #[test]
    fn prop_ensemble_positivity(
        spot in 1.0..500.0f64,
        rate in -0.1..0.1f64,
        volatility in 0.0..1.0f64,
        maturity in 0.1..3.0f64,
        seed in 0u64..1_000,
        n_paths in 1usize..48,
        n_steps in 1usize..24,
    ) {
        let model = GbmParams::new(spot, rate, volatility, maturity);
        let mut engine = engine(n_paths, n_steps, seed);
        engine.simulate(model).unwrap();

        let stride = n_steps + 1;
        for row in engine.paths().chunks(stride) {
            prop_assert_eq!(row[0], spot);
            for &price in row {
                prop_assert!(price > 0.0 && price.is_finite());
            }
        }
    }

    #[test]
    fn prop_payoffs_non_negative(
        strike in 0.0..300.0f64,
        seed in 0u64..1_000,
    ) {
        let mut engine = engine(64, 8, seed);
        engine.simulate(GbmParams::default()).unwrap();

        for payoff in [
            OptionPayoff::european_call(strike),
            OptionPayoff::european_put(strike),
            OptionPayoff::asian_arithmetic_call(strike),
            OptionPayoff::asian_geometric_call(strike),
            OptionPayoff::lookback_floating_call(),
        ] {
            for value in engine.evaluate(payoff).unwrap() {
                prop_assert!(value >= 0.0);
            }
        }
    }

    #[test]
    fn prop_discounted_mean_of_non_negative_payoffs_is_non_negative(
        payoffs in proptest::collection::vec(0.0..1_000.0f64, 1..64),
        rate in -0.1..0.1f64,
        maturity in 0.1..3.0f64,
    ) {
        let price = discounted_mean(&payoffs, rate, maturity).unwrap();
        prop_assert!(price >= 0.0);
        prop_assert!(price.is_finite());
    }
}
