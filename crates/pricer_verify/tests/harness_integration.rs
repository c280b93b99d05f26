//! End-to-end harness runs against the real pricing engine.

use pricer_models::instruments::OptionType;
use pricer_verify::config::{FuzzConfig, ParamRange, SweepGrid};
use pricer_verify::diversity::{default_pool, run_diversity, select_diverse, TestCase};
use pricer_verify::fuzzing::run_fuzzing;
use pricer_verify::{run_harness, CheckFamily, HarnessConfig, VerifyError};
use proptest::prelude::*;

// ================================================================
// Full runs
// ================================================================

#[test]
fn test_default_run_passes_every_family() {
    let report = run_harness(&HarnessConfig::default()).unwrap();
    assert!(report.all_passed());

    let text = report.to_string();
    assert!(text.contains("[PASS] monotonicity sweep"));
    assert!(text.contains("[PASS] diversity selection"));
    assert!(text.contains("[PASS] randomized fuzzing: 100 of 100 trials priced (seed 42)"));
    assert!(!text.contains("[FAIL]"));
}

#[test]
fn test_underflow_prone_seeds_pass() {
    for seed in [10194, 17111] {
        let mut config = HarnessConfig::default();
        config.fuzzing.seed = seed;
        let report = run_harness(&config).unwrap();
        assert!(report.all_passed(), "seed {}:\n{}", seed, report);
    }
}

#[test]
fn test_report_order_follows_run_order() {
    let text = run_harness(&HarnessConfig::default()).unwrap().to_string();
    let mono = text.find("monotonicity sweep").unwrap();
    let diversity = text.find("diversity selection").unwrap();
    let fuzzing = text.find("randomized fuzzing").unwrap();
    assert!(mono < diversity && diversity < fuzzing);
}

#[test]
fn test_toml_configured_run() {
    let config = HarnessConfig::from_toml_str(
        r#"
        [monotonicity]
        spot_grid = { start = 10.0, end = 300.0, step = 5.0 }

        [diversity]
        top_n = 6

        [fuzzing]
        trials = 1000
        seed = 11
        rate = { min = -0.05, max = 0.2 }
        "#,
    )
    .unwrap();

    let report = run_harness(&config).unwrap();
    assert!(report.all_passed());
    assert_eq!(report.monotonicity.unwrap().spot_points, 59);
    assert_eq!(report.diversity.unwrap().outcomes.len(), 6);
    assert_eq!(report.fuzzing.unwrap().priced, 1000);
}

#[test]
fn test_failures_are_reported_not_fatal() {
    let mut config = HarnessConfig::default();
    config.fuzzing.volatility = ParamRange::new(-0.5, 0.5);
    config.fuzzing.trials = 400;

    let report = run_harness(&config).unwrap();
    assert!(report.abort.is_none());
    assert!(!report.all_passed());

    let fuzz = report.fuzzing.as_ref().unwrap();
    assert!(!fuzz.failures.is_empty());
    assert_eq!(fuzz.priced + fuzz.failures.len(), 400);

    let text = report.to_string();
    assert!(text.contains("[FAIL] randomized fuzzing"));
    assert!(text.contains("Invalid volatility"));
}

#[test]
fn test_invalid_config_is_an_error() {
    let mut config = HarnessConfig::default();
    config.monotonicity.expiry_grid = SweepGrid::new(0.5, 0.5, 0.1);
    assert!(matches!(run_harness(&config), Err(VerifyError::Config(_))));
}

// ================================================================
// Diversity selection
// ================================================================

#[test]
fn test_default_top_three() {
    let report = run_diversity(&default_pool(), 3);
    let picked: Vec<(f64, f64, f64, f64, f64, OptionType)> = report
        .outcomes
        .iter()
        .map(|o| {
            let c = &o.case;
            (c.spot, c.strike, c.expiry, c.rate, c.volatility, c.option_type)
        })
        .collect();

    assert_eq!(
        picked,
        vec![
            (120.0, 100.0, 1.5, 0.02, 0.3, OptionType::Call),
            (80.0, 100.0, 0.75, 0.01, 0.15, OptionType::Put),
            (110.0, 100.0, 0.5, 0.05, 0.25, OptionType::Put),
        ]
    );
}

#[test]
fn test_selection_is_deterministic() {
    let a = select_diverse(&default_pool(), 4);
    let b = select_diverse(&default_pool(), 4);
    assert_eq!(a, b);
}

// ================================================================
// Fuzzing reproducibility
// ================================================================

#[test]
fn test_same_seed_replays_identically() {
    let config = FuzzConfig {
        trials: 250,
        seed: 123,
        spot: ParamRange::new(-20.0, 150.0),
        ..Default::default()
    };
    let first = run_fuzzing(&config).unwrap();
    let second = run_fuzzing(&config).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_different_seeds_draw_differently() {
    let config = |seed| FuzzConfig {
        trials: 200,
        seed,
        spot: ParamRange::new(-50.0, 150.0),
        ..Default::default()
    };
    let a = run_fuzzing(&config(1)).unwrap();
    let b = run_fuzzing(&config(2)).unwrap();
    let spots = |r: &pricer_verify::fuzzing::FuzzReport| {
        r.failures.iter().map(|f| f.trial.spot).collect::<Vec<_>>()
    };
    assert_ne!(spots(&a), spots(&b));
}

#[test]
fn test_fatal_error_family_is_reported() {
    let err = VerifyError::InvariantViolation {
        family: CheckFamily::RandomizedFuzzing,
        message: "price -1 below zero".to_string(),
    };
    assert_eq!(err.family(), Some(CheckFamily::RandomizedFuzzing));
    assert!(err.is_invariant_violation());
}

// ================================================================
// Property-based selection checks
// ================================================================

fn arb_case() -> impl Strategy<Value = TestCase> {
    (
        1.0..500.0_f64,
        1.0..500.0_f64,
        0.01..5.0_f64,
        -0.05..0.2_f64,
        0.01..1.0_f64,
        prop::bool::ANY,
    )
        .prop_map(|(s, k, t, r, v, call)| {
            let kind = if call { OptionType::Call } else { OptionType::Put };
            TestCase::new("generated", s, k, t, r, v, kind)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_selection_size(pool in prop::collection::vec(arb_case(), 0..20), n in 0usize..25) {
        prop_assert_eq!(select_diverse(&pool, n).len(), n.min(pool.len()));
    }

    #[test]
    fn prop_selection_sorted_and_scored(pool in prop::collection::vec(arb_case(), 1..20)) {
        let selected = select_diverse(&pool, pool.len());
        prop_assert!(selected.iter().all(|c| c.diversity_score >= 0.0));
        prop_assert!(selected.windows(2).all(|w| w[0].diversity_score >= w[1].diversity_score));
    }

    #[test]
    fn prop_valid_pools_always_price(pool in prop::collection::vec(arb_case(), 1..20)) {
        let report = run_diversity(&pool, 5);
        prop_assert!(report.passed());
    }
}
