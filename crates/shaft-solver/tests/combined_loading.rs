//! End-to-end diameter solves for combined twisting and axial loading.

use shaft_core::units::{newton_meters, newtons, pa, unitless};
use shaft_core::{CoreError, ShaftLoading};
use shaft_solver::{SolverConfig, SolverError, Variant, solve_diameter};

#[test]
fn ten_kilonewton_pull_with_two_kilonewton_meter_torque() {
    // P = 10 kN, T = 2 kN·m, FOS = 2, sigma_yt = 250 MPa.
    // Reference double-precision false-position run: d ≈ 54.633 mm.
    let loading = ShaftLoading::new(
        newtons(10_000.0),
        newton_meters(2_000.0),
        unitless(2.0),
        pa(2.5e8),
    )
    .unwrap();

    let solution = solve_diameter(&loading, None).unwrap();

    assert!(solution.converged);
    assert!(solution.iterations < SolverConfig::default().max_iterations);
    assert_eq!(solution.bracket, [0.0, 1.0]);
    assert!((solution.diameter_m - 0.054633).abs() < 1e-4);

    use uom::si::length::millimeter;
    let mm = solution.diameter().get::<millimeter>();
    assert!(mm > 50.0 && mm < 60.0, "expected tens of millimeters, got {mm}");
}

#[test]
fn identical_inputs_give_identical_solutions() {
    let loading = ShaftLoading::from_si(25_000.0, 500.0, 3.0, 4.0e8).unwrap();

    let first = solve_diameter(&loading, None).unwrap();
    let second = solve_diameter(&loading, None).unwrap();

    assert_eq!(first, second);
}

#[test]
fn nonpositive_parameters_are_rejected_before_solving() {
    assert!(matches!(
        ShaftLoading::from_si(10_000.0, 2_000.0, 0.0, 2.5e8),
        Err(CoreError::NonPositive { .. })
    ));
    assert!(matches!(
        ShaftLoading::from_si(10_000.0, -5.0, 2.0, 2.5e8),
        Err(CoreError::NonPositive { .. })
    ));
}

#[test]
fn root_beyond_search_limit_is_reported_not_guessed() {
    // A 10 Pa "material" under a meganewton pull puts the root far past the
    // 100 m scan range.
    let loading = ShaftLoading::from_si(1e6, 1e5, 2.0, 10.0).unwrap();

    let err = solve_diameter(&loading, None).unwrap_err();

    assert!(matches!(
        err,
        SolverError::BracketNotFound {
            search_limit: 100,
            ..
        }
    ));
}

#[test]
fn exhausted_budget_is_tagged_unconverged() {
    let loading = ShaftLoading::from_si(10_000.0, 2_000.0, 2.0, 2.5e8).unwrap();
    let config = SolverConfig {
        max_iterations: 10,
        variant: Variant::Pure,
        ..SolverConfig::default()
    };

    let solution = solve_diameter(&loading, Some(config)).unwrap();

    assert!(!solution.converged);
    assert_eq!(solution.iterations, 10);
    // The last estimate is still reported, inside the bracket.
    assert!(solution.diameter_m > 0.0 && solution.diameter_m < 1.0);
}

#[test]
fn baseline_variant_converges_when_root_is_near_the_bracket_top() {
    // With the root at ~0.8 m the criterion magnitudes at the two bracket
    // ends are comparable, so the textbook update converges quickly too.
    // Reference run: d ≈ 0.7986 m.
    let loading = ShaftLoading::from_si(100.0, 250.0, 2.0, 1e4).unwrap();
    let config = SolverConfig {
        variant: Variant::Pure,
        ..SolverConfig::default()
    };

    let solution = solve_diameter(&loading, Some(config)).unwrap();

    assert!(solution.converged);
    assert_eq!(solution.bracket, [0.0, 1.0]);
    assert!((solution.diameter_m - 0.7986).abs() < 1e-3);
}
