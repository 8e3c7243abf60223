//! End-to-end link budget tests
//!
//! Exercise the public API the way a front end does: build inputs, compute,
//! read the five result fields.

mod common;

use common::{assert_close, daytime_f2_profile, reference, reference_inputs, reference_profile};
use ionolink_core::{
    compute_link_budget, path_segments, plasma_path_attenuation,
    profile::DensityProfile,
    units::{db_to_linear, linear_to_db},
    AttenuationFormula, LinkBudgetError, LinkBudgetInputs, Parameter,
};
use std::f64::consts::FRAC_PI_2;

#[test]
fn reference_scenario_matches_expected_budget() {
    let result = compute_link_budget(reference_inputs()).unwrap();

    assert_close(result.required_receive_power_db, reference::REQUIRED_RECEIVE_POWER_DB, "rx power");
    assert_close(result.plasma_attenuation_db, reference::PLASMA_ATTENUATION_DB, "plasma");
    assert_close(result.fspl_db, reference::FSPL_DB, "fspl");
    assert_close(result.min_tx_power_db, reference::MIN_TX_POWER_DB, "tx dB");
    assert_close(result.min_tx_power_watts, reference::MIN_TX_POWER_WATTS, "tx W");
}

#[test]
fn reference_scenario_equals_default_scenario() {
    // The front end's defaults are the reference scenario minus the profile
    let defaults = LinkBudgetInputs::vertical_incidence(reference_profile());
    assert_eq!(defaults, reference_inputs());
}

#[test]
fn linear_sum_formula_is_selectable() {
    let mut inputs = reference_inputs();
    inputs.attenuation_formula = AttenuationFormula::LinearSum;

    let result = compute_link_budget(inputs).unwrap();
    assert_close(
        result.plasma_attenuation_db,
        reference::PLASMA_ATTENUATION_LINEAR_SUM_DB,
        "plasma (linear sum)",
    );
    // Same noise and spreading; only the plasma term changes
    assert_close(result.fspl_db, reference::FSPL_DB, "fspl");
}

#[test]
fn watts_round_trip_through_decibels() {
    let result = compute_link_budget(reference_inputs()).unwrap();
    assert_eq!(result.min_tx_power_watts, db_to_linear(result.min_tx_power_db));
    assert!((linear_to_db(result.min_tx_power_watts) - result.min_tx_power_db).abs() < 1e-12);
}

#[test]
fn repeated_calls_are_independent() {
    let first = compute_link_budget(reference_inputs()).unwrap();
    let _other = compute_link_budget(LinkBudgetInputs::builder().frequency(9.0e6).build_unchecked()).unwrap();
    let again = compute_link_budget(reference_inputs()).unwrap();
    assert_eq!(first, again);
}

#[test]
fn short_profiles_contribute_nothing() {
    for profile in [DensityProfile::new(), DensityProfile::from_km_per_cm3([(150.0, 3.0e5)])] {
        let result = compute_link_budget(LinkBudgetInputs::vertical_incidence(profile)).unwrap();
        assert_eq!(result.plasma_attenuation_db, 0.0);
        assert_close(result.fspl_db, reference::FSPL_DB, "fspl");
    }
}

#[test]
fn invalid_parameter_is_reported_without_result() {
    let inputs = LinkBudgetInputs::builder()
        .profile(reference_profile())
        .detection_bandwidth(-1.0)
        .build_unchecked();

    match compute_link_budget(inputs) {
        Err(LinkBudgetError::InvalidInput { parameter, value, .. }) => {
            assert_eq!(parameter, Parameter::DetectionBandwidth);
            assert_eq!(value, -1.0);
        }
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn angle_outside_vertical_quadrant_is_rejected() {
    for angle in [0.0, -0.1, FRAC_PI_2 + 1e-9, f64::NAN] {
        let inputs = LinkBudgetInputs::builder().angle(angle).build_unchecked();
        let err = compute_link_budget(inputs).unwrap_err();
        assert_eq!(err.parameter(), Some(Parameter::Angle), "angle {}", angle);
    }
}

#[test]
fn zero_angle_with_zero_frequency_is_rejected() {
    let inputs = LinkBudgetInputs::builder().angle(0.0).frequency(0.0).build_unchecked();
    assert!(matches!(
        compute_link_budget(inputs),
        Err(LinkBudgetError::InvalidInput { .. })
    ));
}

#[test]
fn small_oblique_angle_is_well_defined() {
    let inputs = LinkBudgetInputs::builder()
        .angle(1e-9)
        .profile(reference_profile())
        .build_unchecked();
    let result = compute_link_budget(inputs).unwrap();
    assert!(result.plasma_attenuation_db.is_finite());
    assert!(result.plasma_attenuation_db < 1e-6);
}

#[test]
fn descending_profile_is_rejected() {
    let inputs = LinkBudgetInputs::vertical_incidence(DensityProfile::from_km_per_cm3([
        (200.0, 5.0e5),
        (100.0, 1.0e5),
    ]));
    assert!(matches!(
        compute_link_budget(inputs),
        Err(LinkBudgetError::ProfileNotAscending { index: 1, .. })
    ));
}

#[test]
fn realistic_layer_breakdown() {
    let profile = daytime_f2_profile(501);
    assert_eq!(profile.len(), 501);

    // 10 MHz sits above foF2 ≈ 9 MHz
    let frequency = 10.0e6;
    assert!(profile.critical_frequency() < frequency);

    let segments: Vec<_> =
        path_segments(AttenuationFormula::default(), frequency, 1000.0, FRAC_PI_2, &profile).collect();
    assert_eq!(segments.len(), 500);

    // Loss per metre peaks at the layer peak
    let densest = segments
        .iter()
        .max_by(|a, b| a.attenuation_db_per_m.total_cmp(&b.attenuation_db_per_m))
        .unwrap();
    assert!((densest.upper_height - 300_000.0).abs() <= 1_000.0);

    let one_way: f64 = segments.iter().map(|s| s.one_way_db).sum();
    let total = plasma_path_attenuation(frequency, 1000.0, FRAC_PI_2, &profile);
    assert_close(total, 2.0 * one_way, "two-way total");
}

#[test]
fn finer_sampling_converges() {
    let coarse = plasma_path_attenuation(10.0e6, 1000.0, FRAC_PI_2, &daytime_f2_profile(51));
    let fine = plasma_path_attenuation(10.0e6, 1000.0, FRAC_PI_2, &daytime_f2_profile(2001));
    let finer = plasma_path_attenuation(10.0e6, 1000.0, FRAC_PI_2, &daytime_f2_profile(4001));

    assert!((fine - finer).abs() < (coarse - finer).abs());
    assert!(((fine - finer) / finer).abs() < 1e-3);
}

#[cfg(feature = "serde")]
#[test]
fn result_serializes_with_stable_field_names() {
    let result = compute_link_budget(reference_inputs()).unwrap();
    let json = serde_json::to_value(result).unwrap();
    for field in [
        "required_receive_power_db",
        "plasma_attenuation_db",
        "fspl_db",
        "min_tx_power_db",
        "min_tx_power_watts",
    ] {
        assert!(json.get(field).is_some(), "missing {}", field);
    }
}

#[cfg(feature = "serde")]
#[test]
fn inputs_deserialize_without_formula() {
    let json = r#"{
        "distance": 25000.0, "frequency": 4e6, "temperature": 300.0,
        "angle": 1.5707963267948966, "noise_figure": 10.0,
        "detection_bandwidth": 1e8, "required_snr": 14.0,
        "profile": { "samples": [
            { "height": 100000.0, "density": 1e11 },
            { "height": 200000.0, "density": 5e11 }
        ] }
    }"#;
    let inputs: LinkBudgetInputs = serde_json::from_str(json).unwrap();
    assert_eq!(inputs.attenuation_formula, AttenuationFormula::SquaredSum);
    assert_close(
        compute_link_budget(inputs).unwrap().min_tx_power_db,
        reference::MIN_TX_POWER_DB,
        "tx dB",
    );
}
