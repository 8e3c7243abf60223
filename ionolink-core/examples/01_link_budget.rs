//! Example 01: Link budget through a two-sample layer
//!
//! Builds the default operator scenario, sweeps the transmit frequency the
//! way a front end slider would, and prints the power budget at each step.

use ionolink_core::{
    compute_link_budget, profile::DensityProfile, units::mhz_to_hz, AttenuationFormula,
    LinkBudgetInputs,
};

fn main() {
    let profile = DensityProfile::from_km_per_cm3([(100.0, 1.0e5), (200.0, 5.0e5)]);
    println!(
        "Profile: {} samples, critical frequency {:.2} MHz\n",
        profile.len(),
        profile.critical_frequency() / 1e6
    );

    let inputs = LinkBudgetInputs::vertical_incidence(profile.clone());
    match compute_link_budget(inputs) {
        Ok(result) => println!("Default scenario:\n{}\n", result),
        Err(e) => eprintln!("Default scenario rejected: {}", e),
    }

    println!("{:>10} {:>14} {:>14}", "f (MHz)", "plasma (dB)", "tx (W)");
    for mhz in [2.0, 4.0, 8.0, 16.0] {
        let inputs = LinkBudgetInputs::builder()
            .frequency(mhz_to_hz(mhz))
            .profile(profile.clone())
            .build_unchecked();

        match compute_link_budget(inputs) {
            Ok(r) => println!(
                "{:>10.1} {:>14.6} {:>14.4e}",
                mhz, r.plasma_attenuation_db, r.min_tx_power_watts
            ),
            Err(e) => println!("{:>10.1} rejected: {}", mhz, e),
        }
    }

    // The documented derivation sums f and θ linearly instead of squaring them
    let linear = LinkBudgetInputs::builder()
        .profile(profile)
        .attenuation_formula(AttenuationFormula::LinearSum)
        .build_unchecked();
    if let Ok(r) = compute_link_budget(linear) {
        println!("\nLinear-sum plasma attenuation: {:.3e} dB", r.plasma_attenuation_db);
    }

    // Invalid input: the error names the parameter
    let bad = LinkBudgetInputs::builder().detection_bandwidth(0.0).build_unchecked();
    if let Err(e) = compute_link_budget(bad) {
        println!("\nRejected as expected: {}", e);
    }
}
