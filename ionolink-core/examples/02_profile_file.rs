//! Example 02: Link budget from a tabulated profile file
//!
//! Loads a (km, cm⁻³) table with `#` comment headers, prints where along the path the loss accrues,
//! then computes the budget.
//!
//! ```bash
//! cargo run --example 02_profile_file -- data/daytime_f2.csv
//! ```

use std::f64::consts::FRAC_PI_2;

use ionolink_core::{
    compute_link_budget, path_segments,
    profile::{load_profile, ProfileFormat},
    units::mhz_to_hz,
    AttenuationFormula, LinkBudgetInputs,
};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/data/daytime_f2.csv").to_string());

    let format = ProfileFormat::default();
    let profile = match load_profile(&path, &format) {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("{}: {}", path, e);
            std::process::exit(1);
        }
    };

    let frequency = mhz_to_hz(10.0);
    println!(
        "{}: {} samples, {:.0} km thick, foF2 {:.2} MHz",
        path,
        profile.len(),
        profile.thickness() / 1e3,
        profile.critical_frequency() / 1e6
    );

    println!("\n{:>12} {:>14} {:>14}", "top (km)", "dB/km", "one-way (dB)");
    for segment in path_segments(AttenuationFormula::default(), frequency, 1000.0, FRAC_PI_2, &profile).step_by(5) {
        println!(
            "{:>12.1} {:>14.6e} {:>14.6e}",
            segment.upper_height / 1e3,
            segment.attenuation_db_per_m * 1e3,
            segment.one_way_db
        );
    }

    let inputs = LinkBudgetInputs::builder()
        .frequency(frequency)
        .temperature(1000.0)
        .profile(profile)
        .build_unchecked();

    match compute_link_budget(inputs) {
        Ok(result) => println!("\n{}", result),
        Err(e) => eprintln!("Rejected: {}", e),
    }
}
