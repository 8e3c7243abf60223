//! Shared fixtures for integration tests
//!
//! - The reference scenario with independently computed expected values
//! - A Chapman-layer profile generator for realistic, smooth profiles
//! - Relative-tolerance assertion helper

#![allow(dead_code)]

use ionolink_core::{profile::DensityProfile, LinkBudgetInputs};

/// Relative tolerance for comparisons against reference values
pub const REL_TOLERANCE: f64 = 1e-6;

/// Expected outputs of the reference scenario
pub mod reference {
    pub const REQUIRED_RECEIVE_POWER_DB: f64 = -69.827_954_626_021_04;
    pub const PLASMA_ATTENUATION_DB: f64 = 0.452_633_393_023_849_86;
    pub const PLASMA_ATTENUATION_LINEAR_SUM_DB: f64 = 1_810_532.861_101_087;
    pub const FSPL_DB: f64 = 72.447_783_221_883_37;
    pub const MIN_TX_POWER_DB: f64 = 3.072_461_988_886_175_3;
    pub const MIN_TX_POWER_WATTS: f64 = 2.028_832_526_345_985;
}

/// Two-sample profile: 100 km at 1e5 cm⁻³, 200 km at 5e5 cm⁻³
pub fn reference_profile() -> DensityProfile {
    DensityProfile::from_km_per_cm3([(100.0, 1.0e5), (200.0, 5.0e5)])
}

/// 25 km, 4 MHz, 300 K, NF 10 dB, 100 MHz bandwidth, SNR 14 dB, vertical
pub fn reference_inputs() -> LinkBudgetInputs {
    LinkBudgetInputs::builder()
        .distance(25_000.0)
        .frequency(4.0e6)
        .temperature(300.0)
        .noise_figure(10.0)
        .detection_bandwidth(100.0e6)
        .required_snr(14.0)
        .angle(core::f64::consts::FRAC_PI_2)
        .profile(reference_profile())
        .build_unchecked()
}

/// Chapman-layer profile
///
/// `n(h) = peak · exp(½·(1 − z − e^(−z)))`, `z = (h − peak_height)/scale_height`,
/// sampled every `step` metres from `bottom` to `top` inclusive.
pub fn chapman_profile(
    peak_density: f64,
    peak_height: f64,
    scale_height: f64,
    bottom: f64,
    top: f64,
    step: f64,
) -> DensityProfile {
    let count = ((top - bottom) / step).round() as usize;
    DensityProfile::from_si((0..=count).map(|i| {
        let h = bottom + i as f64 * step;
        let z = (h - peak_height) / scale_height;
        (h, peak_density * (0.5 * (1.0 - z - (-z).exp())).exp())
    }))
}

/// Typical daytime F2 layer: 1e12 m⁻³ at 300 km, 50 km scale height
pub fn daytime_f2_profile(samples: usize) -> DensityProfile {
    let step = 500_000.0 / (samples.max(2) - 1) as f64;
    chapman_profile(1.0e12, 300_000.0, 50_000.0, 80_000.0, 580_000.0, step)
}

/// Assert `actual` is within `REL_TOLERANCE` of `expected`
pub fn assert_close(actual: f64, expected: f64, what: &str) {
    let rel = ((actual - expected) / expected).abs();
    assert!(
        rel < REL_TOLERANCE,
        "{}: got {}, expected {} (relative error {:e})",
        what,
        actual,
        expected,
        rel
    );
}
