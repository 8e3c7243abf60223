//! Receiver noise model
//!
//! Thermal noise power in a bandwidth B at temperature T is k·T·B. Expressed
//! relative to a milliwatt and degraded by the receiver's noise figure:
//!
//! ```text
//! N = 10·log10(k·T·1000) + NF + 10·log10(B)      [dBm]
//! ```
//!
//! At 290 K the first term is the familiar -174 dBm/Hz.

use crate::constants::{physics::BOLTZMANN_J_PER_K, units::WATTS_TO_MILLIWATTS};
use crate::units::linear_to_db;

/// Receiver noise floor (dBm) for a temperature (K), noise figure (dB) and
/// detection bandwidth (Hz).
///
/// Non-positive temperature or bandwidth produce non-finite output.
pub fn noise_floor(temperature: f64, noise_figure: f64, detection_bandwidth: f64) -> f64 {
    linear_to_db(BOLTZMANN_J_PER_K * temperature * WATTS_TO_MILLIWATTS)
        + noise_figure
        + linear_to_db(detection_bandwidth)
}

/// Minimum detectable signal: the noise floor raised by the required SNR
#[inline]
pub fn min_detectable_signal(noise_floor_db: f64, required_snr_db: f64) -> f64 {
    noise_floor_db + required_snr_db
}
