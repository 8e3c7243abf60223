//! Plasma Path Integration
//!
//! ## Method
//!
//! Total plasma attenuation is the attenuation constant integrated over the
//! height profile, doubled for the round trip (up through the layer and
//! back down after reflection):
//!
//! ```text
//!                N-1
//! A = 2 ×  Σ   α(f, ωp(f, n[i], T), θ) × (h[i] - h[i-1])        [dB]
//!               i=1
//! ```
//!
//! Each interval uses the density at its *upper* sample, a rectangle rule
//! rather than a trapezoid. Accuracy is whatever the profile's sampling
//! gives; there is no adaptive refinement. Typical profiles have a few
//! hundred samples, so one pass is O(N) and allocation-free.
//!
//! ## Degenerate Profiles
//!
//! A profile with zero or one sample has no intervals. The sum is empty and
//! the attenuation is exactly 0 dB.

use crate::physics::{attenuation::AttenuationFormula, plasma::plasma_frequency};
use crate::profile::DensityProfile;

/// Loss contributed by one profile interval
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentAttenuation {
    /// Bottom of the interval (m)
    pub lower_height: f64,
    /// Top of the interval (m)
    pub upper_height: f64,
    /// Density used for the interval, taken at the top (m⁻³)
    pub density: f64,
    /// Local plasma angular frequency (rad/s)
    pub plasma_frequency: f64,
    /// Attenuation constant (dB/m)
    pub attenuation_db_per_m: f64,
    /// One-way loss across the interval (dB)
    pub one_way_db: f64,
}

impl SegmentAttenuation {
    /// Interval width (m)
    pub fn width(&self) -> f64 {
        self.upper_height - self.lower_height
    }
}

/// Per-interval breakdown of the one-way plasma loss, bottom to top
pub fn path_segments<'a>(
    formula: AttenuationFormula,
    tx_frequency: f64,
    temperature: f64,
    angle: f64,
    profile: &'a DensityProfile,
) -> impl Iterator<Item = SegmentAttenuation> + 'a {
    profile.intervals().map(move |(lower, upper)| {
        let wp = plasma_frequency(tx_frequency, upper.density, temperature);
        let alpha = formula.attenuation_constant(tx_frequency, wp, angle);

        SegmentAttenuation {
            lower_height: lower.height,
            upper_height: upper.height,
            density: upper.density,
            plasma_frequency: wp,
            attenuation_db_per_m: alpha,
            one_way_db: alpha * (upper.height - lower.height),
        }
    })
}

/// Two-way plasma attenuation (dB) along `profile` with the given formula
pub fn plasma_path_attenuation_with(
    formula: AttenuationFormula,
    tx_frequency: f64,
    temperature: f64,
    angle: f64,
    profile: &DensityProfile,
) -> f64 {
    let one_way: f64 = path_segments(formula, tx_frequency, temperature, angle, profile)
        .map(|segment| segment.one_way_db)
        .sum();

    2.0 * one_way
}

/// Two-way plasma attenuation (dB) along `profile` with the default formula
pub fn plasma_path_attenuation(
    tx_frequency: f64,
    temperature: f64,
    angle: f64,
    profile: &DensityProfile,
) -> f64 {
    plasma_path_attenuation_with(
        AttenuationFormula::default(),
        tx_frequency,
        temperature,
        angle,
        profile,
    )
}
