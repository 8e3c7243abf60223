//! Attenuation constant in a plasma layer
//!
//! ## Formula
//!
//! The derivation this model is built on gives the attenuation constant as
//!
//! ```text
//! α = ωp²·θ / (2c·(f + θ))                 [Np/m]
//! ```
//!
//! while the computation that has historically been used in practice squares
//! both terms of the denominator:
//!
//! ```text
//! α = ωp²·θ / (2c·(f² + θ²))               [Np/m]
//! ```
//!
//! The two disagree by many orders of magnitude at HF (f ≈ 10⁶ Hz while
//! θ ≤ π/2), and neither sum is dimensionally consistent. Both are available
//! through [`AttenuationFormula`]; the squared sum is the default so that
//! existing link budgets reproduce.
//!
//! Nepers are converted to decibels with 20·log10(e) ≈ 8.6859 dB/Np.
//!
//! ## Small angles
//!
//! θ → 0 is well defined for both variants: the numerator vanishes while the
//! denominator stays at f² (or f), so α → 0. Only f = 0 and θ = 0 together
//! divide by zero, which the composer rejects by requiring f > 0.

use crate::constants::physics::SPEED_OF_LIGHT_M_PER_S;
use crate::units::nepers_to_db;

/// Which denominator the attenuation constant uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttenuationFormula {
    /// `f² + θ²`, the behavior link budgets have been computed with
    #[default]
    SquaredSum,
    /// `f + θ`, as written in the documented derivation
    LinearSum,
}

impl AttenuationFormula {
    /// Attenuation constant (dB/m) for a signal at `tx_frequency` Hz through
    /// plasma of angular frequency `plasma_frequency` at incidence `angle` rad
    pub fn attenuation_constant(self, tx_frequency: f64, plasma_frequency: f64, angle: f64) -> f64 {
        let denominator = match self {
            Self::SquaredSum => tx_frequency * tx_frequency + angle * angle,
            Self::LinearSum => tx_frequency + angle,
        };
        let nepers = plasma_frequency * plasma_frequency * angle
            / (2.0 * SPEED_OF_LIGHT_M_PER_S * denominator);

        nepers_to_db(nepers)
    }

    /// Short name, as accepted by [`AttenuationFormula::from_name`]
    pub fn name(self) -> &'static str {
        match self {
            Self::SquaredSum => "squared",
            Self::LinearSum => "linear",
        }
    }

    /// Look a variant up by its short name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "squared" => Some(Self::SquaredSum),
            "linear" => Some(Self::LinearSum),
            _ => None,
        }
    }
}

/// Attenuation constant (dB/m) using the default [`AttenuationFormula`]
#[inline]
pub fn attenuation_constant(tx_frequency: f64, plasma_frequency: f64, angle: f64) -> f64 {
    AttenuationFormula::default().attenuation_constant(tx_frequency, plasma_frequency, angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::plasma::plasma_frequency;
    use core::f64::consts::FRAC_PI_2;

    fn rel_err(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn squared_sum_reference_value() {
        let wp = plasma_frequency(4.0e6, 5.0e11, 300.0);
        let alpha = attenuation_constant(4.0e6, wp, FRAC_PI_2);
        assert!(rel_err(alpha, 2.263_166_965_119_249_2e-6) < 1e-9, "got {}", alpha);
    }

    #[test]
    fn linear_sum_reference_value() {
        let wp = plasma_frequency(4.0e6, 5.0e11, 300.0);
        let alpha = AttenuationFormula::LinearSum.attenuation_constant(4.0e6, wp, FRAC_PI_2);
        assert!(rel_err(alpha, 9.052_664_305_505_434) < 1e-9, "got {}", alpha);
    }

    #[test]
    fn variants_disagree_at_hf() {
        // Ratio is (f² + θ²)/(f + θ), roughly f
        let wp = 1.0e7;
        let squared = AttenuationFormula::SquaredSum.attenuation_constant(4.0e6, wp, FRAC_PI_2);
        let linear = AttenuationFormula::LinearSum.attenuation_constant(4.0e6, wp, FRAC_PI_2);
        assert!(linear / squared > 1.0e6);
    }

    #[test]
    fn small_angle_is_finite_and_vanishing() {
        let wp = plasma_frequency(4.0e6, 5.0e11, 300.0);
        for formula in [AttenuationFormula::SquaredSum, AttenuationFormula::LinearSum] {
            let alpha = formula.attenuation_constant(4.0e6, wp, 1.0e-12);
            assert!(alpha.is_finite());
            assert!(alpha >= 0.0 && alpha < 1.0e-10);
            assert_eq!(formula.attenuation_constant(4.0e6, wp, 0.0), 0.0);
        }
    }

    #[test]
    fn no_plasma_no_loss() {
        assert_eq!(attenuation_constant(4.0e6, 0.0, FRAC_PI_2), 0.0);
    }

    #[test]
    fn names_round_trip() {
        for formula in [AttenuationFormula::SquaredSum, AttenuationFormula::LinearSum] {
            assert_eq!(AttenuationFormula::from_name(formula.name()), Some(formula));
        }
        assert_eq!(AttenuationFormula::from_name("cubic"), None);
    }
}
