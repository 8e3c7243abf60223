//! Free-space path loss
//!
//! Geometric spreading between isotropic antennas:
//!
//! ```text
//! FSPL = 10·log10((4π·d·f/c)²)             [dB]
//! ```
//!
//! Each doubling of distance or of frequency adds 20·log10(2) ≈ 6.02 dB.

use core::f64::consts::PI;

use crate::constants::physics::SPEED_OF_LIGHT_M_PER_S;
use crate::units::linear_to_db;

/// Free-space path loss (dB) over `distance` m at `frequency` Hz
pub fn free_space_path_loss(distance: f64, frequency: f64) -> f64 {
    let ratio = 4.0 * PI * distance * frequency / SPEED_OF_LIGHT_M_PER_S;
    linear_to_db(ratio * ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_value() {
        let loss = free_space_path_loss(25_000.0, 4.0e6);
        assert!((loss - 72.447_783_221_883_37).abs() < 1e-9, "got {}", loss);
    }

    #[test]
    fn matches_textbook_shortcut() {
        // 20·log10(d_km) + 20·log10(f_MHz) + 32.45
        let loss = free_space_path_loss(10_000.0, 100.0e6);
        assert!((loss - (20.0 + 40.0 + 32.45)).abs() < 0.01);
    }

    #[test]
    fn doubling_adds_six_db() {
        let six = 20.0 * libm::log10(2.0);
        let base = free_space_path_loss(1_000.0, 1.0e6);
        assert!((free_space_path_loss(2_000.0, 1.0e6) - base - six).abs() < 1e-9);
        assert!((free_space_path_loss(1_000.0, 2.0e6) - base - six).abs() < 1e-9);
    }
}
