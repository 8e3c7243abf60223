//! Physical Constants for IonoLink
//!
//! Exact or CODATA 2018 recommended values. All constants are SI and `f64`:
//! the plasma formulas multiply numbers that span more than forty orders of
//! magnitude (electron mass against ionospheric densities), so single
//! precision is not an option here.

// ===== ELECTROMAGNETIC =====

/// Speed of light in vacuum (m/s).
///
/// Exact by definition of the metre.
///
/// Source: SI Brochure, 9th edition (2019)
pub const SPEED_OF_LIGHT_M_PER_S: f64 = 299_792_458.0;

/// Vacuum electric permittivity ε₀ (F/m, i.e. m⁻³·kg⁻¹·s⁴·A²).
///
/// Source: CODATA 2018
pub const VACUUM_PERMITTIVITY_F_PER_M: f64 = 8.854_187_812_8e-12;

// ===== THERMODYNAMIC =====

/// Boltzmann constant k_B (J/K, i.e. m²·kg·s⁻²·K⁻¹).
///
/// Exact since the 2019 SI redefinition.
///
/// Source: SI Brochure, 9th edition (2019)
pub const BOLTZMANN_J_PER_K: f64 = 1.380_649e-23;

// ===== ELECTRON =====

/// Elementary charge magnitude e (C, i.e. A·s).
///
/// Exact since the 2019 SI redefinition.
pub const ELECTRON_CHARGE_C: f64 = 1.602_176_634e-19;

/// Electron rest mass m_e (kg).
///
/// Source: CODATA 2018
pub const ELECTRON_MASS_KG: f64 = 9.109_383_701_5e-31;
