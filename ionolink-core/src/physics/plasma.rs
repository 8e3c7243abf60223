//! Plasma frequency with thermal correction
//!
//! Free electrons displaced from their ions oscillate at the cold plasma
//! frequency:
//!
//! ```text
//! ωp,cold = sqrt(n·e² / (m_e·ε₀))                    [rad/s]
//! ```
//!
//! A warm plasma adds the Bohm-Gross term for a wave of wavenumber k:
//!
//! ```text
//! ωp² = ωp,cold² + 3·k_B·T/m_e · k²,    k = 2π·f/c
//! ```
//!
//! Here k is the wavenumber of the transmitted signal, so the correction
//! grows with transmit frequency as well as temperature.

use core::f64::consts::PI;

use crate::constants::physics::{
    BOLTZMANN_J_PER_K, ELECTRON_CHARGE_C, ELECTRON_MASS_KG, SPEED_OF_LIGHT_M_PER_S,
    VACUUM_PERMITTIVITY_F_PER_M,
};

/// Cold plasma angular frequency (rad/s) for an electron density (m⁻³)
#[inline]
pub fn cold_plasma_frequency(density: f64) -> f64 {
    libm::sqrt(
        density * ELECTRON_CHARGE_C * ELECTRON_CHARGE_C
            / (ELECTRON_MASS_KG * VACUUM_PERMITTIVITY_F_PER_M),
    )
}

/// Angular wavenumber (rad/m) of a signal at `frequency` Hz: 2π / λ
#[inline]
pub fn wavenumber(frequency: f64) -> f64 {
    2.0 * PI / (SPEED_OF_LIGHT_M_PER_S / frequency)
}

/// Local plasma angular frequency (rad/s) seen by a signal at
/// `tx_frequency` Hz, in plasma of `density` m⁻³ at `temperature` K.
///
/// Zero density leaves only the thermal term; zero temperature leaves only
/// the cold term.
pub fn plasma_frequency(tx_frequency: f64, density: f64, temperature: f64) -> f64 {
    let cold = cold_plasma_frequency(density);
    let k = wavenumber(tx_frequency);
    let thermal = 3.0 * BOLTZMANN_J_PER_K * temperature / ELECTRON_MASS_KG * k * k;

    libm::sqrt(cold * cold + thermal)
}

/// Critical frequency (Hz) of a layer whose peak density is `peak_density` m⁻³.
///
/// Vertical-incidence signals at or below this frequency are reflected
/// before they get through the layer.
#[inline]
pub fn critical_frequency(peak_density: f64) -> f64 {
    cold_plasma_frequency(peak_density) / (2.0 * PI)
}
