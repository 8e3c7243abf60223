//! Explicit Unit Conversions
//!
//! Profile data and operator inputs arrive in whatever units are customary
//! (km, cm⁻³, MHz, degrees). Converting them here, by name, keeps the
//! physics modules free of stray `* 1e6` factors. Everything downstream of
//! these helpers is SI.
//!
//! Decibel helpers live here too: the link budget mixes logarithmic and
//! linear quantities and each crossing between the two goes through one of
//! these functions.

use crate::constants::units::{
    CUBIC_CM_PER_CUBIC_M, DB_PER_NEPER, HZ_PER_MHZ, METERS_PER_KILOMETER,
};

/// Kilometres to metres
#[inline]
pub fn km_to_m(km: f64) -> f64 {
    km * METERS_PER_KILOMETER
}

/// Electrons per cm³ to electrons per m³
#[inline]
pub fn per_cm3_to_per_m3(density_per_cm3: f64) -> f64 {
    density_per_cm3 * CUBIC_CM_PER_CUBIC_M
}

/// Megahertz to hertz
#[inline]
pub fn mhz_to_hz(mhz: f64) -> f64 {
    mhz * HZ_PER_MHZ
}

/// Degrees to radians
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Power ratio in dB to linear: 10^(dB/10)
#[inline]
pub fn db_to_linear(db: f64) -> f64 {
    libm::pow(10.0, db / 10.0)
}

/// Linear power ratio to dB: 10·log10(x)
///
/// Non-positive input yields `-inf` or NaN; callers validate first.
#[inline]
pub fn linear_to_db(linear: f64) -> f64 {
    10.0 * libm::log10(linear)
}

/// Nepers to decibels: 20·log10(e) dB per neper
#[inline]
pub fn nepers_to_db(nepers: f64) -> f64 {
    DB_PER_NEPER * nepers
}
