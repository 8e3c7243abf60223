//! Unit Conversion Factors
//!
//! Ionospheric profiles are traditionally tabulated in kilometres and
//! electrons per cubic centimetre, and operators think in MHz. The physics
//! works in SI only, so these factors are applied once, where data enters
//! the crate (see [`crate::units`]).

/// Metres in one kilometre.
pub const METERS_PER_KILOMETER: f64 = 1_000.0;

/// Cubic centimetres in one cubic metre.
///
/// A density of n cm⁻³ is n × 1e6 m⁻³.
pub const CUBIC_CM_PER_CUBIC_M: f64 = 1.0e6;

/// Hertz in one megahertz.
pub const HZ_PER_MHZ: f64 = 1.0e6;

/// Milliwatts in one watt.
///
/// The noise floor is expressed relative to one milliwatt, which is where
/// this factor enters the thermal noise term.
pub const WATTS_TO_MILLIWATTS: f64 = 1_000.0;

/// Decibels per neper: 20·log10(e).
pub const DB_PER_NEPER: f64 = 8.685_889_638_065_037;
