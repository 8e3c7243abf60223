//! Constants for IonoLink Core
//!
//! Every numeric value the link-budget pipeline depends on lives here, with
//! its unit in the name. Nothing in this module is mutable.
//!
//! ## Organization
//!
//! - **Physics**: CODATA fundamental constants used by the plasma and
//!   propagation formulas
//! - **Units**: Conversion factors applied at the input boundary
//! - **Defaults**: The scenario an interactive front end starts from

/// Fundamental physical constants (SI units).
pub mod physics;

/// Unit conversion factors for profile data and operator inputs.
pub mod units;

/// Default operator scenario for the link budget.
pub mod defaults;

pub use physics::{
    SPEED_OF_LIGHT_M_PER_S, BOLTZMANN_J_PER_K, ELECTRON_CHARGE_C,
    ELECTRON_MASS_KG, VACUUM_PERMITTIVITY_F_PER_M,
};

pub use units::{
    METERS_PER_KILOMETER, CUBIC_CM_PER_CUBIC_M, HZ_PER_MHZ,
    WATTS_TO_MILLIWATTS, DB_PER_NEPER,
};

pub use defaults::{
    DEFAULT_DISTANCE_M, DEFAULT_FREQUENCY_HZ, DEFAULT_TEMPERATURE_K,
    DEFAULT_NOISE_FIGURE_DB, DEFAULT_DETECTION_BANDWIDTH_HZ,
    DEFAULT_REQUIRED_SNR_DB, VERTICAL_INCIDENCE_RAD,
};
