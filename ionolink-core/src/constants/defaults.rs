//! Default Operator Scenario
//!
//! A mid-latitude HF sounding setup: a 4 MHz radar looking straight up at
//! the F region 25 km of slant range away. These seed
//! [`LinkBudgetInputsBuilder`](crate::budget::LinkBudgetInputsBuilder) so a
//! front end only overrides what the operator actually changed.

/// One-way distance to the target (m).
pub const DEFAULT_DISTANCE_M: f64 = 25_000.0;

/// Transmit frequency (Hz).
pub const DEFAULT_FREQUENCY_HZ: f64 = 4.0e6;

/// Plasma temperature (K).
pub const DEFAULT_TEMPERATURE_K: f64 = 300.0;

/// Receiver noise figure (dB).
pub const DEFAULT_NOISE_FIGURE_DB: f64 = 10.0;

/// Detection bandwidth (Hz).
pub const DEFAULT_DETECTION_BANDWIDTH_HZ: f64 = 100.0e6;

/// Required signal-to-noise ratio at the detector (dB).
pub const DEFAULT_REQUIRED_SNR_DB: f64 = 14.0;

/// Angle of incidence for a vertical path (rad).
pub const VERTICAL_INCIDENCE_RAD: f64 = core::f64::consts::FRAC_PI_2;
