//! Error Types for Link-Budget Input Failures
//!
//! ## Design Philosophy
//!
//! The physics functions in this crate are total: feed them a non-positive
//! temperature and they hand back NaN without complaint. Rather than checking
//! in every formula, inputs are validated once at the composer boundary and
//! rejected with an error that names the offending parameter.
//!
//! Errors stay small and `Copy`. They carry only numbers, sample indices and
//! `&'static str` reasons, so the crate keeps working without an allocator.
//!
//! ## Error Categories
//!
//! ### Scalar Inputs
//! - `InvalidInput`: a scalar parameter is non-finite or outside its domain
//!   (e.g. zero bandwidth, angle above π/2)
//!
//! ### Density Profile
//! - `ProfileNotAscending`: a height is lower than the one before it
//! - `InvalidDensity`: a density is negative or not a number
//! - `ProfileParse`: a line of tabulated profile text could not be read
//!
//! A profile with fewer than two samples is *not* an error: it simply has no
//! intervals and contributes zero plasma attenuation.
//!
//! ## Handling Strategy
//!
//! ```rust
//! use ionolink_core::{compute_link_budget, LinkBudgetError, LinkBudgetInputs, Parameter};
//!
//! let inputs = LinkBudgetInputs::builder().temperature(-4.0).build_unchecked();
//! match compute_link_budget(inputs) {
//!     Ok(result) => println!("{}", result),
//!     Err(LinkBudgetError::InvalidInput { parameter: Parameter::Temperature, .. }) => {
//!         // Ask the operator for a physical temperature
//!     }
//!     Err(e) => eprintln!("rejected: {}", e),
//! }
//! ```

use core::fmt;

use thiserror_no_std::Error;

/// Result type for link-budget operations
pub type LinkResult<T> = Result<T, LinkBudgetError>;

/// Identifies which input violated its constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parameter {
    /// One-way distance to target (m)
    Distance,
    /// Transmit frequency (Hz)
    Frequency,
    /// Plasma temperature (K)
    Temperature,
    /// Angle of incidence (rad)
    Angle,
    /// Receiver noise figure (dB)
    NoiseFigure,
    /// Detection bandwidth (Hz)
    DetectionBandwidth,
    /// Required signal-to-noise ratio (dB)
    RequiredSnr,
    /// Height of the profile sample at this index (m)
    ProfileHeight(usize),
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distance => f.write_str("distance"),
            Self::Frequency => f.write_str("frequency"),
            Self::Temperature => f.write_str("temperature"),
            Self::Angle => f.write_str("angle"),
            Self::NoiseFigure => f.write_str("noise figure"),
            Self::DetectionBandwidth => f.write_str("detection bandwidth"),
            Self::RequiredSnr => f.write_str("required SNR"),
            Self::ProfileHeight(index) => write!(f, "profile height[{}]", index),
        }
    }
}

/// Link-budget errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LinkBudgetError {
    /// Scalar input outside its physical domain
    #[error("Invalid {parameter}: {value} ({reason})")]
    InvalidInput {
        /// Which input failed
        parameter: Parameter,
        /// The rejected value
        value: f64,
        /// Constraint that was violated
        reason: &'static str,
    },

    /// Heights must not decrease from one sample to the next
    #[error("Profile not ascending at sample {index}: {height} m after {previous} m")]
    ProfileNotAscending {
        /// Index of the offending sample
        index: usize,
        /// Its height (m)
        height: f64,
        /// Height of the sample before it (m)
        previous: f64,
    },

    /// Electron density must be finite and non-negative
    #[error("Invalid electron density at sample {index}: {density} m^-3")]
    InvalidDensity {
        /// Index of the offending sample
        index: usize,
        /// The rejected density (m⁻³)
        density: f64,
    },

    /// Tabulated profile text could not be parsed
    #[error("Profile parse error at line {line}: {reason}")]
    ProfileParse {
        /// 1-based line number in the source text
        line: usize,
        /// What was wrong with the line
        reason: &'static str,
    },
}

impl LinkBudgetError {
    /// Shorthand for an [`LinkBudgetError::InvalidInput`]
    pub fn invalid(parameter: Parameter, value: f64, reason: &'static str) -> Self {
        Self::InvalidInput { parameter, value, reason }
    }

    /// The parameter this error blames, when it concerns a single input
    pub fn parameter(&self) -> Option<Parameter> {
        match self {
            Self::InvalidInput { parameter, .. } => Some(*parameter),
            Self::ProfileNotAscending { index, .. } => Some(Parameter::ProfileHeight(*index)),
            Self::InvalidDensity { .. } | Self::ProfileParse { .. } => None,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LinkBudgetError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidInput { value, reason, .. } =>
                defmt::write!(fmt, "Invalid input {}: {}", value, reason),
            Self::ProfileNotAscending { index, height, previous } =>
                defmt::write!(fmt, "Profile[{}] {} m after {} m", index, height, previous),
            Self::InvalidDensity { index, density } =>
                defmt::write!(fmt, "Density[{}] = {}", index, density),
            Self::ProfileParse { line, reason } =>
                defmt::write!(fmt, "Parse error line {}: {}", line, reason),
        }
    }
}
