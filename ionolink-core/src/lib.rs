//! Radar link-budget engine for IonoLink
//!
//! Computes the minimum transmit power an active radar needs to reach a
//! target SNR at its receiver, accounting for:
//!
//! - the receiver noise floor (temperature, noise figure, bandwidth)
//! - two-way attenuation through a plasma layer such as the ionosphere,
//!   integrated over a tabulated electron density profile
//! - free-space path loss
//!
//! Every computation is a pure function of its inputs. There is no state
//! between calls, so a front end can recompute on each parameter change.
//!
//! ```rust
//! use ionolink_core::{compute_link_budget, LinkBudgetInputs, profile::DensityProfile};
//!
//! let profile = DensityProfile::from_km_per_cm3([(100.0, 1.0e5), (200.0, 5.0e5)]);
//! let result = compute_link_budget(LinkBudgetInputs::vertical_incidence(profile))?;
//!
//! assert!((result.min_tx_power_db - 3.0725).abs() < 1e-3);
//! # Ok::<(), ionolink_core::LinkBudgetError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod logging;

pub mod budget;
pub mod constants;
pub mod errors;
pub mod path;
pub mod physics;
pub mod profile;
pub mod traits;
pub mod units;
pub mod validators;

// Public API
pub use budget::{compute_link_budget, LinkBudgetInputs, LinkBudgetInputsBuilder, LinkBudgetResult};
pub use errors::{LinkBudgetError, LinkResult, Parameter};
pub use path::{path_segments, plasma_path_attenuation, plasma_path_attenuation_with, SegmentAttenuation};
pub use physics::{
    attenuation_constant, critical_frequency, free_space_path_loss, min_detectable_signal,
    noise_floor, plasma_frequency, AttenuationFormula,
};
pub use profile::{DensityProfile, DensitySample, ProfileFormat};
pub use traits::Validate;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
