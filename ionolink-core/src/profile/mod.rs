//! Electron Density Profiles
//!
//! ## Overview
//!
//! A [`DensityProfile`] is an ordered list of `(height, density)` samples
//! describing the plasma a signal crosses on its way up, from the lowest
//! sample to the reflection point. Internally everything is SI: heights in
//! metres, densities in electrons per cubic metre.
//!
//! ## Units at the Boundary
//!
//! Ionosondes and models such as IRI tabulate profiles in kilometres and
//! cm⁻³. Conversion happens exactly once, when the profile is built:
//!
//! ```rust
//! use ionolink_core::profile::DensityProfile;
//!
//! // (km, cm⁻³) pairs straight from a table
//! let profile = DensityProfile::from_km_per_cm3([(100.0, 1.0e5), (200.0, 5.0e5)]);
//! assert_eq!(profile.samples()[1].height, 200_000.0);
//! assert_eq!(profile.samples()[1].density, 5.0e11);
//! ```
//!
//! ## Invariants
//!
//! Construction does not validate, so a front end can build a profile from
//! raw widgets and report every problem through one path:
//! [`Validate::validate`](crate::traits::Validate) (run by the composer)
//! rejects decreasing heights and negative or non-finite densities. Zero or
//! one sample is valid and means "no plasma intervals".

use alloc::vec::Vec;

use crate::physics::plasma::critical_frequency;
use crate::units::{km_to_m, per_cm3_to_per_m3};

mod parse;
#[cfg(feature = "std")]
mod file;

pub use parse::{DensityUnit, HeightUnit, ProfileFormat, MAX_COLUMNS};
#[cfg(feature = "std")]
pub use file::{load_profile, ProfileLoadError};

/// One sample of a density profile
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DensitySample {
    /// Height above the transmitter (m)
    pub height: f64,
    /// Electron density (m⁻³)
    pub density: f64,
}

impl DensitySample {
    /// Sample from SI values
    pub const fn new(height: f64, density: f64) -> Self {
        Self { height, density }
    }

    /// Sample from a height in km and a density in cm⁻³
    pub fn from_km_per_cm3(height_km: f64, density_per_cm3: f64) -> Self {
        Self {
            height: km_to_m(height_km),
            density: per_cm3_to_per_m3(density_per_cm3),
        }
    }
}

/// Height-ordered electron density samples (SI units)
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DensityProfile {
    samples: Vec<DensitySample>,
}

impl DensityProfile {
    /// Empty profile (no plasma)
    pub fn new() -> Self {
        Self::default()
    }

    /// Profile from samples already in metres and m⁻³
    pub fn from_samples(samples: impl IntoIterator<Item = DensitySample>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
        }
    }

    /// Profile from `(height m, density m⁻³)` pairs
    pub fn from_si(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self::from_samples(pairs.into_iter().map(|(h, n)| DensitySample::new(h, n)))
    }

    /// Profile from `(height km, density cm⁻³)` pairs
    pub fn from_km_per_cm3(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self::from_samples(
            pairs
                .into_iter()
                .map(|(h, n)| DensitySample::from_km_per_cm3(h, n)),
        )
    }

    /// Append a sample at the top of the profile
    pub fn push(&mut self, sample: DensitySample) {
        self.samples.push(sample);
    }

    /// All samples, lowest first
    pub fn samples(&self) -> &[DensitySample] {
        &self.samples
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the profile holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of integration intervals (consecutive sample pairs)
    pub fn interval_count(&self) -> usize {
        self.samples.len().saturating_sub(1)
    }

    /// Vertical extent covered by the profile (m), 0 with fewer than two samples
    pub fn thickness(&self) -> f64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(lowest), Some(highest)) => highest.height - lowest.height,
            _ => 0.0,
        }
    }

    /// Highest electron density in the profile (m⁻³), 0 when empty
    pub fn peak_density(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.density)
            .fold(0.0, f64::max)
    }

    /// Critical frequency (Hz) of the profile's densest sample
    pub fn critical_frequency(&self) -> f64 {
        critical_frequency(self.peak_density())
    }

    /// Iterate over `(lower, upper)` sample pairs, bottom to top
    pub fn intervals(&self) -> impl Iterator<Item = (&DensitySample, &DensitySample)> + '_ {
        self.samples.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

impl FromIterator<DensitySample> for DensityProfile {
    fn from_iter<I: IntoIterator<Item = DensitySample>>(iter: I) -> Self {
        Self::from_samples(iter)
    }
}
