//! Propagation Physics
//!
//! ## Overview
//!
//! The pure formulas behind the link budget, one module per physical
//! effect. None of them validate their inputs: the composer in
//! [`crate::budget`] checks parameters once, and everything in here assumes
//! it is handed SI values inside their physical domain.
//!
//! ## Signal Chain
//!
//! ```text
//! transmitter ──FSPL──► plasma layer (up) ──► reflection ──► plasma layer (down) ──► receiver
//!                                                                                  │
//!                                                            noise floor + SNR ◄───┘
//! ```
//!
//! - [`noise`]: receiver noise floor and minimum detectable signal
//! - [`plasma`]: local plasma angular frequency with thermal correction
//! - [`attenuation`]: attenuation constant (dB/m) at a point in the layer
//! - [`fspl`]: free-space path loss from geometric spreading
//!
//! Integration of the attenuation constant over a height profile lives in
//! [`crate::path`], since it needs the profile type.

pub mod attenuation;
pub mod fspl;
pub mod noise;
pub mod plasma;

pub use attenuation::{attenuation_constant, AttenuationFormula};
pub use fspl::free_space_path_loss;
pub use noise::{min_detectable_signal, noise_floor};
pub use plasma::{cold_plasma_frequency, critical_frequency, plasma_frequency, wavenumber};
