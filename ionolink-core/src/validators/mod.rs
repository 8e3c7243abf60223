//! Input Validation at the Composer Boundary
//!
//! ## Overview
//!
//! The physics in [`crate::physics`] is a set of total functions. Give
//! `noise_floor` a bandwidth of zero and it returns `-inf`; give
//! `plasma_frequency` a negative density and it returns NaN. Nothing panics,
//! and nothing tells the operator what went wrong either.
//!
//! Validation therefore happens exactly once, before any physics runs, and
//! fails with the first parameter that breaks its constraint. Downstream code
//! performs no redundant checks.
//!
//! ## Rules
//!
//! | Parameter            | Constraint                      |
//! |----------------------|---------------------------------|
//! | distance             | finite, > 0 m                   |
//! | frequency            | finite, > 0 Hz                  |
//! | temperature          | finite, > 0 K                   |
//! | angle                | finite, in (0, π/2] rad         |
//! | noise figure         | finite, ≥ 0 dB                  |
//! | detection bandwidth  | finite, > 0 Hz                  |
//! | required SNR         | finite                          |
//! | profile heights      | finite, non-decreasing          |
//! | profile densities    | finite, ≥ 0 m⁻³                 |
//!
//! Checks run top to bottom in this order, which makes the reported error
//! deterministic when several inputs are bad at once.
//!
//! ## Usage
//!
//! ```rust
//! use ionolink_core::{LinkBudgetInputs, Parameter, traits::Validate};
//!
//! let inputs = LinkBudgetInputs::builder().angle(2.0).build_unchecked();
//! let err = inputs.validate().unwrap_err();
//! assert_eq!(err.parameter(), Some(Parameter::Angle));
//! ```

mod inputs;
mod profile;
pub mod utils;
