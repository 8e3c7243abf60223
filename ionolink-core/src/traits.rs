//! Core traits for input validation
//!
//! Keep them simple: the composer validates once, downstream code trusts
//! what it is given.

use crate::errors::LinkResult;

/// A value that can check its own physical consistency
pub trait Validate {
    /// Return the first violated constraint, if any
    fn validate(&self) -> LinkResult<()>;
}

/// Trait for scalars that can be validated
pub trait Validatable {
    /// Check if the value is usable at all (not NaN, not infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
