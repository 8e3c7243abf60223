//! Common validation checks
//!
//! Small pure functions shared by the `Validate` impls. Each one returns the
//! [`LinkBudgetError::InvalidInput`] for the parameter it was told about.

use crate::{
    errors::{LinkBudgetError, LinkResult, Parameter},
    traits::Validatable,
};

/// Value must be a finite number
pub fn check_finite(parameter: Parameter, value: f64) -> LinkResult<()> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(LinkBudgetError::invalid(parameter, value, "must be a finite number"))
    }
}

/// Value must be finite and strictly positive
pub fn check_positive(parameter: Parameter, value: f64) -> LinkResult<()> {
    check_finite(parameter, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(LinkBudgetError::invalid(parameter, value, "must be positive"))
    }
}

/// Value must be finite and zero or greater
pub fn check_non_negative(parameter: Parameter, value: f64) -> LinkResult<()> {
    check_finite(parameter, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(LinkBudgetError::invalid(parameter, value, "must not be negative"))
    }
}

/// Value must be finite and in the half-open range `(min, max]`
pub fn check_range_exclusive_min(
    parameter: Parameter,
    value: f64,
    min: f64,
    max: f64,
    reason: &'static str,
) -> LinkResult<()> {
    check_finite(parameter, value)?;
    if value > min && value <= max {
        Ok(())
    } else {
        Err(LinkBudgetError::invalid(parameter, value, reason))
    }
}
