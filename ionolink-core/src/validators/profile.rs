//! Density profile consistency
//!
//! Heights must be finite and must not decrease: the integrator multiplies
//! by `height[i] - height[i-1]`, and a negative width would quietly turn
//! attenuation into gain. Equal neighbouring heights are accepted and add a
//! zero-width interval.

use crate::{
    errors::{LinkBudgetError, LinkResult, Parameter},
    profile::DensityProfile,
    traits::{Validatable, Validate},
};

use super::utils;

impl Validate for DensityProfile {
    fn validate(&self) -> LinkResult<()> {
        let mut previous: Option<f64> = None;

        for (index, sample) in self.samples().iter().enumerate() {
            utils::check_finite(Parameter::ProfileHeight(index), sample.height)?;

            if let Some(previous) = previous {
                if sample.height < previous {
                    return Err(LinkBudgetError::ProfileNotAscending {
                        index,
                        height: sample.height,
                        previous,
                    });
                }
            }
            previous = Some(sample.height);

            if !sample.density.is_valid() || sample.density < 0.0 {
                return Err(LinkBudgetError::InvalidDensity {
                    index,
                    density: sample.density,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_profile_is_valid() {
        let profile = DensityProfile::from_km_per_cm3([(100.0, 1.0e5), (150.0, 3.0e5), (200.0, 5.0e5)]);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn short_profiles_are_valid() {
        assert!(DensityProfile::new().validate().is_ok());
        assert!(DensityProfile::from_si([(1.0e5, 1.0e11)]).validate().is_ok());
    }

    #[test]
    fn repeated_height_is_valid() {
        let profile = DensityProfile::from_si([(1.0e5, 1.0e11), (1.0e5, 2.0e11), (2.0e5, 3.0e11)]);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn descending_height_is_rejected() {
        let profile = DensityProfile::from_si([(1.0e5, 1.0e11), (2.0e5, 2.0e11), (1.5e5, 3.0e11)]);
        assert_eq!(
            profile.validate(),
            Err(LinkBudgetError::ProfileNotAscending { index: 2, height: 1.5e5, previous: 2.0e5 })
        );
    }

    #[test]
    fn non_finite_height_is_rejected() {
        let profile = DensityProfile::from_si([(1.0e5, 1.0e11), (f64::NAN, 2.0e11)]);
        assert_eq!(
            profile.validate().unwrap_err().parameter(),
            Some(Parameter::ProfileHeight(1))
        );
    }

    #[test]
    fn bad_density_is_rejected() {
        let negative = DensityProfile::from_si([(1.0e5, -1.0)]);
        assert!(matches!(
            negative.validate(),
            Err(LinkBudgetError::InvalidDensity { index: 0, .. })
        ));

        let infinite = DensityProfile::from_si([(1.0e5, 1.0e11), (2.0e5, f64::INFINITY)]);
        assert!(matches!(
            infinite.validate(),
            Err(LinkBudgetError::InvalidDensity { index: 1, .. })
        ));
    }
}
