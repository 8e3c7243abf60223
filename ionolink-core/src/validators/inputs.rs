//! Scalar link-budget inputs

use crate::{
    budget::LinkBudgetInputs,
    constants::defaults::VERTICAL_INCIDENCE_RAD,
    errors::{LinkResult, Parameter},
    traits::Validate,
};

use super::utils;

impl Validate for LinkBudgetInputs {
    fn validate(&self) -> LinkResult<()> {
        utils::check_positive(Parameter::Distance, self.distance)?;
        utils::check_positive(Parameter::Frequency, self.frequency)?;
        utils::check_positive(Parameter::Temperature, self.temperature)?;
        utils::check_range_exclusive_min(
            Parameter::Angle,
            self.angle,
            0.0,
            VERTICAL_INCIDENCE_RAD,
            "must be in (0, pi/2]",
        )?;
        utils::check_non_negative(Parameter::NoiseFigure, self.noise_figure)?;
        utils::check_positive(Parameter::DetectionBandwidth, self.detection_bandwidth)?;
        utils::check_finite(Parameter::RequiredSnr, self.required_snr)?;

        self.profile.validate()
    }
}
