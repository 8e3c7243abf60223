//! Link budget functions exposed to Python

use ionolink_core::{
    constants::VERTICAL_INCIDENCE_RAD,
    profile::{DensityProfile, DensityUnit, HeightUnit, ProfileFormat},
    AttenuationFormula, LinkBudgetInputs, LinkBudgetResult,
};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::errors::ErrorConverter;

/// Minimum transmit power for one parameter set
///
/// Heights in metres, densities in m⁻³. Returns a dict with
/// `required_receive_power_db`, `plasma_attenuation_db`, `fspl_db`,
/// `min_tx_power_db` and `min_tx_power_watts`.
#[pyfunction]
#[pyo3(signature = (
    distance, frequency, temperature, noise_figure, detection_bandwidth, required_snr,
    heights, densities, angle = VERTICAL_INCIDENCE_RAD, formula = "squared"
))]
#[allow(clippy::too_many_arguments)]
pub fn compute_link_budget(
    py: Python<'_>,
    distance: f64,
    frequency: f64,
    temperature: f64,
    noise_figure: f64,
    detection_bandwidth: f64,
    required_snr: f64,
    heights: Vec<f64>,
    densities: Vec<f64>,
    angle: f64,
    formula: &str,
) -> PyResult<PyObject> {
    if heights.len() != densities.len() {
        return Err(PyValueError::new_err(format!(
            "heights and densities differ in length ({} vs {})",
            heights.len(),
            densities.len()
        )));
    }
    let attenuation_formula = AttenuationFormula::from_name(formula).ok_or_else(|| {
        PyValueError::new_err(format!("unknown formula '{}', expected 'squared' or 'linear'", formula))
    })?;

    let inputs = LinkBudgetInputs {
        distance,
        frequency,
        temperature,
        angle,
        noise_figure,
        detection_bandwidth,
        required_snr,
        profile: DensityProfile::from_si(heights.into_iter().zip(densities)),
        attenuation_formula,
    };

    let result = ionolink_core::compute_link_budget(inputs)
        .map_err(ErrorConverter::link_budget_error_to_py)?;
    result_to_dict(py, &result)
}

fn result_to_dict(py: Python<'_>, result: &LinkBudgetResult) -> PyResult<PyObject> {
    let dict = PyDict::new(py);
    dict.set_item("required_receive_power_db", result.required_receive_power_db)?;
    dict.set_item("plasma_attenuation_db", result.plasma_attenuation_db)?;
    dict.set_item("fspl_db", result.fspl_db)?;
    dict.set_item("min_tx_power_db", result.min_tx_power_db)?;
    dict.set_item("min_tx_power_watts", result.min_tx_power_watts)?;
    Ok(dict.to_object(py))
}

/// Load a tabulated profile, returning `(heights_m, densities_m3)`
#[pyfunction]
#[pyo3(signature = (path, height_unit = "km", density_unit = "cm-3", skip_lines = 0))]
pub fn load_profile(
    path: &str,
    height_unit: &str,
    density_unit: &str,
    skip_lines: usize,
) -> PyResult<(Vec<f64>, Vec<f64>)> {
    let height_unit = match height_unit {
        "m" => HeightUnit::Meters,
        "km" => HeightUnit::Kilometers,
        other => return Err(PyValueError::new_err(format!("unknown height unit '{}'", other))),
    };
    let density_unit = match density_unit {
        "m-3" => DensityUnit::PerCubicMeter,
        "cm-3" => DensityUnit::PerCubicCentimeter,
        other => return Err(PyValueError::new_err(format!("unknown density unit '{}'", other))),
    };
    let format = ProfileFormat {
        height_unit,
        density_unit,
        skip_lines,
        ..ProfileFormat::default()
    };

    let profile = ionolink_core::profile::load_profile(path, &format)
        .map_err(ErrorConverter::load_error_to_py)?;
    Ok(profile.samples().iter().map(|s| (s.height, s.density)).unzip())
}

/// Critical frequency (Hz) for a peak electron density (m⁻³)
#[pyfunction]
pub fn critical_frequency(peak_density: f64) -> PyResult<f64> {
    if !(peak_density.is_finite() && peak_density >= 0.0) {
        return Err(PyValueError::new_err("peak density must be finite and non-negative"));
    }
    Ok(ionolink_core::critical_frequency(peak_density))
}
