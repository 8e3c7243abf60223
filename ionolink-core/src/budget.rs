//! Link Budget Composer
//!
//! Combines the receiver noise model, the plasma path integral and free-space
//! spreading into the minimum transmit power that still closes the link:
//!
//! ```text
//! P_rx,min = noise_floor(T, NF, B) + SNR_req
//! P_tx,min = P_rx,min + A_plasma + FSPL          [dB]
//! P_tx,min = 10^(P_tx,min / 10)                  [linear]
//! ```
//!
//! [`compute_link_budget`] is a pure function. It validates its inputs, runs
//! the pipeline from scratch and returns a fresh [`LinkBudgetResult`]; nothing
//! is cached between calls, so a front end can recompute on every widget
//! change and simply render the most recent result.

use core::fmt;

use crate::{
    constants::defaults::{
        DEFAULT_DETECTION_BANDWIDTH_HZ, DEFAULT_DISTANCE_M, DEFAULT_FREQUENCY_HZ,
        DEFAULT_NOISE_FIGURE_DB, DEFAULT_REQUIRED_SNR_DB, DEFAULT_TEMPERATURE_K,
        VERTICAL_INCIDENCE_RAD,
    },
    errors::LinkResult,
    path::plasma_path_attenuation_with,
    physics::{
        attenuation::AttenuationFormula,
        fspl::free_space_path_loss,
        noise::{min_detectable_signal, noise_floor},
    },
    profile::DensityProfile,
    traits::Validate,
    units::db_to_linear,
};

/// Everything the link budget depends on, in SI units
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkBudgetInputs {
    /// One-way distance to the target (m)
    pub distance: f64,
    /// Transmit frequency (Hz)
    pub frequency: f64,
    /// Plasma temperature (K)
    pub temperature: f64,
    /// Angle of incidence (rad), π/2 for a vertical path
    pub angle: f64,
    /// Receiver noise figure (dB)
    pub noise_figure: f64,
    /// Detection bandwidth (Hz)
    pub detection_bandwidth: f64,
    /// Required signal-to-noise ratio (dB)
    pub required_snr: f64,
    /// Electron density along the path
    pub profile: DensityProfile,
    /// Denominator variant for the attenuation constant
    #[cfg_attr(feature = "serde", serde(default))]
    pub attenuation_formula: AttenuationFormula,
}

impl Default for LinkBudgetInputs {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE_M,
            frequency: DEFAULT_FREQUENCY_HZ,
            temperature: DEFAULT_TEMPERATURE_K,
            angle: VERTICAL_INCIDENCE_RAD,
            noise_figure: DEFAULT_NOISE_FIGURE_DB,
            detection_bandwidth: DEFAULT_DETECTION_BANDWIDTH_HZ,
            required_snr: DEFAULT_REQUIRED_SNR_DB,
            profile: DensityProfile::new(),
            attenuation_formula: AttenuationFormula::default(),
        }
    }
}

impl LinkBudgetInputs {
    /// Builder seeded with the default scenario
    pub fn builder() -> LinkBudgetInputsBuilder {
        LinkBudgetInputsBuilder::new()
    }

    /// Default scenario looking straight up through `profile`
    pub fn vertical_incidence(profile: DensityProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }
}

/// Builder for [`LinkBudgetInputs`]
///
/// Starts from the default operator scenario; each setter overrides one
/// parameter.
///
/// ```rust
/// use ionolink_core::{LinkBudgetInputs, profile::DensityProfile, units::mhz_to_hz};
///
/// let inputs = LinkBudgetInputs::builder()
///     .frequency(mhz_to_hz(6.5))
///     .noise_figure(6.0)
///     .profile(DensityProfile::from_km_per_cm3([(100.0, 1.0e5), (200.0, 5.0e5)]))
///     .build()?;
/// assert_eq!(inputs.frequency, 6.5e6);
/// # Ok::<(), ionolink_core::LinkBudgetError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinkBudgetInputsBuilder {
    inputs: LinkBudgetInputs,
}

impl LinkBudgetInputsBuilder {
    /// Create a builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// One-way distance (m)
    pub fn distance(mut self, distance: f64) -> Self {
        self.inputs.distance = distance;
        self
    }

    /// Transmit frequency (Hz)
    pub fn frequency(mut self, frequency: f64) -> Self {
        self.inputs.frequency = frequency;
        self
    }

    /// Plasma temperature (K)
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.inputs.temperature = temperature;
        self
    }

    /// Angle of incidence (rad)
    pub fn angle(mut self, angle: f64) -> Self {
        self.inputs.angle = angle;
        self
    }

    /// Receiver noise figure (dB)
    pub fn noise_figure(mut self, noise_figure: f64) -> Self {
        self.inputs.noise_figure = noise_figure;
        self
    }

    /// Detection bandwidth (Hz)
    pub fn detection_bandwidth(mut self, detection_bandwidth: f64) -> Self {
        self.inputs.detection_bandwidth = detection_bandwidth;
        self
    }

    /// Required SNR (dB)
    pub fn required_snr(mut self, required_snr: f64) -> Self {
        self.inputs.required_snr = required_snr;
        self
    }

    /// Density profile (SI units)
    pub fn profile(mut self, profile: DensityProfile) -> Self {
        self.inputs.profile = profile;
        self
    }

    /// Attenuation constant variant
    pub fn attenuation_formula(mut self, formula: AttenuationFormula) -> Self {
        self.inputs.attenuation_formula = formula;
        self
    }

    /// Validate and return the inputs
    pub fn build(self) -> LinkResult<LinkBudgetInputs> {
        self.inputs.validate()?;
        Ok(self.inputs)
    }

    /// Return the inputs without validation
    ///
    /// [`compute_link_budget`] still validates, so this is safe to pass on;
    /// it exists for front ends that want to report errors at compute time.
    pub fn build_unchecked(self) -> LinkBudgetInputs {
        self.inputs
    }
}

/// Power budget for one set of inputs
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkBudgetResult {
    /// Minimum detectable signal at the receiver (dB)
    pub required_receive_power_db: f64,
    /// Two-way plasma attenuation (dB)
    pub plasma_attenuation_db: f64,
    /// Free-space path loss (dB)
    pub fspl_db: f64,
    /// Minimum transmit power (dB)
    pub min_tx_power_db: f64,
    /// Minimum transmit power, linear: 10^(dB/10)
    ///
    /// Labelled watts for compatibility with existing tooling. The noise
    /// floor is referenced to 1 mW, so the value reads as mW.
    pub min_tx_power_watts: f64,
}

impl fmt::Display for LinkBudgetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Required receive power: {:>10.2} dB", self.required_receive_power_db)?;
        writeln!(f, "Plasma attenuation:     {:>10.2} dB", self.plasma_attenuation_db)?;
        writeln!(f, "Free-space path loss:   {:>10.2} dB", self.fspl_db)?;
        writeln!(f, "Minimum transmit power: {:>10.2} dB", self.min_tx_power_db)?;
        write!(f, "Minimum transmit power: {:>10.4e} W", self.min_tx_power_watts)
    }
}

/// Minimum transmit power needed to reach the required SNR
///
/// Fails with the first invalid parameter (see [`crate::validators`]); no
/// partial result is returned. Profiles with fewer than two samples are
/// valid and add no plasma loss.
pub fn compute_link_budget(inputs: LinkBudgetInputs) -> LinkResult<LinkBudgetResult> {
    inputs.validate()?;

    let LinkBudgetInputs {
        distance,
        frequency,
        temperature,
        angle,
        noise_figure,
        detection_bandwidth,
        required_snr,
        profile,
        attenuation_formula,
    } = inputs;

    let critical = profile.critical_frequency();
    if frequency <= critical {
        log_warn!(
            "Transmit frequency {:.3} MHz is at or below the profile critical frequency {:.3} MHz; the signal reflects inside the layer",
            frequency / 1e6,
            critical / 1e6
        );
    }

    let floor = noise_floor(temperature, noise_figure, detection_bandwidth);
    let required_receive_power_db = min_detectable_signal(floor, required_snr);
    let plasma_attenuation_db =
        plasma_path_attenuation_with(attenuation_formula, frequency, temperature, angle, &profile);
    let fspl_db = free_space_path_loss(distance, frequency);

    let min_tx_power_db = required_receive_power_db + plasma_attenuation_db + fspl_db;
    let min_tx_power_watts = db_to_linear(min_tx_power_db);

    log_debug!(
        "Link budget ({} formula, {} samples): floor {:.2} dB, rx {:.2} dB, plasma {:.4} dB, fspl {:.2} dB, tx {:.2} dB",
        attenuation_formula.name(),
        profile.len(),
        floor,
        required_receive_power_db,
        plasma_attenuation_db,
        fspl_db,
        min_tx_power_db
    );

    Ok(LinkBudgetResult {
        required_receive_power_db,
        plasma_attenuation_db,
        fspl_db,
        min_tx_power_db,
        min_tx_power_watts,
    })
}
