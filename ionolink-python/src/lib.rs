//! IonoLink Python Bindings
//!
//! Exposes the pure link-budget composer to notebook front ends. Widgets
//! call `compute_link_budget` on every change and render the returned
//! dict; no state is kept on the Rust side between calls.
//!
//! ## Usage
//!
//! ```python
//! import ionolink
//!
//! heights, densities = ionolink.load_profile("daytime_f2.csv")
//! budget = ionolink.compute_link_budget(
//!     distance=25e3, frequency=4e6, temperature=300.0,
//!     noise_figure=10.0, detection_bandwidth=100e6, required_snr=14.0,
//!     heights=heights, densities=densities,
//! )
//! print(f"{budget['min_tx_power_watts']:.3f} W")
//! ```

use pyo3::prelude::*;

mod budget;
mod errors;

use budget::{compute_link_budget, critical_frequency, load_profile};

/// IonoLink Python module
#[pymodule]
fn ionolink(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("__doc__", "Radar link budget through a plasma layer")?;

    m.add_function(wrap_pyfunction!(compute_link_budget, m)?)?;
    m.add_function(wrap_pyfunction!(load_profile, m)?)?;
    m.add_function(wrap_pyfunction!(critical_frequency, m)?)?;

    m.add("VERTICAL_INCIDENCE", ionolink_core::constants::VERTICAL_INCIDENCE_RAD)?;

    Ok(())
}
