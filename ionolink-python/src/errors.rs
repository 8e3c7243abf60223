//! Mapping core errors to Python exceptions
//!
//! ```text
//! LinkBudgetError       → ValueError
//! ProfileLoadError::Io  → OSError
//! ```

use ionolink_core::{profile::ProfileLoadError, LinkBudgetError};
use pyo3::exceptions::{PyOSError, PyValueError};
use pyo3::PyErr;

/// Converts core errors into Python exceptions
pub struct ErrorConverter;

impl ErrorConverter {
    /// Invalid input or unparsable profile
    pub fn link_budget_error_to_py(error: LinkBudgetError) -> PyErr {
        PyValueError::new_err(error.to_string())
    }

    /// Profile file failures
    pub fn load_error_to_py(error: ProfileLoadError) -> PyErr {
        match error {
            ProfileLoadError::Io(io) => PyOSError::new_err(io.to_string()),
            ProfileLoadError::Profile(inner) => Self::link_budget_error_to_py(inner),
        }
    }
}
