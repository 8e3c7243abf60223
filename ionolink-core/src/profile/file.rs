//! Loading profiles from disk

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use thiserror_no_std::Error;

use crate::errors::LinkBudgetError;

use super::{DensityProfile, ProfileFormat};

/// Errors from [`load_profile`]
#[derive(Error, Debug)]
pub enum ProfileLoadError {
    /// The file could not be opened or read
    #[error("Failed to read profile: {0}")]
    Io(#[from] std::io::Error),

    /// The contents did not form a valid profile
    #[error("{0}")]
    Profile(#[from] LinkBudgetError),
}

/// Read and validate a tabulated density profile from `path`
///
/// ```rust,no_run
/// use ionolink_core::profile::{load_profile, ProfileFormat};
///
/// let profile = load_profile("iri_profile.txt", &ProfileFormat::default().with_skip_lines(1))?;
/// println!("{} samples, foF2 = {:.2} MHz", profile.len(), profile.critical_frequency() / 1e6);
/// # Ok::<(), ionolink_core::profile::ProfileLoadError>(())
/// ```
pub fn load_profile(
    path: impl AsRef<Path>,
    format: &ProfileFormat,
) -> Result<DensityProfile, ProfileLoadError> {
    let path = path.as_ref();
    let mut text = String::new();
    BufReader::new(File::open(path)?).read_to_string(&mut text)?;

    let profile = DensityProfile::parse_str(&text, format)?;
    log_debug!(
        "Loaded {} profile samples from {} (peak {:.3e} m^-3)",
        profile.len(),
        path.display(),
        profile.peak_density()
    );

    Ok(profile)
}
