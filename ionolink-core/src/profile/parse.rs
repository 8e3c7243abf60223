//! Tabulated profile text
//!
//! Accepts the loose column formats profile tools emit:
//!
//! ```text
//! # height_km  density_cm3
//! 100.0, 1.0e5
//! 150.0  3.2e5
//! 200.0;5.0e5
//! ```
//!
//! Fields may be separated by commas, semicolons, tabs or spaces. Blank lines
//! and lines starting with `#` are ignored anywhere in the text. A fixed
//! number of leading header lines can be skipped as well.

use heapless::Vec as FieldVec;

use crate::errors::{LinkBudgetError, LinkResult};
use crate::traits::Validate;
use crate::units::{km_to_m, per_cm3_to_per_m3};

use super::{DensityProfile, DensitySample};

/// Maximum number of columns per line
pub const MAX_COLUMNS: usize = 8;

/// Unit of the height column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeightUnit {
    /// Metres
    Meters,
    /// Kilometres
    #[default]
    Kilometers,
}

impl HeightUnit {
    fn to_meters(self, value: f64) -> f64 {
        match self {
            Self::Meters => value,
            Self::Kilometers => km_to_m(value),
        }
    }
}

/// Unit of the density column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DensityUnit {
    /// Electrons per cubic metre
    PerCubicMeter,
    /// Electrons per cubic centimetre
    #[default]
    PerCubicCentimeter,
}

impl DensityUnit {
    fn to_per_m3(self, value: f64) -> f64 {
        match self {
            Self::PerCubicMeter => value,
            Self::PerCubicCentimeter => per_cm3_to_per_m3(value),
        }
    }
}

/// How to read a tabulated profile
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileFormat {
    /// Unit of the height column
    pub height_unit: HeightUnit,
    /// Unit of the density column
    pub density_unit: DensityUnit,
    /// Leading lines to drop before parsing (headers)
    pub skip_lines: usize,
    /// Zero-based index of the height column
    pub height_column: usize,
    /// Zero-based index of the density column
    pub density_column: usize,
}

impl Default for ProfileFormat {
    fn default() -> Self {
        Self {
            height_unit: HeightUnit::Kilometers,
            density_unit: DensityUnit::PerCubicCentimeter,
            skip_lines: 0,
            height_column: 0,
            density_column: 1,
        }
    }
}

impl ProfileFormat {
    /// Format for SI tables: metres and m⁻³
    pub fn si() -> Self {
        Self {
            height_unit: HeightUnit::Meters,
            density_unit: DensityUnit::PerCubicMeter,
            ..Self::default()
        }
    }

    /// Skip `lines` header lines
    pub fn with_skip_lines(mut self, lines: usize) -> Self {
        self.skip_lines = lines;
        self
    }

    /// Read height and density from the given columns
    pub fn with_columns(mut self, height_column: usize, density_column: usize) -> Self {
        self.height_column = height_column;
        self.density_column = density_column;
        self
    }

    /// Parse a single data line into an SI sample
    fn parse_line(&self, line: &str, line_number: usize) -> LinkResult<DensitySample> {
        let mut fields: FieldVec<&str, MAX_COLUMNS> = FieldVec::new();
        for field in line
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|f| !f.is_empty())
        {
            fields.push(field).map_err(|_| LinkBudgetError::ProfileParse {
                line: line_number,
                reason: "too many columns",
            })?;
        }

        let height = Self::parse_field(&fields, self.height_column, line_number, "missing height column")?;
        let density = Self::parse_field(&fields, self.density_column, line_number, "missing density column")?;

        Ok(DensitySample {
            height: self.height_unit.to_meters(height),
            density: self.density_unit.to_per_m3(density),
        })
    }

    fn parse_field(
        fields: &[&str],
        column: usize,
        line: usize,
        missing: &'static str,
    ) -> LinkResult<f64> {
        let raw = fields
            .get(column)
            .ok_or(LinkBudgetError::ProfileParse { line, reason: missing })?;
        raw.parse::<f64>().map_err(|_| LinkBudgetError::ProfileParse {
            line,
            reason: "not a number",
        })
    }
}

impl DensityProfile {
    /// Parse and validate a tabulated profile
    ///
    /// Rows are kept in file order; a table that is not sorted by height is
    /// rejected by validation rather than silently re-sorted.
    pub fn parse_str(text: &str, format: &ProfileFormat) -> LinkResult<Self> {
        let mut profile = Self::new();

        for (index, line) in text.lines().enumerate().skip(format.skip_lines) {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            profile.push(format.parse_line(trimmed, index + 1)?);
        }

        profile.validate()?;
        Ok(profile)
    }
}
