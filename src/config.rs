//! Extraction parameters and their validation
//!
//! The two tunables of the pipeline, merge threshold and minimum coverage
//! percent, are grouped in [`ExtractionParams`]. Parameters can be
//! constructed programmatically, parsed from user-supplied text, or loaded
//! from JSON files for reproducible runs:
//!
//! ```no_run
//! use palette_scan::ExtractionParams;
//! use std::path::Path;
//!
//! // Load from file
//! let params = ExtractionParams::from_json_file(Path::new("params.json"))?;
//!
//! // Or use defaults
//! let params = ExtractionParams::default();
//! # Ok::<(), palette_scan::ExtractionError>(())
//! ```

use crate::constants::defaults;
use crate::{ExtractionError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable parameters for one palette extraction run.
///
/// Both values are logically unbounded above; the reference UI restricts
/// them to the domains in [`crate::constants::ranges`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtractionParams {
    /// Maximum Euclidean RGB distance at which two colors merge into one
    /// cluster. Merging happens strictly below this value.
    pub threshold: f64,

    /// Minimum coverage percent for a distinct color to enter the merge
    /// stage. Zero retains every distinct color.
    pub min_percent: f64,
}

impl Default for ExtractionParams {
    fn default() -> Self {
        Self {
            threshold: defaults::THRESHOLD,
            min_percent: defaults::MIN_PERCENT,
        }
    }
}

impl ExtractionParams {
    /// Create validated parameters
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either value is negative or non-finite
    pub fn new(threshold: f64, min_percent: f64) -> Result<Self> {
        let params = Self {
            threshold,
            min_percent,
        };
        params.validate()?;
        Ok(params)
    }

    /// Parse parameters from user-supplied text (e.g., UI entry fields)
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the offending field if either
    /// string fails to parse as a non-negative number
    pub fn from_text(threshold: &str, min_percent: &str) -> Result<Self> {
        let threshold_value: f64 = threshold
            .trim()
            .parse()
            .map_err(|_| ExtractionError::invalid_parameter("threshold", threshold))?;
        let min_percent_value: f64 = min_percent
            .trim()
            .parse()
            .map_err(|_| ExtractionError::invalid_parameter("min_percent", min_percent))?;

        Self::new(threshold_value, min_percent_value)
    }

    /// Check that both parameters are finite and non-negative
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ExtractionError::invalid_parameter(
                "threshold",
                self.threshold.to_string(),
            ));
        }
        if !self.min_percent.is_finite() || self.min_percent < 0.0 {
            return Err(ExtractionError::invalid_parameter(
                "min_percent",
                self.min_percent.to_string(),
            ));
        }
        Ok(())
    }

    /// Load parameters from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ExtractionError::config_load(format!("read {}", path.display()), e))?;
        let params: Self = serde_json::from_str(&content)
            .map_err(|e| ExtractionError::config_load(format!("parse {}", path.display()), e))?;
        params.validate()?;
        Ok(params)
    }

    /// Save parameters to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ExtractionError::config_load("serialize parameters", e))?;
        std::fs::write(path, json)
            .map_err(|e| ExtractionError::config_load(format!("write {}", path.display()), e))?;
        Ok(())
    }
}
