//! Tunables shared by every detection entry point.
//!
//! `gap_tolerance` is the number of zeros a run may swallow, `min_run` the
//! shortest run (in original cells) that is drawn and counted.

use crate::error::{DetectError, Result};
use crate::runs::RunExtent;
use serde::{Deserialize, Serialize};

pub const DEFAULT_GAP_TOLERANCE: usize = 1;
pub const DEFAULT_MIN_RUN: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionOptions {
    /// Zeros permitted inside an otherwise continuous run.
    pub gap_tolerance: usize,
    /// Minimum run length to keep (must be >= 1).
    pub min_run: usize,
    /// Whether runs are trimmed to original on cells.
    pub extent: RunExtent,
}

impl Default for DetectionOptions {
    fn default() -> Self {
        Self {
            gap_tolerance: DEFAULT_GAP_TOLERANCE,
            min_run: DEFAULT_MIN_RUN,
            extent: RunExtent::default(),
        }
    }
}

impl DetectionOptions {
    /// Checked constructor from signed values.
    ///
    /// Negative tolerances and non-positive minimum lengths are rejected, never
    /// clamped.
    pub fn new(gap_tolerance: i64, min_run: i64) -> Result<Self> {
        if gap_tolerance < 0 {
            return Err(DetectError::invalid_configuration(format!(
                "gap_tolerance must be >= 0, got {gap_tolerance}"
            )));
        }
        if min_run <= 0 {
            return Err(DetectError::invalid_configuration(format!(
                "min_run must be >= 1, got {min_run}"
            )));
        }
        let options = Self {
            gap_tolerance: usize::try_from(gap_tolerance).map_err(|_| {
                DetectError::invalid_configuration(format!(
                    "gap_tolerance {gap_tolerance} does not fit in usize"
                ))
            })?,
            min_run: usize::try_from(min_run).map_err(|_| {
                DetectError::invalid_configuration(format!(
                    "min_run {min_run} does not fit in usize"
                ))
            })?,
            extent: RunExtent::default(),
        };
        Ok(options)
    }

    pub fn with_extent(mut self, extent: RunExtent) -> Self {
        self.extent = extent;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_run == 0 {
            return Err(DetectError::invalid_configuration(
                "min_run must be >= 1, got 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let opts = DetectionOptions::default();
        assert_eq!(opts.gap_tolerance, 1);
        assert_eq!(opts.min_run, 5);
        assert_eq!(opts.extent, RunExtent::Trimmed);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn out_of_range_values_are_configuration_errors() {
        for (gap, min_run) in [(-1, 5), (1, 0), (0, -3)] {
            let err = DetectionOptions::new(gap, min_run).unwrap_err();
            assert!(
                matches!(err, DetectError::InvalidConfiguration(_)),
                "({gap}, {min_run}) gave {err:?}"
            );
        }
        let zero_run = DetectionOptions {
            min_run: 0,
            ..Default::default()
        };
        assert!(matches!(
            zero_run.validate(),
            Err(DetectError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let opts: DetectionOptions = serde_json::from_str(r#"{"min_run": 3}"#).unwrap();
        assert_eq!(opts.min_run, 3);
        assert_eq!(opts.gap_tolerance, DEFAULT_GAP_TOLERANCE);
        let smoothed: DetectionOptions =
            serde_json::from_str(r#"{"extent": "smoothed"}"#).unwrap();
        assert_eq!(smoothed.extent, RunExtent::Smoothed);
    }
}
