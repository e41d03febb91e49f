#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod goodness;
pub mod grid;
pub mod types;

// Building blocks, public for tools and tests.
pub mod config;
pub mod runs;
pub mod scan;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{
    detect_axis_segments, detect_diagonal_segments, detect_segments, DetectionOptions,
    SegmentDetector,
};
pub use crate::diagnostics::GoodnessReport;
pub use crate::error::DetectError;
pub use crate::goodness::{score, score_with_diagnostics, GoodnessScorer};
pub use crate::grid::{SegmentMask, UlamGrid};
pub use crate::runs::{find_runs, Run, RunExtent};
pub use crate::types::ScanDirection;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use ulam_goodness::prelude::*;
///
/// # fn main() -> Result<(), DetectError> {
/// let mut grid = UlamGrid::zeros(10, 10)?;
/// for i in 0..6 {
///     grid.set(i, i, 1)?;
/// }
/// let opts = DetectionOptions::default();
/// let mask = detect_diagonal_segments(&grid, &opts)?;
/// assert_eq!(mask.count(), 6);
/// assert!((score(&grid, &opts)? - 0.06).abs() < 1e-12);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::grid::GridView;
    pub use crate::{
        detect_axis_segments, detect_diagonal_segments, score, DetectError, DetectionOptions,
        SegmentMask, UlamGrid,
    };
}
