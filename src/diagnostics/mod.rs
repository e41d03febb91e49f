//! Serializable report describing one goodness computation.
//!
//! [`GoodnessReport`] is returned by
//! [`score_with_diagnostics`](crate::goodness::score_with_diagnostics) and is
//! what the CLI writes to disk. It repeats the score together with the
//! per-direction counters and scan timings that produced it.

pub mod timing;

pub use timing::{ScanTiming, TimingBreakdown};

use crate::detector::DetectionOptions;
use crate::grid::SegmentMask;
use crate::scan::ScanSummary;
use crate::types::ScanDirection;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDescriptor {
    pub rows: usize,
    pub cols: usize,
    pub square: bool,
    pub prime_cells: usize,
    pub origin_cells: usize,
}

/// What a single direction contributes when scanned on its own.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionCoverage {
    pub direction: ScanDirection,
    pub lines: usize,
    pub runs_found: usize,
    pub runs_accepted: usize,
    pub cells: usize,
    pub out_of_bounds: usize,
}

impl From<ScanSummary> for DirectionCoverage {
    fn from(summary: ScanSummary) -> Self {
        Self {
            direction: summary.direction,
            lines: summary.lines,
            runs_found: summary.runs_found,
            runs_accepted: summary.runs_accepted,
            cells: summary.cells_marked,
            out_of_bounds: summary.out_of_bounds,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodnessReport {
    pub grid: GridDescriptor,
    pub options: DetectionOptions,
    pub score: f64,
    pub diagonal_cells: usize,
    pub axis_cells: usize,
    pub union_cells: usize,
    pub directions: Vec<DirectionCoverage>,
    pub timings: TimingBreakdown,
    #[serde(skip)]
    pub mask: SegmentMask,
}

impl GoodnessReport {
    pub fn direction(&self, direction: ScanDirection) -> Option<&DirectionCoverage> {
        self.directions.iter().find(|d| d.direction == direction)
    }
}
