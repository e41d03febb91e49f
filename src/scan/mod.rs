//! Line scanner: run detection along every line of one direction.
//!
//! For each line the cells are binarized, passed through
//! [`crate::runs::find_runs_with_extent`], and every run of at least
//! `min_run` cells is mapped back to grid coordinates and OR-ed into the
//! caller's mask. Shorter runs are dropped whole.
//!
//! With the `parallel` feature the per-line run detection is spread over the
//! rayon pool. Accepted runs are written to the mask afterwards, in line
//! order, so both paths produce identical masks and summaries.

mod geometry;

pub use geometry::LineGeometry;

use crate::detector::DetectionOptions;
use crate::error::{DetectError, Result};
use crate::grid::{CellState, GridView, SegmentMask};
use crate::runs::{find_runs_with_extent, Run};
use crate::types::ScanDirection;
use log::{debug, warn};
use serde::Serialize;

/// Counters collected by one [`scan_lines`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub direction: ScanDirection,
    pub lines: usize,
    pub runs_found: usize,
    pub runs_accepted: usize,
    /// Cells this call turned on that were not already set.
    pub cells_marked: usize,
    /// Run cells whose mapped coordinate fell outside the grid.
    pub out_of_bounds: usize,
}

impl ScanSummary {
    fn empty(direction: ScanDirection) -> Self {
        Self {
            direction,
            lines: 0,
            runs_found: 0,
            runs_accepted: 0,
            cells_marked: 0,
            out_of_bounds: 0,
        }
    }
}

struct LineRuns {
    key: isize,
    found: usize,
    accepted: Vec<Run>,
}

/// Scan every line of `direction` and mark accepted runs in `mask`.
///
/// `mask` must have the grid's shape. Previously set cells are kept.
pub fn scan_lines<G>(
    grid: &G,
    direction: ScanDirection,
    options: &DetectionOptions,
    mask: &mut SegmentMask,
) -> Result<ScanSummary>
where
    G: GridView + Sync,
{
    options.validate()?;
    validate_grid(grid)?;
    mask.ensure_shape(grid.rows(), grid.cols())?;

    let geometry = LineGeometry::new(direction, grid.rows(), grid.cols());
    let lines = collect_line_runs(grid, &geometry, options);

    let mut summary = ScanSummary::empty(direction);
    summary.lines = lines.len();
    for line in &lines {
        summary.runs_found += line.found;
        summary.runs_accepted += line.accepted.len();
        for run in &line.accepted {
            for idx in run.indices() {
                match geometry.cell(line.key, idx) {
                    Some((r, c)) => {
                        if mask.mark(r, c) {
                            summary.cells_marked += 1;
                        }
                    }
                    None => summary.out_of_bounds += 1,
                }
            }
        }
    }

    if summary.out_of_bounds > 0 {
        warn!(
            "scan_lines({direction}) skipped {} out-of-bounds cells on a {}x{} grid",
            summary.out_of_bounds,
            grid.rows(),
            grid.cols()
        );
    }
    debug!(
        "scan_lines({direction}) lines={} runs={} accepted={} marked={}",
        summary.lines, summary.runs_found, summary.runs_accepted, summary.cells_marked
    );
    Ok(summary)
}

/// Reject empty or ragged views and cells outside the `{0, 1, 2}` codes.
pub fn validate_grid<G: GridView>(grid: &G) -> Result<()> {
    let (rows, cols) = grid.shape();
    if rows == 0 || cols == 0 {
        return Err(DetectError::invalid_input(format!(
            "grid must be non-empty, got {rows}x{cols}"
        )));
    }
    for r in 0..rows {
        let row = grid.row(r);
        if row.len() != cols {
            return Err(DetectError::invalid_input(format!(
                "row {r} has {} cells, expected {cols}",
                row.len()
            )));
        }
        if let Some(c) = row.iter().position(|v| !v.is_code()) {
            return Err(DetectError::invalid_input(format!(
                "cell ({r}, {c}) is not a grid code (expected one of 0, 1, 2)"
            )));
        }
    }
    Ok(())
}

/// On/off values along line `k`.
pub fn line_values<G: GridView>(grid: &G, geometry: &LineGeometry, k: isize) -> Vec<bool> {
    (0..geometry.line_len(k))
        .map(|idx| {
            geometry
                .cell(k, idx)
                .is_some_and(|(r, c)| grid.cell(r, c).is_on())
        })
        .collect()
}

fn detect_line<G: GridView>(
    grid: &G,
    geometry: &LineGeometry,
    k: isize,
    options: &DetectionOptions,
) -> LineRuns {
    let values = line_values(grid, geometry, k);
    let runs = find_runs_with_extent(&values, options.gap_tolerance, options.extent);
    let found = runs.len();
    let accepted = runs
        .into_iter()
        .filter(|run| run.len() >= options.min_run)
        .collect();
    LineRuns {
        key: k,
        found,
        accepted,
    }
}

#[cfg(feature = "parallel")]
fn collect_line_runs<G: GridView + Sync>(
    grid: &G,
    geometry: &LineGeometry,
    options: &DetectionOptions,
) -> Vec<LineRuns> {
    use rayon::prelude::*;

    geometry
        .line_keys()
        .into_par_iter()
        .map(|k| detect_line(grid, geometry, k, options))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn collect_line_runs<G: GridView + Sync>(
    grid: &G,
    geometry: &LineGeometry,
    options: &DetectionOptions,
) -> Vec<LineRuns> {
    geometry
        .line_keys()
        .map(|k| detect_line(grid, geometry, k, options))
        .collect()
}
