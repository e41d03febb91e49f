//! Segment detector: line scans assembled into highlight masks.
//!
//! Overview
//! - [`detect_diagonal_segments`] ORs the main-diagonal (↘) and
//!   anti-diagonal (↙) scans into one fresh mask.
//! - [`detect_axis_segments`] does the same for rows (→) and columns (↓).
//! - [`detect_segments`] is the general form over any set of directions.
//!
//! All entry points read the grid immutably and allocate their own mask, so
//! they can be called concurrently on a shared grid.
//!
//! Modules
//! - [`options`] – the `gap_tolerance` / `min_run` tunables.

pub mod options;

pub use options::{DetectionOptions, DEFAULT_GAP_TOLERANCE, DEFAULT_MIN_RUN};

use crate::error::Result;
use crate::grid::{GridView, SegmentMask};
use crate::scan::{scan_lines, validate_grid, ScanSummary};
use crate::types::ScanDirection;

/// Scan `directions` into one fresh mask.
pub fn detect_segments<G>(
    grid: &G,
    directions: &[ScanDirection],
    options: &DetectionOptions,
) -> Result<SegmentMask>
where
    G: GridView + Sync,
{
    detect_segments_with_summaries(grid, directions, options).map(|(mask, _)| mask)
}

/// Like [`detect_segments`], also returning the per-direction scan counters.
pub fn detect_segments_with_summaries<G>(
    grid: &G,
    directions: &[ScanDirection],
    options: &DetectionOptions,
) -> Result<(SegmentMask, Vec<ScanSummary>)>
where
    G: GridView + Sync,
{
    options.validate()?;
    validate_grid(grid)?;
    let mut mask = SegmentMask::like(grid);
    let mut summaries = Vec::with_capacity(directions.len());
    for &direction in directions {
        summaries.push(scan_lines(grid, direction, options, &mut mask)?);
    }
    Ok((mask, summaries))
}

/// Union of the ↘ and ↙ scans.
pub fn detect_diagonal_segments<G>(grid: &G, options: &DetectionOptions) -> Result<SegmentMask>
where
    G: GridView + Sync,
{
    detect_segments(grid, &ScanDirection::DIAGONALS, options)
}

/// Union of the row and column scans.
pub fn detect_axis_segments<G>(grid: &G, options: &DetectionOptions) -> Result<SegmentMask>
where
    G: GridView + Sync,
{
    detect_segments(grid, &ScanDirection::AXES, options)
}

/// Detector holding validated options, reusable across grids.
#[derive(Clone, Debug, Default)]
pub struct SegmentDetector {
    options: DetectionOptions,
}

impl SegmentDetector {
    pub fn new(options: DetectionOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &DetectionOptions {
        &self.options
    }

    pub fn diagonal_segments<G: GridView + Sync>(&self, grid: &G) -> Result<SegmentMask> {
        detect_diagonal_segments(grid, &self.options)
    }

    pub fn axis_segments<G: GridView + Sync>(&self, grid: &G) -> Result<SegmentMask> {
        detect_axis_segments(grid, &self.options)
    }

    /// Union of all four directions.
    pub fn all_segments<G: GridView + Sync>(&self, grid: &G) -> Result<SegmentMask> {
        detect_segments(grid, &ScanDirection::ALL, &self.options)
    }
}
