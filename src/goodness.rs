//! Goodness score: fraction of the grid covered by detected line segments.
//!
//! The union of the diagonal and axis masks is counted and divided by
//! `rows * rows`. The denominator assumes a square grid; for non-square
//! grids the value is reported as-is and can leave `[0, 1]`.
use crate::detector::{
    detect_axis_segments, detect_diagonal_segments, DetectionOptions, SegmentDetector,
};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{DirectionCoverage, GoodnessReport, GridDescriptor, TimingBreakdown};
use crate::error::Result;
use crate::grid::{GridView, SegmentMask, UlamGrid, ORIGIN, PRIME};
use crate::scan::scan_lines;
use crate::types::ScanDirection;
use log::debug;
use std::time::Instant;

/// Union of the diagonal and axis masks.
pub fn goodness_mask<G>(grid: &G, options: &DetectionOptions) -> Result<SegmentMask>
where
    G: GridView + Sync,
{
    let mut mask = detect_diagonal_segments(grid, options)?;
    mask.union_with(&detect_axis_segments(grid, options)?)?;
    Ok(mask)
}

/// Fraction of `rows²` covered by the union of all four directions.
pub fn score<G>(grid: &G, options: &DetectionOptions) -> Result<f64>
where
    G: GridView + Sync,
{
    let mask = goodness_mask(grid, options)?;
    Ok(coverage_fraction(&mask, grid.rows()))
}

/// `mask.count() / rows²`.
pub fn coverage_fraction(mask: &SegmentMask, rows: usize) -> f64 {
    if rows == 0 {
        return 0.0;
    }
    mask.count() as f64 / (rows * rows) as f64
}

/// Score together with per-direction coverage and stage timings.
pub fn score_with_diagnostics(
    grid: &UlamGrid,
    options: &DetectionOptions,
) -> Result<GoodnessReport> {
    options.validate()?;
    let total_start = Instant::now();
    let mut timings = TimingBreakdown::default();

    let mut directions = Vec::with_capacity(ScanDirection::ALL.len());
    let mut diagonal = SegmentMask::like(grid);
    let mut axis = SegmentMask::like(grid);
    for direction in ScanDirection::ALL {
        let mut own = SegmentMask::like(grid);
        let summary =
            timings.time_scan(direction, || scan_lines(grid, direction, options, &mut own))?;
        if direction.is_diagonal() {
            diagonal.union_with(&own)?;
        } else {
            axis.union_with(&own)?;
        }
        directions.push(DirectionCoverage::from(summary));
    }

    let mut mask = diagonal.clone();
    mask.union_with(&axis)?;
    let score = coverage_fraction(&mask, grid.rows());
    timings.total_ms = elapsed_ms(total_start);

    debug!(
        "score_with_diagnostics {}x{} score={score:.4} diagonal={} axis={} union={}",
        grid.rows(),
        grid.cols(),
        diagonal.count(),
        axis.count(),
        mask.count()
    );

    Ok(GoodnessReport {
        grid: GridDescriptor {
            rows: grid.rows(),
            cols: grid.cols(),
            square: grid.is_square(),
            prime_cells: grid.count(PRIME),
            origin_cells: grid.count(ORIGIN),
        },
        options: *options,
        score,
        diagonal_cells: diagonal.count(),
        axis_cells: axis.count(),
        union_cells: mask.count(),
        directions,
        timings,
        mask,
    })
}

/// Scorer bound to one set of validated options.
#[derive(Clone, Debug, Default)]
pub struct GoodnessScorer {
    detector: SegmentDetector,
}

impl GoodnessScorer {
    pub fn new(options: DetectionOptions) -> Result<Self> {
        Ok(Self {
            detector: SegmentDetector::new(options)?,
        })
    }

    pub fn options(&self) -> &DetectionOptions {
        self.detector.options()
    }

    pub fn score<G: GridView + Sync>(&self, grid: &G) -> Result<f64> {
        score(grid, self.detector.options())
    }

    pub fn report(&self, grid: &UlamGrid) -> Result<GoodnessReport> {
        score_with_diagnostics(grid, self.detector.options())
    }
}
