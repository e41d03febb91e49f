//! Wall-clock timings for one scoring run, one entry per scan direction.

use crate::types::ScanDirection;
use serde::Serialize;
use std::time::Instant;

/// Time spent scanning every line of one direction.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanTiming {
    pub direction: ScanDirection,
    pub elapsed_ms: f64,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    /// Whole call, including mask unions.
    pub total_ms: f64,
    pub scans: Vec<ScanTiming>,
}

impl TimingBreakdown {
    /// Run the scan `f` for `direction` and record how long it took.
    pub fn time_scan<T>(&mut self, direction: ScanDirection, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.scans.push(ScanTiming {
            direction,
            elapsed_ms: elapsed_ms(start),
        });
        out
    }

    pub fn scan_ms(&self, direction: ScanDirection) -> Option<f64> {
        self.scans
            .iter()
            .find(|t| t.direction == direction)
            .map(|t| t.elapsed_ms)
    }
}

pub(crate) fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1e3
}
