//! Gap-tolerant run detection on 1-D on/off sequences.
//!
//! A sequence is binarized (`value > 0` is on), optionally smoothed with a
//! centered moving-window union, and scanned for maximal on stretches.
//!
//! Window alignment
//! - The window has width `w = gap_tolerance + 1` and covers
//!   `[i - w/2, i - w/2 + w - 1]` around position `i` (integer division), the
//!   alignment of a "same"-mode convolution. Even widths therefore lean one
//!   cell to the left.
//! - Positions outside the sequence count as off and the smoothed sequence
//!   never grows past the input length.
//! - A width of `g + 1` bridges interior gaps of up to `g` zeros and never a
//!   gap of `g + 1`.
//!
//! Run extent
//! - [`RunExtent::Trimmed`] reports each smoothed stretch trimmed to its
//!   outermost original on cells, so lengths are measured in original cells.
//! - [`RunExtent::Smoothed`] reports the raw smoothed stretch, including the
//!   cells the window spilled over on either end.
use crate::grid::CellState;
use serde::{Deserialize, Serialize};

/// Half-open index interval `[start, end)` over a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    pub start: usize,
    pub end: usize,
}

impl Run {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "run start {start} past end {end}");
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// How far a reported run reaches relative to the smoothed stretch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunExtent {
    /// Trim to the first and last original on cell.
    #[default]
    Trimmed,
    /// Keep the whole smoothed stretch.
    Smoothed,
}

/// Runs of `sequence` with gaps of up to `gap_tolerance` zeros bridged,
/// trimmed to original on cells. Ascending by start.
pub fn find_runs<T: CellState>(sequence: &[T], gap_tolerance: usize) -> Vec<Run> {
    find_runs_with_extent(sequence, gap_tolerance, RunExtent::Trimmed)
}

/// Same as [`find_runs`] with an explicit [`RunExtent`].
pub fn find_runs_with_extent<T: CellState>(
    sequence: &[T],
    gap_tolerance: usize,
    extent: RunExtent,
) -> Vec<Run> {
    if sequence.is_empty() {
        return Vec::new();
    }
    let on: Vec<bool> = sequence.iter().map(|&v| v.is_on()).collect();
    let smoothed = if gap_tolerance > 0 {
        window_union(&on, gap_tolerance + 1)
    } else {
        on.clone()
    };

    let n = smoothed.len();
    let mut runs = Vec::new();
    let mut i = 0usize;
    while i < n {
        if !smoothed[i] {
            i += 1;
            continue;
        }
        let mut end = i;
        while end < n && smoothed[end] {
            end += 1;
        }
        let run = match extent {
            RunExtent::Smoothed => Some(Run::new(i, end)),
            RunExtent::Trimmed => trim_to_on(&on, i, end),
        };
        runs.extend(run);
        i = end;
    }
    runs
}

/// Centered moving-window union with zero padding outside the sequence.
fn window_union(on: &[bool], width: usize) -> Vec<bool> {
    let n = on.len();
    let mut prefix = Vec::with_capacity(n + 1);
    prefix.push(0usize);
    for &v in on {
        let last = prefix[prefix.len() - 1];
        prefix.push(last + usize::from(v));
    }

    let left = width / 2;
    let right = width - 1 - left;
    (0..n)
        .map(|i| {
            let lo = i.saturating_sub(left);
            let hi = (i + right).min(n - 1);
            prefix[hi + 1] > prefix[lo]
        })
        .collect()
}

fn trim_to_on(on: &[bool], start: usize, end: usize) -> Option<Run> {
    let first = (start..end).find(|&i| on[i])?;
    let last = (start..end).rev().find(|&i| on[i])?;
    Some(Run::new(first, last + 1))
}
