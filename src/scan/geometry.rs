use crate::types::ScanDirection;
use std::ops::Range;

/// Line enumeration and local-index → grid-coordinate mapping for one
/// [`ScanDirection`] over a `rows × cols` grid.
///
/// Anti-diagonals reuse the main-diagonal indexing on the horizontally
/// mirrored grid: every coordinate is produced in the mirrored frame and then
/// reflected with `c -> cols - 1 - c`. Reads and writes go through the same
/// [`LineGeometry::cell`], so both diagonal families share one code path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineGeometry {
    pub direction: ScanDirection,
    pub rows: usize,
    pub cols: usize,
}

impl LineGeometry {
    pub fn new(direction: ScanDirection, rows: usize, cols: usize) -> Self {
        Self {
            direction,
            rows,
            cols,
        }
    }

    /// Line keys: diagonal offsets `-(rows-1)..=cols-1`, or row/column indices.
    pub fn line_keys(&self) -> Range<isize> {
        match self.direction {
            ScanDirection::MainDiagonal | ScanDirection::AntiDiagonal => {
                if self.rows == 0 || self.cols == 0 {
                    0..0
                } else {
                    -(self.rows as isize - 1)..self.cols as isize
                }
            }
            ScanDirection::Row => 0..self.rows as isize,
            ScanDirection::Column => 0..self.cols as isize,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_keys().len()
    }

    /// Number of cells on line `k`.
    pub fn line_len(&self, k: isize) -> usize {
        let rows = self.rows as isize;
        let cols = self.cols as isize;
        let len = match self.direction {
            ScanDirection::Row => {
                if (0..rows).contains(&k) {
                    cols
                } else {
                    0
                }
            }
            ScanDirection::Column => {
                if (0..cols).contains(&k) {
                    rows
                } else {
                    0
                }
            }
            ScanDirection::MainDiagonal | ScanDirection::AntiDiagonal => {
                if k >= 0 {
                    rows.min(cols - k)
                } else {
                    (rows + k).min(cols)
                }
            }
        };
        len.max(0) as usize
    }

    /// Grid coordinate `(row, col)` of local index `idx` on line `k`, or
    /// `None` when it falls outside the grid.
    pub fn cell(&self, k: isize, idx: usize) -> Option<(usize, usize)> {
        let idx = idx as isize;
        let (r, c) = match self.direction {
            ScanDirection::Row => (k, idx),
            ScanDirection::Column => (idx, k),
            ScanDirection::MainDiagonal | ScanDirection::AntiDiagonal => {
                if k >= 0 {
                    (idx, idx + k)
                } else {
                    (idx - k, idx)
                }
            }
        };
        if r < 0 || c < 0 || r >= self.rows as isize || c >= self.cols as isize {
            return None;
        }
        let (r, c) = (r as usize, c as usize);
        match self.direction {
            ScanDirection::AntiDiagonal => Some((r, self.cols - 1 - c)),
            _ => Some((r, c)),
        }
    }
}
