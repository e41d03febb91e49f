use super::traits::GridView;
use crate::error::{DetectError, Result};
use serde::Serialize;

/// Boolean highlight mask with the same shape as the grid it was built from.
///
/// Cells are only ever set, never cleared, by the scanners, so several scan
/// passes can OR into one mask.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "Vec<Vec<bool>>")]
pub struct SegmentMask {
    rows: usize,
    cols: usize,
    data: Vec<bool>,
}

impl SegmentMask {
    /// Zero-filled mask of size `rows × cols`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![false; rows * cols],
        }
    }

    /// Zero-filled mask matching the shape of `grid`.
    pub fn like<G: GridView>(grid: &G) -> Self {
        Self::new(grid.rows(), grid.cols())
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> bool {
        self.data[r * self.cols + c]
    }

    /// Mark a cell. Returns `true` when it was not already marked.
    #[inline]
    pub fn mark(&mut self, r: usize, c: usize) -> bool {
        let cell = &mut self.data[r * self.cols + c];
        let fresh = !*cell;
        *cell = true;
        fresh
    }

    /// Population count.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.data.iter().any(|&v| v)
    }

    /// In-place union with another mask of the same shape.
    pub fn union_with(&mut self, other: &SegmentMask) -> Result<()> {
        self.ensure_shape(other.rows, other.cols)?;
        for (dst, &src) in self.data.iter_mut().zip(other.data.iter()) {
            *dst |= src;
        }
        Ok(())
    }

    /// Copy flipped left-to-right.
    pub fn mirrored(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for row in self.row_iter() {
            data.extend(row.iter().rev());
        }
        Self {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }

    /// Coordinates of marked cells in row-major order.
    pub fn marked_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .filter_map(move |(i, &v)| v.then_some((i / cols, i % cols)))
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    pub(crate) fn ensure_shape(&self, rows: usize, cols: usize) -> Result<()> {
        if (self.rows, self.cols) != (rows, cols) {
            return Err(DetectError::invalid_input(format!(
                "mask shape {}x{} does not match {rows}x{cols}",
                self.rows, self.cols
            )));
        }
        Ok(())
    }
}

impl GridView for SegmentMask {
    type Cell = bool;

    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }
    #[inline]
    fn cols(&self) -> usize {
        self.cols
    }
    #[inline]
    fn row(&self, r: usize) -> &[bool] {
        let start = r * self.cols;
        &self.data[start..start + self.cols]
    }
}

impl From<SegmentMask> for Vec<Vec<bool>> {
    fn from(mask: SegmentMask) -> Self {
        if mask.cols == 0 {
            return Vec::new();
        }
        mask.data.chunks(mask.cols).map(<[bool]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_requires_matching_shapes() {
        let mut a = SegmentMask::new(3, 3);
        let b = SegmentMask::new(3, 4);
        assert!(matches!(a.union_with(&b), Err(DetectError::InvalidInput(_))));
    }

    #[test]
    fn union_never_clears_cells() {
        let mut a = SegmentMask::new(2, 2);
        a.mark(0, 0);
        let mut b = SegmentMask::new(2, 2);
        b.mark(1, 1);
        a.union_with(&b).unwrap();
        assert_eq!(a.marked_cells().collect::<Vec<_>>(), vec![(0, 0), (1, 1)]);
        assert_eq!(a.count(), 2);
    }

    #[test]
    fn mark_reports_fresh_cells_once() {
        let mut m = SegmentMask::new(1, 3);
        assert!(m.mark(0, 2));
        assert!(!m.mark(0, 2));
        assert_eq!(m.mirrored().marked_cells().collect::<Vec<_>>(), vec![(0, 0)]);
    }
}
