//! Owned Ulam spiral grid in row-major layout.
//!
//! Cells carry one of three codes: [`BACKGROUND`], [`PRIME`] or [`ORIGIN`].
//! Every constructor validates the shape (rectangular, non-empty) and the
//! value set, so detection code can trust any `UlamGrid` it receives.
use super::traits::GridView;
use crate::error::{DetectError, Result};
use serde::{Deserialize, Serialize};

/// Non-prime cell.
pub const BACKGROUND: u8 = 0;
/// Prime cell.
pub const PRIME: u8 = 1;
/// Spiral origin marker; display-only, but binarizes as "on".
pub const ORIGIN: u8 = 2;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<u8>>")]
pub struct UlamGrid {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl UlamGrid {
    /// Wrap a row-major buffer of `rows × cols` cell codes.
    pub fn new(rows: usize, cols: usize, data: Vec<u8>) -> Result<Self> {
        check_dims(rows, cols)?;
        if data.len() != rows * cols {
            return Err(DetectError::invalid_input(format!(
                "grid buffer holds {} cells, expected {rows}x{cols} = {}",
                data.len(),
                rows * cols
            )));
        }
        if let Some(pos) = data.iter().position(|&v| v > ORIGIN) {
            return Err(DetectError::invalid_input(format!(
                "cell ({}, {}) has value {}, expected one of 0, 1, 2",
                pos / cols,
                pos % cols,
                data[pos]
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// All-background grid of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        check_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![BACKGROUND; rows * cols],
        })
    }

    /// Build from nested rows of integer codes. Rows must share one length.
    pub fn from_rows<T>(rows: &[Vec<T>]) -> Result<Self>
    where
        T: Copy + Into<i64>,
    {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        check_dims(n_rows, n_cols)?;

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(DetectError::invalid_input(format!(
                    "row {r} has {} cells, expected {n_cols}",
                    row.len()
                )));
            }
            for (c, &value) in row.iter().enumerate() {
                data.push(cell_code(value.into(), r, c)?);
            }
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline]
    pub fn idx(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> u8 {
        self.data[self.idx(r, c)]
    }

    /// Overwrite one cell, rejecting codes outside the valid set.
    pub fn set(&mut self, r: usize, c: usize, value: u8) -> Result<()> {
        if !self.contains(r, c) {
            return Err(DetectError::invalid_input(format!(
                "cell ({r}, {c}) outside {}x{} grid",
                self.rows, self.cols
            )));
        }
        let code = cell_code(i64::from(value), r, c)?;
        let i = self.idx(r, c);
        self.data[i] = code;
        Ok(())
    }

    /// Number of cells holding exactly `value`.
    pub fn count(&self, value: u8) -> usize {
        self.data.iter().filter(|&&v| v == value).count()
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

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl GridView for UlamGrid {
    type Cell = u8;

    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }
    #[inline]
    fn cols(&self) -> usize {
        self.cols
    }
    #[inline]
    fn row(&self, r: usize) -> &[u8] {
        let start = r * self.cols;
        &self.data[start..start + self.cols]
    }
}

impl TryFrom<Vec<Vec<i64>>> for UlamGrid {
    type Error = DetectError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl From<UlamGrid> for Vec<Vec<u8>> {
    fn from(grid: UlamGrid) -> Self {
        grid.data.chunks(grid.cols).map(<[u8]>::to_vec).collect()
    }
}

fn check_dims(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(DetectError::invalid_input(format!(
            "grid must be non-empty, got {rows}x{cols}"
        )));
    }
    Ok(())
}

fn cell_code(value: i64, r: usize, c: usize) -> Result<u8> {
    match value {
        0..=2 => Ok(value as u8),
        other => Err(DetectError::invalid_input(format!(
            "cell ({r}, {c}) has value {other}, expected one of 0, 1, 2"
        ))),
    }
}
