/// Cell values that can be binarized into an on/off state.
///
/// Anything strictly positive is "on", so the spiral origin marker (`2`)
/// counts the same as a prime (`1`).
pub trait CellState: Copy {
    fn is_on(self) -> bool;

    /// Whether the value is one of the grid codes `0`, `1` or `2`.
    fn is_code(self) -> bool;
}

impl CellState for bool {
    #[inline]
    fn is_on(self) -> bool {
        self
    }

    #[inline]
    fn is_code(self) -> bool {
        true
    }
}

macro_rules! int_cell_state {
    ($($t:ty),*) => {$(
        impl CellState for $t {
            #[inline]
            fn is_on(self) -> bool {
                self > 0
            }

            #[inline]
            fn is_code(self) -> bool {
                (0..=2).contains(&self)
            }
        }
    )*};
}

int_cell_state!(u8, i32, i64);

/// Read-only, row-major 2-D view consumed by the line scanner.
pub trait GridView {
    type Cell: CellState;

    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    fn row(&self, r: usize) -> &[Self::Cell];

    #[inline]
    fn cell(&self, r: usize, c: usize) -> Self::Cell {
        self.row(r)[c]
    }

    fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    fn row_iter(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { grid: self, r: 0 }
    }

    fn contains(&self, r: usize, c: usize) -> bool {
        r < self.rows() && c < self.cols()
    }
}

pub struct Rows<'a, G: ?Sized + GridView> {
    grid: &'a G,
    r: usize,
}

impl<'a, G: GridView> Iterator for Rows<'a, G> {
    type Item = &'a [G::Cell];

    fn next(&mut self) -> Option<Self::Item> {
        if self.r >= self.grid.rows() {
            return None;
        }
        let r = self.r;
        self.r += 1;
        Some(self.grid.row(r))
    }
}
