//! Grid and mask containers consumed and produced by the detector.
//!
//! - [`UlamGrid`]: validated cell codes from the spiral generator.
//! - [`SegmentMask`]: boolean highlight mask of the same shape.
//! - [`GridView`]: the read-only row-major view the scanners work on.
//! - [`io`]: loading grids and writing masks/reports.

pub mod cells;
pub mod io;
pub mod mask;
pub mod traits;

pub use self::cells::{UlamGrid, BACKGROUND, ORIGIN, PRIME};
pub use self::mask::SegmentMask;
pub use self::traits::{CellState, GridView, Rows};
