use serde::{Deserialize, Serialize};
use std::fmt;

/// Family of lines scanned across the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScanDirection {
    /// ↘ lines where `col - row` is constant.
    MainDiagonal,
    /// ↙ lines where `row + col` is constant.
    AntiDiagonal,
    /// → lines, one per row.
    Row,
    /// ↓ lines, one per column.
    Column,
}

impl ScanDirection {
    pub const ALL: [ScanDirection; 4] = [
        ScanDirection::MainDiagonal,
        ScanDirection::AntiDiagonal,
        ScanDirection::Row,
        ScanDirection::Column,
    ];
    pub const DIAGONALS: [ScanDirection; 2] =
        [ScanDirection::MainDiagonal, ScanDirection::AntiDiagonal];
    pub const AXES: [ScanDirection; 2] = [ScanDirection::Row, ScanDirection::Column];

    pub fn is_diagonal(self) -> bool {
        matches!(self, ScanDirection::MainDiagonal | ScanDirection::AntiDiagonal)
    }

    pub fn label(self) -> &'static str {
        match self {
            ScanDirection::MainDiagonal => "main-diagonal",
            ScanDirection::AntiDiagonal => "anti-diagonal",
            ScanDirection::Row => "row",
            ScanDirection::Column => "column",
        }
    }
}

impl fmt::Display for ScanDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
