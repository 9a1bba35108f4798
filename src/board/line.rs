//! Line directions and runs of same-colored stones

use serde::Serialize;

use super::Pos;

/// The four line directions. Each covers both ways along its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Along a row
    Horizontal,
    /// Along a column
    Vertical,
    /// Top-left to bottom-right (↘)
    DiagonalDown,
    /// Bottom-left to top-right (↗)
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// (row, col) step for one cell forward
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }
}

/// A maximal contiguous run of one color along a direction.
///
/// Derived on demand from the board; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRun {
    /// First cell of the run (the backward-most end)
    pub start: Pos,
    pub direction: Direction,
    pub length: usize,
}

impl LineRun {
    /// Last cell of the run
    pub fn end(&self) -> Pos {
        self.start.step(self.direction, self.length as i32 - 1)
    }

    /// Cell just before the run
    pub fn before(&self) -> Pos {
        self.start.step(self.direction, -1)
    }

    /// Cell just after the run
    pub fn after(&self) -> Pos {
        self.start.step(self.direction, self.length as i32)
    }

    /// Cells of the run from start to end
    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.length as i32).map(move |i| self.start.step(self.direction, i))
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells().any(|p| p == pos)
    }
}
