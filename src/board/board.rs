//! Board structure: the single source of truth for stone placement

use std::fmt;

use super::bitboard::Bitboard;
use super::line::{Direction, LineRun};
use super::{Cell, Color, Pos, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
use crate::error::BoardError;

/// Square game board. Stones are only ever added, never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    /// Create an empty `size` x `size` board
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        let cells = size * size;
        Ok(Self {
            size,
            black: Bitboard::new(cells),
            white: Bitboard::new(cells),
        })
    }

    /// Parse the integer grid used on the bot wire format (0 empty, 1 black, 2 white)
    pub fn from_grid(grid: &[Vec<u8>]) -> Result<Self, BoardError> {
        let mut board = Board::new(grid.len())?;
        for (r, row) in grid.iter().enumerate() {
            if row.len() != grid.len() {
                return Err(BoardError::InvalidGrid(format!(
                    "row {r} has {} cells, expected {}",
                    row.len(),
                    grid.len()
                )));
            }
            for (c, &code) in row.iter().enumerate() {
                let cell = Cell::from_code(code).ok_or_else(|| {
                    BoardError::InvalidGrid(format!("unknown cell code {code} at ({r}, {c})"))
                })?;
                if let Some(color) = cell.color() {
                    board.place(Pos::new(r as i32, c as i32), color)?;
                }
            }
        }
        Ok(board)
    }

    /// Grid of wire codes, row-major
    pub fn to_grid(&self) -> Vec<Vec<u8>> {
        (0..self.size as i32)
            .map(|r| {
                (0..self.size as i32)
                    .map(|c| self.cell_unchecked(Pos::new(r, c)).code())
                    .collect()
            })
            .collect()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` lies on the board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        let n = self.size as i32;
        pos.row >= 0 && pos.row < n && pos.col >= 0 && pos.col < n
    }

    #[inline]
    fn index(&self, pos: Pos) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.row as usize * self.size + pos.col as usize)
    }

    #[inline]
    fn pos_of(&self, idx: usize) -> Pos {
        Pos::new((idx / self.size) as i32, (idx % self.size) as i32)
    }

    #[inline]
    fn cell_unchecked(&self, pos: Pos) -> Cell {
        self.stone_at(pos).map_or(Cell::Empty, Cell::from)
    }

    /// Get the cell at position
    pub fn get(&self, pos: Pos) -> Result<Cell, BoardError> {
        if !self.contains(pos) {
            return Err(BoardError::OutOfRange {
                pos,
                size: self.size,
            });
        }
        Ok(self.cell_unchecked(pos))
    }

    /// Stone color at position; `None` for empty or off-board cells
    #[inline]
    pub fn stone_at(&self, pos: Pos) -> Option<Color> {
        let idx = self.index(pos)?;
        if self.black.get(idx) {
            Some(Color::Black)
        } else if self.white.get(idx) {
            Some(Color::White)
        } else {
            None
        }
    }

    /// Whether `pos` is on the board and empty
    #[inline]
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.contains(pos) && self.stone_at(pos).is_none()
    }

    /// Place a stone. The cell stays occupied for the rest of the game.
    pub fn place(&mut self, pos: Pos, color: Color) -> Result<(), BoardError> {
        let idx = self.index(pos).ok_or(BoardError::OutOfRange {
            pos,
            size: self.size,
        })?;
        if self.black.get(idx) || self.white.get(idx) {
            return Err(BoardError::Occupied { pos });
        }
        match color {
            Color::Black => self.black.set(idx),
            Color::White => self.white.set(idx),
        }
        Ok(())
    }

    /// True iff no empty cell remains
    pub fn is_full(&self) -> bool {
        self.total_stones() == self.size * self.size
    }

    /// Check if board has no stones
    #[inline]
    pub fn is_empty_board(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    #[inline]
    pub fn stone_count(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black.count() as usize,
            Color::White => self.white.count() as usize,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn total_stones(&self) -> usize {
        self.stone_count(Color::Black) + self.stone_count(Color::White)
    }

    /// Black has as many stones as White, or exactly one more.
    pub fn is_balanced(&self) -> bool {
        let black = self.stone_count(Color::Black);
        let white = self.stone_count(Color::White);
        black == white || black == white + 1
    }

    /// Color to move, judged from stone counts
    pub fn next_color(&self) -> Color {
        if self.stone_count(Color::Black) > self.stone_count(Color::White) {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Center cell (N/2, N/2); for even sizes one of the four middle cells
    pub fn center(&self) -> Pos {
        let c = (self.size / 2) as i32;
        Pos::new(c, c)
    }

    /// Positions of one color's stones, row-major
    pub fn stones(&self, color: Color) -> impl Iterator<Item = Pos> + '_ {
        let bits = match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        };
        bits.iter_ones().map(move |idx| self.pos_of(idx))
    }

    /// Empty cells, row-major
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.size * self.size)
            .filter(move |&idx| !self.black.get(idx) && !self.white.get(idx))
            .map(move |idx| self.pos_of(idx))
    }

    /// Maximal run of `color` through `pos` along `direction`.
    ///
    /// `pos` itself counts as `color` whether or not a stone is there, so
    /// the same call measures a placed stone or a hypothetical one.
    pub fn run_through(&self, pos: Pos, color: Color, direction: Direction) -> LineRun {
        let mut back = 0;
        while self.stone_at(pos.step(direction, -(back + 1))) == Some(color) {
            back += 1;
        }
        let mut forward = 0;
        while self.stone_at(pos.step(direction, forward + 1)) == Some(color) {
            forward += 1;
        }
        LineRun {
            start: pos.step(direction, -back),
            direction,
            length: (back + forward + 1) as usize,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            black: Bitboard::new(DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE),
            white: Bitboard::new(DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{:2}", c)?;
        }
        writeln!(f)?;

        for r in 0..self.size as i32 {
            write!(f, "{:2} ", r)?;
            for c in 0..self.size as i32 {
                let ch = match self.stone_at(Pos::new(r, c)) {
                    Some(Color::Black) => " X",
                    Some(Color::White) => " O",
                    None => " .",
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
