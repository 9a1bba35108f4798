//! Threat scanning over a borrowed board
//!
//! The scanner answers "which empty cells would give `color` a run of a
//! given length" and "what does the line through a cell look like". It keeps
//! no state between calls: every query rescans the board it borrows, so
//! results always reflect the current position.

use serde::Serialize;

use crate::board::{Board, Color, Direction, Pos, WIN_LENGTH};

/// Shape of the line a hypothetical stone would form in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineShape {
    /// Length of the contiguous run through the cell, the cell included
    pub length: usize,
    /// How many of the two cells just past the run are empty and on the board
    pub open_ends: u8,
    /// Contiguous span of non-opponent, in-bounds cells containing the run
    pub room: usize,
}

impl LineShape {
    /// The run can still grow into a five.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.room >= WIN_LENGTH
    }

    /// Both ends are open.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open_ends == 2
    }
}

/// A cell whose occupation creates an open pattern along `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Threat {
    pub pos: Pos,
    pub direction: Direction,
    pub shape: LineShape,
}

/// Threat scanner bound to one board position.
#[derive(Debug, Clone, Copy)]
pub struct ThreatScanner<'a> {
    board: &'a Board,
}

impl<'a> ThreatScanner<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Empty cells that, if taken by `color`, create in some direction a run
    /// of length `L` with `run_length <= L <= 5`, in row-major order.
    ///
    /// Overlines never qualify, so `completing_moves(color, 5)` yields exactly
    /// the placements the win check accepts. A `run_length` of 0 behaves like
    /// 1; anything above 5 yields nothing.
    pub fn completing_moves(self, color: Color, run_length: usize) -> impl Iterator<Item = Pos> + 'a {
        let board = self.board;
        let min = run_length.max(1);
        board.empty_cells().filter(move |&pos| {
            Direction::ALL.into_iter().any(|dir| {
                let len = board.run_through(pos, color, dir).length;
                (min..=WIN_LENGTH).contains(&len)
            })
        })
    }

    /// Cells where `color` wins immediately.
    #[inline]
    pub fn winning_moves(self, color: Color) -> impl Iterator<Item = Pos> + 'a {
        self.completing_moves(color, WIN_LENGTH)
    }

    /// Cells `color` must take to stop the opponent's immediate win.
    #[inline]
    pub fn blocking_moves(self, color: Color) -> impl Iterator<Item = Pos> + 'a {
        self.winning_moves(color.opponent())
    }

    /// Shape of the line through `pos` along `direction` if `color` stood there.
    pub fn shape(&self, pos: Pos, color: Color, direction: Direction) -> LineShape {
        let run = self.board.run_through(pos, color, direction);
        let opponent = Some(color.opponent());

        let before = run.before();
        let after = run.after();
        let open_ends = self.board.is_empty_at(before) as u8 + self.board.is_empty_at(after) as u8;

        let free = |p: Pos| self.board.contains(p) && self.board.stone_at(p) != opponent;
        let mut room = run.length;
        let mut step = 0;
        while free(before.step(direction, -step)) {
            room += 1;
            step += 1;
        }
        step = 0;
        while free(after.step(direction, step)) {
            room += 1;
            step += 1;
        }

        LineShape {
            length: run.length,
            open_ends,
            room,
        }
    }

    /// Cells where `color` forms a run of exactly `length` that has at least
    /// one open end and room to become a five. Row-major, then by direction.
    pub fn open_patterns(self, color: Color, length: usize) -> impl Iterator<Item = Threat> + 'a {
        self.board.empty_cells().flat_map(move |pos| {
            Direction::ALL.into_iter().filter_map(move |direction| {
                let shape = self.shape(pos, color, direction);
                (shape.length == length && shape.open_ends > 0 && shape.is_live()).then_some(
                    Threat {
                        pos,
                        direction,
                        shape,
                    },
                )
            })
        })
    }
}
