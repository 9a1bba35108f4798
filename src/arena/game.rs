//! Match controller: turn sequencing, adjudication and forfeiture

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::board::{Board, Color, LineRun, Pos};
use crate::error::{ArenaError, InvalidMoveError};
use crate::rules::{adjudicate, validate_move, winning_line, Verdict};
use crate::strategy::Strategy;

/// Why a color lost by forfeit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForfeitReason {
    /// The strategy returned an illegal move
    InvalidMove(InvalidMoveError),
    /// The strategy failed to return a move
    StrategyFailed(String),
}

impl fmt::Display for ForfeitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForfeitReason::InvalidMove(err) => write!(f, "{err}"),
            ForfeitReason::StrategyFailed(msg) => write!(f, "strategy failed: {msg}"),
        }
    }
}

/// Final outcome of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    Win(Color),
    Draw,
    /// `color` lost by forfeit
    Forfeit { color: Color, reason: ForfeitReason },
}

impl MatchResult {
    /// The color credited with the game, if any. A forfeit credits the opponent.
    pub fn winner(&self) -> Option<Color> {
        match self {
            MatchResult::Win(color) => Some(*color),
            MatchResult::Draw => None,
            MatchResult::Forfeit { color, .. } => Some(color.opponent()),
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchResult::Win(color) => write!(f, "{color} wins"),
            MatchResult::Draw => f.write_str("draw"),
            MatchResult::Forfeit { color, reason } => write!(f, "{color} forfeits ({reason})"),
        }
    }
}

/// Controller state. `Finished` is absorbing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    AwaitingMove(Color),
    Finished(MatchResult),
}

/// One placed stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    /// 1-based move number
    pub ply: usize,
    pub color: Color,
    pub pos: Pos,
}

/// Drives a single match. Owns its board; nothing is shared between matches.
#[derive(Debug, Clone)]
pub struct MatchController {
    board: Board,
    state: MatchState,
    history: Vec<MoveRecord>,
    winning_line: Option<LineRun>,
}

impl MatchController {
    /// New match on an empty `size` x `size` board, Black to move.
    pub fn new(size: usize) -> Result<Self, ArenaError> {
        Self::from_position(Board::new(size)?)
    }

    /// Resume from an existing position. The side to move follows from the
    /// stone counts; a full board is already a draw.
    ///
    /// Black must have as many stones as White or one more.
    pub fn from_position(board: Board) -> Result<Self, ArenaError> {
        if !board.is_balanced() {
            return Err(ArenaError::UnbalancedPosition {
                black: board.stone_count(Color::Black),
                white: board.stone_count(Color::White),
            });
        }
        let state = if board.is_full() {
            MatchState::Finished(MatchResult::Draw)
        } else {
            MatchState::AwaitingMove(board.next_color())
        };
        Ok(Self {
            board,
            state,
            history: Vec::new(),
            winning_line: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Color to move, or `None` once finished
    pub fn to_move(&self) -> Option<Color> {
        match self.state {
            MatchState::AwaitingMove(color) => Some(color),
            MatchState::Finished(_) => None,
        }
    }

    pub fn result(&self) -> Option<&MatchResult> {
        match &self.state {
            MatchState::Finished(result) => Some(result),
            MatchState::AwaitingMove(_) => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, MatchState::Finished(_))
    }

    /// Moves played through this controller, in order
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The exact five that ended the match, if it ended with one
    pub fn winning_line(&self) -> Option<&LineRun> {
        self.winning_line.as_ref()
    }

    /// Play `pos` for the color to move.
    ///
    /// An illegal move does not error: it ends the match as a forfeit for the
    /// mover. Only calling this on a finished match is an error.
    pub fn apply(&mut self, pos: Pos) -> Result<&MatchState, ArenaError> {
        let color = self.to_move().ok_or(ArenaError::MatchFinished)?;

        if let Err(err) = validate_move(&self.board, pos, color) {
            warn!(%color, %err, "invalid move, forfeiting");
            return Ok(self.finish(MatchResult::Forfeit {
                color,
                reason: ForfeitReason::InvalidMove(err),
            }));
        }

        self.board.place(pos, color)?;
        self.history.push(MoveRecord {
            ply: self.history.len() + 1,
            color,
            pos,
        });
        debug!(ply = self.history.len(), %color, %pos, "stone placed");

        let next = match adjudicate(&self.board, pos, color) {
            Verdict::Win => {
                self.winning_line = winning_line(&self.board, pos, color);
                MatchState::Finished(MatchResult::Win(color))
            }
            Verdict::Draw => MatchState::Finished(MatchResult::Draw),
            Verdict::Continue => MatchState::AwaitingMove(color.opponent()),
        };
        self.state = next;
        Ok(&self.state)
    }

    /// Ask `strategy` for the color to move and apply its answer.
    #[instrument(skip_all, fields(strategy = strategy.name(), ply = self.history.len() + 1))]
    pub fn step(&mut self, strategy: &mut dyn Strategy) -> Result<&MatchState, ArenaError> {
        let color = self.to_move().ok_or(ArenaError::MatchFinished)?;

        match strategy.choose_move(&self.board, color) {
            Ok(pos) => self.apply(pos),
            Err(err) => {
                warn!(%color, %err, "strategy failed, forfeiting");
                Ok(self.finish(MatchResult::Forfeit {
                    color,
                    reason: ForfeitReason::StrategyFailed(err.to_string()),
                }))
            }
        }
    }

    /// Play to the end with `black` and `white` answering for their colors.
    pub fn play(
        &mut self,
        black: &mut dyn Strategy,
        white: &mut dyn Strategy,
    ) -> Result<MatchResult, ArenaError> {
        loop {
            let strategy: &mut dyn Strategy = match &self.state {
                MatchState::Finished(result) => {
                    info!(%result, moves = self.history.len(), "match finished");
                    return Ok(result.clone());
                }
                MatchState::AwaitingMove(Color::Black) => &mut *black,
                MatchState::AwaitingMove(Color::White) => &mut *white,
            };
            self.step(strategy)?;
        }
    }

    fn finish(&mut self, result: MatchResult) -> &MatchState {
        self.state = MatchState::Finished(result);
        &self.state
    }
}
