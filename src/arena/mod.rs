//! Running matches and tournaments
//!
//! - [`game`]: the per-match state machine
//! - [`tournament`]: repeated matches with random colour assignment
//! - [`log`]: per-game text logs

pub mod game;
pub mod log;
pub mod tournament;

pub use game::{ForfeitReason, MatchController, MatchResult, MatchState, MoveRecord};
pub use tournament::{GameRecord, Scoreboard, Seat, Tournament, TournamentReport};
