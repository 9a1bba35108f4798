//! Multi-round tournaments between two players
//!
//! Every round gets a fresh board and freshly built strategies. Colours are
//! drawn per round from an RNG seeded with `seed + round`, so a tournament
//! with a fixed seed replays identically, sequentially or in parallel.

use std::fmt;
use std::path::PathBuf;

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, instrument};

use crate::board::{Color, LineRun};
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::strategy::StrategyKind;

use super::game::{MatchController, MatchResult, MoveRecord};
use super::log::write_game_log;

/// Which of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    Player1,
    Player2,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::Player1 => Seat::Player2,
            Seat::Player2 => Seat::Player1,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::Player1 => 0,
            Seat::Player2 => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Player1 => f.write_str("player1"),
            Seat::Player2 => f.write_str("player2"),
        }
    }
}

/// Outcome of one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    /// 1-based round number
    pub round: usize,
    /// Seat that played Black
    pub black: Seat,
    pub result: MatchResult,
    /// Seat credited with the round; `None` for a draw
    pub winner: Option<Seat>,
    pub moves: Vec<MoveRecord>,
    pub winning_line: Option<LineRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,
}

impl GameRecord {
    pub fn seat_of(&self, color: Color) -> Seat {
        match color {
            Color::Black => self.black,
            Color::White => self.black.other(),
        }
    }

    pub fn color_of(&self, seat: Seat) -> Color {
        if seat == self.black {
            Color::Black
        } else {
            Color::White
        }
    }
}

/// Rounds won per seat, plus draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub player1: usize,
    pub player2: usize,
    pub draws: usize,
}

impl Scoreboard {
    pub fn record(&mut self, winner: Option<Seat>) {
        match winner {
            Some(Seat::Player1) => self.player1 += 1,
            Some(Seat::Player2) => self.player2 += 1,
            None => self.draws += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.player1 + self.player2 + self.draws
    }
}

/// All rounds in order, with the aggregate score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TournamentReport {
    pub seed: u64,
    pub games: Vec<GameRecord>,
    pub scoreboard: Scoreboard,
}

/// A series of independent matches between two players.
#[derive(Debug, Clone)]
pub struct Tournament {
    config: ArenaConfig,
    players: [StrategyKind; 2],
    seed: u64,
}

impl Tournament {
    /// Validates `config`; an unset seed is drawn at random here.
    pub fn new(
        config: ArenaConfig,
        player1: StrategyKind,
        player2: StrategyKind,
    ) -> Result<Self, ArenaError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            config,
            players: [player1, player2],
            seed,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn player(&self, seat: Seat) -> &StrategyKind {
        &self.players[seat.index()]
    }

    /// Play every round and aggregate the score.
    pub fn run(&self) -> Result<TournamentReport, ArenaError> {
        let rounds = 1..=self.config.rounds;
        let games = if self.config.threads > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.threads)
                .build()?;
            pool.install(|| {
                rounds
                    .into_par_iter()
                    .map(|round| self.play_round(round))
                    .collect::<Result<Vec<_>, _>>()
            })?
        } else {
            rounds
                .map(|round| self.play_round(round))
                .collect::<Result<Vec<_>, _>>()?
        };

        let mut scoreboard = Scoreboard::default();
        for game in &games {
            scoreboard.record(game.winner);
        }

        Ok(TournamentReport {
            seed: self.seed,
            games,
            scoreboard,
        })
    }

    /// Play one round on a fresh board.
    #[instrument(skip(self))]
    pub fn play_round(&self, round: usize) -> Result<GameRecord, ArenaError> {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(round as u64));
        let black = if rng.random_bool(0.5) {
            Seat::Player1
        } else {
            Seat::Player2
        };
        let white = black.other();

        let mut black_bot = self.player(black).build(rng.random(), &self.config);
        let mut white_bot = self.player(white).build(rng.random(), &self.config);

        let started = Local::now();
        let mut controller = MatchController::new(self.config.board_size)?;
        let result = controller.play(black_bot.as_mut(), white_bot.as_mut())?;

        let winner = result.winner().map(|color| match color {
            Color::Black => black,
            Color::White => white,
        });

        let mut record = GameRecord {
            round,
            black,
            result,
            winner,
            moves: controller.history().to_vec(),
            winning_line: controller.winning_line().copied(),
            log_path: None,
        };

        if let Some(dir) = &self.config.output_dir {
            let labels = [self.players[0].to_string(), self.players[1].to_string()];
            record.log_path = Some(write_game_log(dir, &record, &labels, started)?);
        }

        info!(round, black = %black, result = %record.result, "round finished");
        Ok(record)
    }
}
