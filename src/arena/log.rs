//! Per-game text logs
//!
//! One file per round, named `log-<YYYYmmdd_HHMMSS_mmm>-<round>.log`.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::debug;

use crate::board::Color;
use crate::error::LogError;

use super::game::MatchResult;
use super::tournament::{GameRecord, Seat};

const RULE_WIDTH: usize = 50;

/// File name for a game started at `started`.
pub fn log_file_name(started: &DateTime<Local>, round: usize) -> String {
    format!("log-{}-{round}.log", started.format("%Y%m%d_%H%M%S_%3f"))
}

/// Render the log text for one game. `labels` are the player descriptions
/// for seat 1 and seat 2.
pub fn render_game_log(record: &GameRecord, labels: &[String; 2], started: &DateTime<Local>) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_log(&mut out, record, labels, started);
    out
}

fn write_log(
    out: &mut String,
    record: &GameRecord,
    labels: &[String; 2],
    started: &DateTime<Local>,
) -> std::fmt::Result {
    writeln!(out, "=== Gomoku Game Log (Game #{}) ===", record.round)?;
    writeln!(out, "Timestamp: {}", started.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out)?;
    writeln!(out, "Player Assignments:")?;
    for color in Color::ALL {
        let seat = record.seat_of(color);
        let label = match seat {
            Seat::Player1 => &labels[0],
            Seat::Player2 => &labels[1],
        };
        writeln!(out, "  {}: {seat} ({label})", color.as_str().to_uppercase())?;
    }
    writeln!(out)?;

    match record.winner {
        Some(seat) => writeln!(out, "Result: {seat} wins")?,
        None => writeln!(out, "Result: draw")?,
    }
    if let MatchResult::Forfeit { color, reason } = &record.result {
        writeln!(out, "Error: {} ({color}) forfeited: {reason}", record.seat_of(*color))?;
    }

    writeln!(out)?;
    writeln!(out, "Move History ({} moves):", record.moves.len())?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for mv in &record.moves {
        writeln!(
            out,
            "Move {:3}: {:5} -> ({:2}, {:2})",
            mv.ply,
            mv.color.as_str(),
            mv.pos.row,
            mv.pos.col
        )?;
    }

    if let Some(line) = &record.winning_line {
        writeln!(out)?;
        writeln!(out, "Winning line: {} -> {}", line.start, line.end())?;
    }

    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

/// Write the log for `record` into `dir`, creating the directory if needed.
pub fn write_game_log(
    dir: &Path,
    record: &GameRecord,
    labels: &[String; 2],
    started: DateTime<Local>,
) -> Result<PathBuf, LogError> {
    fs::create_dir_all(dir).map_err(|source| LogError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(log_file_name(&started, record.round));
    fs::write(&path, render_game_log(record, labels, &started)).map_err(|source| LogError::Io {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), "game log written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::game::{ForfeitReason, MoveRecord};
    use crate::board::{Direction, LineRun, Pos};
    use crate::error::{InvalidMoveError, MoveViolation};
    use chrono::TimeZone;

    fn started() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    fn labels() -> [String; 2] {
        ["heuristic".to_string(), "./bot".to_string()]
    }

    fn win_record() -> GameRecord {
        GameRecord {
            round: 3,
            black: Seat::Player2,
            result: MatchResult::Win(Color::Black),
            winner: Some(Seat::Player2),
            moves: vec![
                MoveRecord { ply: 1, color: Color::Black, pos: Pos::new(7, 7) },
                MoveRecord { ply: 2, color: Color::White, pos: Pos::new(10, 0) },
            ],
            winning_line: Some(LineRun {
                start: Pos::new(7, 3),
                direction: Direction::Horizontal,
                length: 5,
            }),
            log_path: None,
        }
    }

    #[test]
    fn test_file_name() {
        assert_eq!(log_file_name(&started(), 3), "log-20240309_140507_000-3.log");
    }

    #[test]
    fn test_render_win() {
        let text = render_game_log(&win_record(), &labels(), &started());
        assert!(text.starts_with("=== Gomoku Game Log (Game #3) ===\n"));
        assert!(text.contains("Timestamp: 2024-03-09 14:05:07"));
        assert!(text.contains("  BLACK: player2 (./bot)"));
        assert!(text.contains("  WHITE: player1 (heuristic)"));
        assert!(text.contains("Result: player2 wins"));
        assert!(text.contains("Move History (2 moves):"));
        assert!(text.contains("Move   1: black -> ( 7,  7)"));
        assert!(text.contains("Move   2: white -> (10,  0)"));
        assert!(text.contains("Winning line: (7, 3) -> (7, 7)"));
        assert!(!text.contains("Error:"));
    }

    #[test]
    fn test_render_forfeit() {
        let record = GameRecord {
            result: MatchResult::Forfeit {
                color: Color::White,
                reason: ForfeitReason::InvalidMove(InvalidMoveError {
                    pos: Pos::new(15, 0),
                    reason: MoveViolation::OutOfBounds,
                }),
            },
            winning_line: None,
            ..win_record()
        };
        let text = render_game_log(&record, &labels(), &started());
        assert!(text.contains("Error: player1 (white) forfeited: invalid move (15, 0): out of bounds"));
        assert!(!text.contains("Winning line"));
    }

    #[test]
    fn test_render_draw() {
        let record = GameRecord {
            result: MatchResult::Draw,
            winner: None,
            winning_line: None,
            ..win_record()
        };
        let text = render_game_log(&record, &labels(), &started());
        assert!(text.contains("Result: draw"));
    }

    #[test]
    fn test_write_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("logs").join("today");
        let path = write_game_log(&nested, &win_record(), &labels(), started()).unwrap();
        assert_eq!(path.parent(), Some(nested.as_path()));
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with(&format!("{}\n", "=".repeat(RULE_WIDTH))));
    }
}
