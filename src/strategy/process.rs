//! External bots driven over stdin/stdout
//!
//! The bot is started once per move. It receives one JSON line
//!
//! ```text
//! {"board": [[0, 1, 2, ...], ...], "color": "black"}
//! ```
//!
//! (0 empty, 1 black, 2 white) and must print its move as `[row, col]`
//! before exiting. When it prints several lines the last non-empty one is
//! taken, so bots may log to stdout first.

use std::io::{ErrorKind, Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, warn};

use crate::board::{Board, Color, Pos};
use crate::error::StrategyError;

use super::Strategy;

const WAIT_POLL: Duration = Duration::from_millis(5);

#[derive(Serialize)]
struct MoveRequest {
    board: Vec<Vec<u8>>,
    color: Color,
}

/// Strategy backed by an external program.
#[derive(Debug, Clone)]
pub struct ProcessStrategy {
    command: String,
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ProcessStrategy {
    /// Split `command` on whitespace into program and arguments.
    pub fn new(command: &str, timeout: Duration) -> Self {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().unwrap_or_default();
        Self {
            command: command.trim().to_string(),
            program,
            args: parts.collect(),
            timeout,
        }
    }

    /// Program and arguments given separately, for arguments containing spaces.
    pub fn from_parts<I, S>(program: &str, args: I, timeout: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let command = std::iter::once(program.to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            command,
            program: program.to_string(),
            args,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn spawn(&self) -> Result<Child, StrategyError> {
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| StrategyError::Spawn {
                command: self.command.clone(),
                source,
            })
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

impl Strategy for ProcessStrategy {
    fn choose_move(&mut self, board: &Board, color: Color) -> Result<Pos, StrategyError> {
        let request = serde_json::to_string(&MoveRequest {
            board: board.to_grid(),
            color,
        })
        .map_err(|e| StrategyError::Protocol(e.to_string()))?;

        let mut child = self.spawn()?;
        let deadline = Instant::now() + self.timeout;

        // Dropping stdin after the write signals end of input.
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = writeln!(stdin, "{request}") {
                // A bot that exits without reading its input is judged by its output.
                if e.kind() != ErrorKind::BrokenPipe {
                    kill(&mut child);
                    return Err(e.into());
                }
            }
        }

        let Some(mut stdout) = child.stdout.take() else {
            kill(&mut child);
            return Err(StrategyError::Protocol("bot stdout unavailable".into()));
        };

        let (sender, receiver) = channel();
        thread::spawn(move || {
            let mut output = String::new();
            let result = stdout.read_to_string(&mut output).map(|_| output);
            let _ = sender.send(result);
        });

        let answer = receiver.recv_timeout(deadline.saturating_duration_since(Instant::now()));
        match answer {
            Ok(Ok(output)) => {
                // stdout is closed but the bot may still be running
                let Some(status) = wait_until(&mut child, deadline)? else {
                    warn!(command = %self.command, timeout_ms = self.timeout_ms(), "bot did not exit");
                    kill(&mut child);
                    return Err(StrategyError::Timeout(self.timeout_ms()));
                };
                if !status.success() {
                    return Err(StrategyError::ExitStatus(status));
                }
                let pos = parse_move(&output)?;
                debug!(command = %self.command, %pos, "bot answered");
                Ok(pos)
            }
            Ok(Err(e)) => {
                kill(&mut child);
                Err(e.into())
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                warn!(command = %self.command, timeout_ms = self.timeout_ms(), "bot timed out");
                kill(&mut child);
                Err(StrategyError::Timeout(self.timeout_ms()))
            }
        }
    }

    fn name(&self) -> &str {
        &self.command
    }
}

/// Exit status of `child`, or `None` if it is still running at `deadline`.
fn wait_until(child: &mut Child, deadline: Instant) -> Result<Option<ExitStatus>, StrategyError> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(WAIT_POLL);
    }
}

fn kill(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

/// Parse `[row, col]` from the last non-empty line of the bot's output.
fn parse_move(output: &str) -> Result<Pos, StrategyError> {
    let line = output
        .lines()
        .map(str::trim)
        .rev()
        .find(|l| !l.is_empty())
        .ok_or_else(|| StrategyError::Protocol("bot printed nothing".into()))?;
    let (row, col): (i32, i32) = serde_json::from_str(line)
        .map_err(|e| StrategyError::Protocol(format!("{line:?}: {e}")))?;
    Ok(Pos::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell(script: &str, timeout_ms: u64) -> ProcessStrategy {
        ProcessStrategy::from_parts("sh", ["-c", script], Duration::from_millis(timeout_ms))
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("[3, 4]\n").unwrap(), Pos::new(3, 4));
        assert_eq!(parse_move("thinking...\n[-1, 20]\n\n").unwrap(), Pos::new(-1, 20));
        assert!(matches!(parse_move(""), Err(StrategyError::Protocol(_))));
        assert!(matches!(parse_move("[1]"), Err(StrategyError::Protocol(_))));
        assert!(matches!(parse_move("[1.5, 2]"), Err(StrategyError::Protocol(_))));
        assert!(matches!(parse_move("e4"), Err(StrategyError::Protocol(_))));
    }

    #[test]
    fn test_new_splits_command() {
        let bot = ProcessStrategy::new("  python3 bot.py --depth 2 ", Duration::from_secs(1));
        assert_eq!(bot.program, "python3");
        assert_eq!(bot.args, vec!["bot.py", "--depth", "2"]);
        assert_eq!(bot.name(), "python3 bot.py --depth 2");
        assert_eq!(bot.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_request_format() {
        let mut board = Board::new(2).unwrap();
        board.place(Pos::new(0, 1), Color::Black).unwrap();
        let request = serde_json::to_string(&MoveRequest {
            board: board.to_grid(),
            color: Color::White,
        })
        .unwrap();
        assert_eq!(request, r#"{"board":[[0,1],[0,0]],"color":"white"}"#);
    }

    #[cfg(unix)]
    #[test]
    fn test_bot_answers() {
        let mut bot = shell("cat > /dev/null; echo '[3, 4]'", 5_000);
        let pos = bot.choose_move(&Board::default(), Color::Black).unwrap();
        assert_eq!(pos, Pos::new(3, 4));
    }

    #[cfg(unix)]
    #[test]
    fn test_bot_reads_color() {
        let script = r#"read line; case "$line" in *'"color":"white"'*) echo '[1, 2]';; *) echo '[0, 0]';; esac"#;
        let mut bot = shell(script, 5_000);
        assert_eq!(bot.choose_move(&Board::default(), Color::White).unwrap(), Pos::new(1, 2));
        assert_eq!(bot.choose_move(&Board::default(), Color::Black).unwrap(), Pos::new(0, 0));
    }

    #[cfg(unix)]
    #[test]
    fn test_bot_timeout() {
        let mut bot = shell("sleep 5; echo '[0, 0]'", 100);
        let err = bot.choose_move(&Board::default(), Color::Black).unwrap_err();
        assert!(matches!(err, StrategyError::Timeout(100)));
    }

    #[cfg(unix)]
    #[test]
    fn test_bot_lingering_after_answer_times_out() {
        let mut bot = shell("cat > /dev/null; echo '[0, 0]'; exec >&-; sleep 5", 200);
        let started = Instant::now();
        let err = bot.choose_move(&Board::default(), Color::Black).unwrap_err();
        assert!(matches!(err, StrategyError::Timeout(200)));
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[cfg(unix)]
    #[test]
    fn test_bot_exit_status() {
        let mut bot = shell("echo '[0, 0]'; exit 3", 5_000);
        let err = bot.choose_move(&Board::default(), Color::Black).unwrap_err();
        assert!(matches!(err, StrategyError::ExitStatus(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_bot_garbage_output() {
        let mut bot = shell("echo 'no idea'", 5_000);
        let err = bot.choose_move(&Board::default(), Color::Black).unwrap_err();
        assert!(matches!(err, StrategyError::Protocol(_)));
    }

    #[test]
    fn test_missing_program() {
        let mut bot = ProcessStrategy::new("/nonexistent/gomoku-bot", Duration::from_secs(1));
        let err = bot.choose_move(&Board::default(), Color::Black).unwrap_err();
        assert!(matches!(err, StrategyError::Spawn { .. }));
    }
}
