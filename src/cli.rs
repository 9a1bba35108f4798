//! Command-line interface for the match runner.

use std::path::PathBuf;

use clap::Parser;
use gomoku::StrategyKind;

/// Run Gomoku games between two bots
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Run five-in-a-row games between two bots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Player 1: 'heuristic', 'random' or the command line of an external bot
    pub player1: StrategyKind,

    /// Player 2: 'heuristic', 'random' or the command line of an external bot
    pub player2: StrategyKind,

    /// Number of rounds to play [default: 10]
    #[arg(short, long)]
    pub rounds: Option<usize>,

    /// Board size [default: 15]
    #[arg(short, long)]
    pub board_size: Option<usize>,

    /// Output directory for per-game log files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// TOML config file; command-line flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base seed for colour assignment and random bots
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads for running rounds in parallel
    #[arg(long)]
    pub threads: Option<usize>,

    /// Time limit per move for external bots, in milliseconds [default: 5000]
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Print the full report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}
