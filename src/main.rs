//! Gomoku match runner
//!
//! Plays a series of games between two bots and prints the final score.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use gomoku::{ArenaConfig, MatchResult, Tournament, TournamentReport};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = build_config(&cli)?;
    let tournament = Tournament::new(config, cli.player1.clone(), cli.player2.clone())
        .context("invalid configuration")?;
    info!(seed = tournament.seed(), "starting tournament");

    if !cli.json {
        println!("Running {} games between:", tournament.config().rounds);
        println!("  Player 1: {}", cli.player1);
        println!("  Player 2: {}", cli.player2);
        println!();
    }

    let report = tournament.run().context("tournament failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&cli, &report);
    }
    Ok(())
}

/// Config file (if any), then command-line overrides.
fn build_config(cli: &Cli) -> Result<ArenaConfig> {
    let mut config = match &cli.config {
        Some(path) => ArenaConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ArenaConfig::default(),
    };
    if let Some(rounds) = cli.rounds {
        config.rounds = rounds;
    }
    if let Some(size) = cli.board_size {
        config.board_size = size;
    }
    if let Some(dir) = &cli.output_dir {
        config.output_dir = Some(dir.clone());
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(threads) = cli.threads {
        config.threads = threads;
    }
    if let Some(ms) = cli.timeout_ms {
        config.move_timeout_ms = ms;
    }
    Ok(config)
}

fn print_report(cli: &Cli, report: &TournamentReport) {
    for game in &report.games {
        let outcome = match game.winner {
            Some(seat) => format!("{seat} wins"),
            None => "draw".to_string(),
        };
        if let MatchResult::Forfeit { .. } = game.result {
            println!("Game {}: {outcome} (error: {})", game.round, game.result);
        } else {
            println!("Game {}: {outcome}", game.round);
        }
    }

    let score = &report.scoreboard;
    println!();
    println!("FINAL_RESULTS");
    println!("Bot_1_main: {} rounds won ({})", score.player1, cli.player1);
    println!("Bot_2_main: {} rounds won ({})", score.player2, cli.player2);
    println!("Draws: {}", score.draws);
    info!(
        player1 = score.player1,
        player2 = score.player2,
        draws = score.draws,
        "tournament finished"
    );
}
