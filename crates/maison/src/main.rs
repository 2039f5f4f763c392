//! Maison du Tic Tac Toe - CLI entry point.

use anyhow::Result;
use clap::Parser;
use maison::{Cli, Command, ConsoleConfig, ConsoleInput, ConsolePresenter, analyze, parse_board, render};
use maison_tictactoe::GameEngine;
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command.unwrap_or_default() {
        Command::Play {
            config,
            type_delay_ms,
            think_delay_ms,
        } => run_play(&config, type_delay_ms, think_delay_ms),
        Command::Legend => {
            println!("{}", render::legend());
            Ok(())
        }
        Command::Analyze { board } => run_analyze(&board),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip_all, fields(config_path = %config_path.display()))]
fn run_play(
    config_path: &Path,
    type_delay_ms: Option<u64>,
    think_delay_ms: Option<u64>,
) -> Result<()> {
    let mut config = ConsoleConfig::load_or_default(config_path)?;
    if let Some(ms) = type_delay_ms {
        config = config.with_type_delay_ms(ms);
    }
    if let Some(ms) = think_delay_ms {
        config = config.with_think_delay_ms(ms);
    }

    let stdin = std::io::stdin();
    let input = ConsoleInput::new(stdin.lock(), std::io::stdout(), config.symbols());
    let presenter = ConsolePresenter::new(std::io::stdout(), config);

    let mut engine = GameEngine::new(input, presenter);
    let outcome = engine.run()?;

    info!(%outcome, moves = engine.history().len(), "Game finished");
    Ok(())
}

#[instrument]
fn run_analyze(cells: &str) -> Result<()> {
    let board = parse_board(cells)?;
    let analysis = analyze(&board);
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}
