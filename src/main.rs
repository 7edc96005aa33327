//! Dice Guess CLI - play the guessing game or simulate it in bulk.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use dice_guess::Face;
use std::path::PathBuf;
use std::process::ExitCode;

/// Dice Guess - pick a face, roll the die, try your luck
#[derive(Parser, Debug)]
#[command(name = "dice-guess")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play interactively in the terminal
    Play {
        /// Random seed (default: OS entropy)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Write logs to this file (the TUI owns the terminal)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Play many rounds headlessly and report statistics
    Simulate {
        /// Number of rounds to play (default: 10000)
        #[arg(short, long, default_value = "10000")]
        rounds: u64,

        /// Always guess this face (default: cycle 1-6)
        #[arg(short, long, value_parser = parse_face)]
        guess: Option<Face>,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Rounds per batch (default: 1000)
        #[arg(short, long, default_value = "1000")]
        batch_size: u64,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::SimulateFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,

        /// Write logs to this file instead of stderr
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
}

fn parse_face(raw: &str) -> Result<Face, String> {
    Face::parse_guess(raw).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play { seed, log_file } => cli::play::execute(seed, log_file),

        Commands::Simulate {
            rounds,
            guess,
            seed,
            batch_size,
            threads,
            format,
            progress,
            log_file,
        } => cli::simulate::execute(
            rounds, guess, seed, batch_size, threads, format, progress, log_file,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
