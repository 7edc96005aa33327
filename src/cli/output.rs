//! Output formatting utilities for CLI.

use dice_guess::simulation::{GuessStrategy, SimulationReport, expected_win_rate};
use serde::Serialize;
use std::fmt::Write;

/// JSON-serializable simulation result.
#[derive(Debug, Serialize)]
pub(super) struct JsonSimulationResult {
    /// Base seed the batches were derived from.
    seed: u64,
    /// Guess selection used.
    strategy: GuessStrategy,
    /// Rounds played.
    rounds: u64,
    /// Rounds won.
    wins: u64,
    /// Rounds lost.
    losses: u64,
    /// Dice rolled.
    total_rolls: u64,
    /// Observed win rate (0.0-1.0).
    win_rate: f64,
    /// Theoretical win rate for a five-roll round.
    expected_win_rate: f64,
    /// Mean rolls per round.
    average_rolls_per_round: f64,
    /// Wins per attempt number, starting at attempt 1.
    wins_by_attempt: Vec<u64>,
}

impl JsonSimulationResult {
    /// Create from a report.
    pub(super) fn from_report(report: &SimulationReport, seed: u64, strategy: GuessStrategy) -> Self {
        Self {
            seed,
            strategy,
            rounds: report.rounds,
            wins: report.wins,
            losses: report.losses,
            total_rolls: report.total_rolls,
            win_rate: report.win_rate(),
            expected_win_rate: expected_win_rate(),
            average_rolls_per_round: report.average_rolls_per_round(),
            wins_by_attempt: report.wins_by_attempt.to_vec(),
        }
    }
}

fn describe_strategy(strategy: GuessStrategy) -> String {
    match strategy {
        GuessStrategy::Fixed(face) => format!("always {face}"),
        GuessStrategy::Cycle => "cycle 1-6".to_string(),
    }
}

/// Format a simulation report as human-readable text.
#[allow(clippy::cast_precision_loss)]
pub(super) fn format_text(report: &SimulationReport, seed: u64, strategy: GuessStrategy) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Simulation Results ({} rounds)", report.rounds);
    output.push_str("========================================\n\n");
    let _ = writeln!(output, "  Seed:     {seed}");
    let _ = writeln!(output, "  Guessing: {}", describe_strategy(strategy));
    output.push('\n');

    let _ = writeln!(
        output,
        "  Won:  {} ({:.1}%, expected {:.1}%)",
        report.wins,
        report.win_rate() * 100.0,
        expected_win_rate() * 100.0
    );
    let _ = writeln!(output, "  Lost: {}", report.losses);
    let _ = writeln!(
        output,
        "  Rolls: {} ({:.2} per round)",
        report.total_rolls,
        report.average_rolls_per_round()
    );

    output.push_str("\nWins by attempt:\n");
    for (i, wins) in report.wins_by_attempt.iter().enumerate() {
        let share = if report.wins == 0 {
            0.0
        } else {
            *wins as f64 / report.wins as f64 * 100.0
        };
        let _ = writeln!(output, "  Attempt {}: {wins} ({share:.1}%)", i + 1);
    }

    output
}
