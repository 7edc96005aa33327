//! Headless simulation of many rounds.
//!
//! Provides a pure function interface: `config -> SimulationReport`
//!
//! Rounds are played through the same [`GameController`] the interactive view
//! uses, split into fixed-size batches. Each batch owns a controller seeded with
//! `seed + batch_index`, so a report depends only on the config, not on
//! how rayon schedules the batches.

use std::ops::Range;

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::game::{ATTEMPT_CEILING, DieRoller, Face, GameController, RollOutcome};

/// How the simulated player picks a guess at the start of each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessStrategy {
    /// Always guess the same face.
    Fixed(Face),
    /// Round `i` guesses face `i % 6 + 1`.
    Cycle,
}

impl GuessStrategy {
    /// Guess to use for the round with the given global index.
    #[must_use]
    pub fn guess_for(self, round: u64) -> Face {
        match self {
            GuessStrategy::Fixed(face) => face,
            // `round % 6` always fits in usize
            #[allow(clippy::cast_possible_truncation)]
            GuessStrategy::Cycle => Face::ALL[(round % 6) as usize],
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    /// Total rounds to play.
    pub rounds: u64,
    /// Guess selection per round.
    pub strategy: GuessStrategy,
    /// Base seed; batch `i` rolls with `seed + i`.
    pub seed: u64,
    /// Rounds per batch (values below 1 are treated as 1).
    pub batch_size: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rounds: 10_000,
            strategy: GuessStrategy::Cycle,
            seed: 42,
            batch_size: 1_000,
        }
    }
}

/// Aggregate statistics over finished rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// Rounds played to completion.
    pub rounds: u64,
    /// Rounds ended by a matching roll.
    pub wins: u64,
    /// Rounds ended by exhausting the attempts.
    pub losses: u64,
    /// Dice rolled across all rounds.
    pub total_rolls: u64,
    /// `wins_by_attempt[n]` counts wins on attempt `n + 1`.
    pub wins_by_attempt: [u64; ATTEMPT_CEILING as usize],
}

/// Probability of hitting a fixed face within the attempt ceiling.
#[must_use]
pub fn expected_win_rate() -> f64 {
    1.0 - (5.0_f64 / 6.0).powi(i32::from(ATTEMPT_CEILING))
}

// Counts stay far below 2^52 in any realistic run
#[allow(clippy::cast_precision_loss)]
impl SimulationReport {
    /// Record the final outcome of one round.
    pub fn record(&mut self, outcome: RollOutcome) {
        match outcome {
            RollOutcome::Won { attempts, .. } => {
                self.rounds += 1;
                self.wins += 1;
                self.total_rolls += u64::from(attempts);
                let slot = usize::from(attempts.clamp(1, ATTEMPT_CEILING)) - 1;
                self.wins_by_attempt[slot] += 1;
            }
            RollOutcome::Exhausted { .. } => {
                self.rounds += 1;
                self.losses += 1;
                self.total_rolls += u64::from(ATTEMPT_CEILING);
            }
            RollOutcome::NeedsGuess | RollOutcome::Miss { .. } => {}
        }
    }

    /// Merge another report into this one.
    pub fn merge(&mut self, other: &SimulationReport) {
        self.rounds += other.rounds;
        self.wins += other.wins;
        self.losses += other.losses;
        self.total_rolls += other.total_rolls;
        for (mine, theirs) in self.wins_by_attempt.iter_mut().zip(other.wins_by_attempt) {
            *mine += theirs;
        }
    }

    /// Fraction of rounds won (0.0-1.0).
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.wins as f64 / self.rounds as f64
    }

    /// Mean rolls per finished round.
    #[must_use]
    pub fn average_rolls_per_round(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.total_rolls as f64 / self.rounds as f64
    }
}

/// Play a single round to completion with the given guess.
///
/// Any round already in progress on `controller` is continued with the new guess.
pub fn play_round<R: DieRoller>(controller: &mut GameController<R>, guess: Face) -> RollOutcome {
    controller.set_guess(guess);
    loop {
        let outcome = controller.roll_once();
        if !matches!(outcome, RollOutcome::Miss { .. }) {
            return outcome;
        }
    }
}

/// Play the rounds with the given global indices on one controller.
pub fn run_rounds<R: DieRoller>(
    controller: &mut GameController<R>,
    rounds: Range<u64>,
    strategy: GuessStrategy,
) -> SimulationReport {
    let mut report = SimulationReport::default();
    for round in rounds {
        report.record(play_round(controller, strategy.guess_for(round)));
    }
    report
}

/// Global round indices played by `batch`; the last batch may be short.
fn batch_rounds(batch: u64, batch_size: u64, rounds: u64) -> Range<u64> {
    let start = batch.saturating_mul(batch_size).min(rounds);
    start..start.saturating_add(batch_size).min(rounds)
}

/// Run a full simulation in parallel batches.
#[must_use]
pub fn run_simulation(config: &SimulationConfig) -> SimulationReport {
    run_simulation_with_progress(config, |_| {})
}

/// Run a full simulation, calling `on_batch` with the number of rounds each
/// finished batch played.
///
/// `on_batch` is called from rayon worker threads in completion order.
#[must_use]
pub fn run_simulation_with_progress<F>(config: &SimulationConfig, on_batch: F) -> SimulationReport
where
    F: Fn(u64) + Sync,
{
    let batch_size = config.batch_size.max(1);
    let batches = config.rounds.div_ceil(batch_size);

    info!(
        rounds = config.rounds,
        batches,
        seed = config.seed,
        "starting simulation"
    );

    let report = (0..batches)
        .into_par_iter()
        .map(|batch| {
            let mut controller = GameController::seeded(config.seed.wrapping_add(batch));
            let rounds = batch_rounds(batch, batch_size, config.rounds);
            let report = run_rounds(&mut controller, rounds, config.strategy);
            on_batch(report.rounds);
            report
        })
        .reduce(SimulationReport::default, |mut a, b| {
            a.merge(&b);
            a
        });

    info!(
        rounds = report.rounds,
        wins = report.wins,
        losses = report.losses,
        "simulation finished"
    );
    report
}
