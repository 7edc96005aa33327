//! Simulate command implementation.

use super::logging::{self, LogTarget};
use super::output::{JsonSimulationResult, format_text};
use super::{CliError, SimulateFormat};
use dice_guess::Face;
use dice_guess::simulation::{GuessStrategy, SimulationConfig, run_simulation_with_progress};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

/// Execute the simulate command.
///
/// # Errors
///
/// Returns an error if logging cannot be set up or the report cannot be
/// serialized.
#[allow(clippy::too_many_arguments, clippy::needless_pass_by_value)]
pub(crate) fn execute(
    rounds: u64,
    guess: Option<Face>,
    seed: Option<u64>,
    batch_size: u64,
    threads: Option<usize>,
    format: SimulateFormat,
    progress: bool,
    log_file: Option<PathBuf>,
) -> Result<(), CliError> {
    logging::init(LogTarget::file_or(log_file, LogTarget::Stderr))?;

    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let config = SimulationConfig {
        rounds,
        strategy: guess.map_or(GuessStrategy::Cycle, GuessStrategy::Fixed),
        seed: seed.unwrap_or_else(rand::random),
        batch_size,
    };

    let pb = if progress {
        let pb = ProgressBar::new(rounds);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rounds ({per_sec})")
                .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let report = run_simulation_with_progress(&config, |done| {
        if let Some(pb) = &pb {
            pb.inc(done);
        }
    });
    let duration = start.elapsed();

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    match format {
        SimulateFormat::Text => {
            println!();
            print!("{}", format_text(&report, config.seed, config.strategy));
            println!();
            println!("Duration: {:.2}s", duration.as_secs_f64());
        }
        SimulateFormat::Json => {
            let json_result = JsonSimulationResult::from_report(&report, config.seed, config.strategy);
            println!("{}", serde_json::to_string_pretty(&json_result)?);
        }
    }

    Ok(())
}
