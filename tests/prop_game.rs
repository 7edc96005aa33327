//! Property-based tests for the game controller.
//!
//! Run with: cargo test --release prop_game

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use dice_guess::game::check_invariants;
use dice_guess::{ATTEMPT_CEILING, Face, GameController, RollOutcome, ScriptedRoller};

/// A user action as the view would forward it.
#[derive(Debug, Clone)]
enum Action {
    Submit(String),
    Roll,
}

fn face() -> impl Strategy<Value = Face> {
    (1u8..=6).prop_map(|v| Face::from_value(v).unwrap())
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => Just(Action::Roll),
        1 => (1u8..=6).prop_map(|v| Action::Submit(v.to_string())),
        1 => ".{0,4}".prop_map(Action::Submit),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Every face submitted as text becomes the guess and hides the dialog.
    #[test]
    fn prop_valid_guess_accepted(guess in face()) {
        let mut game = GameController::new(ScriptedRoller::new([Face::One]));
        prop_assert_eq!(game.submit_guess(&guess.to_string()), Ok(guess));
        prop_assert_eq!(game.guess(), Some(guess));
        prop_assert!(!game.dialog_visible());
    }

    /// Integers outside 1..=6 never change state.
    #[test]
    fn prop_out_of_range_rejected(n in any::<i64>().prop_filter("out of range", |n| !(1..=6).contains(n))) {
        let mut game = GameController::new(ScriptedRoller::new([Face::One]));
        let before = game.snapshot();
        prop_assert!(game.submit_guess(&n.to_string()).is_err());
        prop_assert_eq!(game.snapshot(), before);
    }

    /// Arbitrary text either parses to a face or leaves state untouched.
    #[test]
    fn prop_arbitrary_text_never_corrupts(raw in "\\PC{0,8}") {
        let mut game = GameController::new(ScriptedRoller::new([Face::One]));
        let before = game.snapshot();
        match game.submit_guess(&raw) {
            Ok(face) => prop_assert_eq!(game.guess(), Some(face)),
            Err(err) => {
                prop_assert_eq!(err.input, raw);
                prop_assert_eq!(game.snapshot(), before);
            }
        }
    }

    /// Each roll with a guess adds exactly one attempt until the round ends.
    #[test]
    fn prop_roll_counts_one_attempt(
        guess in face(),
        rolls in prop::collection::vec(face(), 1..20),
    ) {
        let mut game = GameController::new(ScriptedRoller::new(rolls));
        game.set_guess(guess);
        loop {
            let before = game.attempts();
            match game.roll_once() {
                RollOutcome::Miss { attempts, .. } => {
                    prop_assert_eq!(attempts, before + 1);
                    prop_assert_eq!(game.attempts(), before + 1);
                }
                RollOutcome::Won { attempts, roll } => {
                    prop_assert_eq!(roll, guess);
                    prop_assert_eq!(attempts, before + 1);
                    prop_assert!(game.won());
                    break;
                }
                RollOutcome::Exhausted { roll } => {
                    prop_assert_ne!(roll, guess);
                    prop_assert_eq!(before + 1, ATTEMPT_CEILING);
                    prop_assert!(!game.won());
                    break;
                }
                RollOutcome::NeedsGuess => prop_assert!(false, "guess was set"),
            }
        }
        prop_assert_eq!(game.attempts(), 0);
        prop_assert_eq!(game.guess(), None);
        prop_assert!(game.dialog_visible());
    }

    /// Rolling without a guess never draws or counts.
    #[test]
    fn prop_roll_without_guess_is_inert(times in 1usize..20) {
        let mut game = GameController::new(ScriptedRoller::new([Face::Four]));
        for _ in 0..times {
            prop_assert_eq!(game.roll_once(), RollOutcome::NeedsGuess);
        }
        prop_assert_eq!(game.attempts(), 0);
        prop_assert_eq!(game.last_roll(), None);
        prop_assert!(game.dialog_visible());
        prop_assert_eq!(game.roller().rolls(), 0);
    }

    /// Invariants hold after any interleaving of user actions.
    #[test]
    fn prop_invariants_hold(
        actions in prop::collection::vec(action(), 0..60),
        seed in any::<u64>(),
    ) {
        let mut game = GameController::seeded(seed);
        for action in actions {
            match action {
                Action::Submit(raw) => { let _ = game.submit_guess(&raw); }
                Action::Roll => { game.roll_once(); }
            }
            let violations = check_invariants(&game.snapshot());
            prop_assert!(violations.is_empty(), "{:?}", violations);
        }
    }
}

/// Observed win rate over many rounds matches `1 - (5/6)^5`.
#[test]
fn test_simulated_win_rate_is_plausible() {
    use dice_guess::simulation::{SimulationConfig, expected_win_rate, run_simulation};

    let config = SimulationConfig {
        rounds: 60_000,
        seed: 31_337,
        ..SimulationConfig::default()
    };
    let report = run_simulation(&config);
    assert_eq!(report.rounds, 60_000);
    // Standard error is about 0.002; allow ten times that
    assert!(
        (report.win_rate() - expected_win_rate()).abs() < 0.02,
        "win rate {} vs expected {}",
        report.win_rate(),
        expected_win_rate()
    );
    // Wins on attempt 1 should outnumber wins on attempt 5 (1/6 vs (5/6)^4/6)
    assert!(report.wins_by_attempt[0] > report.wins_by_attempt[4]);
}
