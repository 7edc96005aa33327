//! Round-level integration tests for the game controller.
//!
//! These drive the controller the way the view does, with scripted rolls,
//! and walk through the documented scenarios end to end.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use dice_guess::game::check_invariants;
use dice_guess::{ATTEMPT_CEILING, Face, GameController, RollOutcome, ScriptedRoller};

fn controller(faces: &[Face]) -> GameController<ScriptedRoller> {
    GameController::new(ScriptedRoller::new(faces.iter().copied()))
}

fn assert_clean<R: dice_guess::DieRoller>(game: &GameController<R>) {
    let violations = check_invariants(&game.snapshot());
    assert!(violations.is_empty(), "{violations:?}");
}

#[test]
fn test_guess_three_roll_three_wins() {
    let mut game = controller(&[Face::Three]);

    assert_eq!(game.submit_guess("3"), Ok(Face::Three));
    assert_eq!(game.guess(), Some(Face::Three));
    assert!(!game.dialog_visible());

    let outcome = game.roll_once();
    assert_eq!(
        outcome,
        RollOutcome::Won {
            roll: Face::Three,
            attempts: 1
        }
    );
    assert!(game.won());
    assert_eq!(game.attempts(), 0);
    assert_eq!(game.guess(), None);
    assert!(game.dialog_visible());
    assert_clean(&game);
}

#[test]
fn test_guess_seven_is_rejected() {
    let mut game = controller(&[]);
    let err = game.submit_guess("7").unwrap_err();
    assert_eq!(err.to_string(), "Please enter a number between 1 and 6.");
    assert_eq!(game.guess(), None);
    assert!(game.dialog_visible());
    assert_clean(&game);
}

#[test]
fn test_five_misses_end_round_without_win() {
    let misses = [Face::One, Face::Three, Face::Four, Face::Five, Face::Six];
    let mut game = controller(&misses);
    game.submit_guess("2").unwrap();

    for (i, roll) in misses.iter().enumerate() {
        let outcome = game.roll_once();
        assert_eq!(outcome.roll(), Some(*roll));
        assert_clean(&game);
        if i + 1 < usize::from(ATTEMPT_CEILING) {
            assert_eq!(usize::from(game.attempts()), i + 1);
        }
    }

    assert_eq!(game.attempts(), 0);
    assert_eq!(game.guess(), None);
    assert!(game.dialog_visible());
    assert!(!game.won());
}

#[test]
fn test_roll_after_round_end_needs_new_guess() {
    let mut game = controller(&[Face::Five, Face::One]);
    game.submit_guess("5").unwrap();
    assert!(game.roll_once().ends_round());
    let after_win = game.snapshot();

    assert_eq!(game.roll_once(), RollOutcome::NeedsGuess);
    assert_eq!(game.snapshot(), after_win);
    assert_eq!(game.roller().rolls(), 1);

    // A fresh guess starts counting from zero again
    game.submit_guess("2").unwrap();
    assert_eq!(
        game.roll_once(),
        RollOutcome::Miss {
            roll: Face::One,
            attempts: 1
        }
    );
}

#[test]
fn test_many_rounds_back_to_back() {
    let mut game = GameController::seeded(2024);
    let mut rounds = 0;
    for round in 0..500u32 {
        let guess = Face::ALL[(round % 6) as usize];
        game.submit_guess(&guess.to_string()).unwrap();
        let mut rolls = 0;
        loop {
            rolls += 1;
            let outcome = game.roll_once();
            assert_clean(&game);
            if outcome.ends_round() {
                assert_eq!(game.won(), matches!(outcome, RollOutcome::Won { .. }));
                break;
            }
        }
        assert!(rolls <= ATTEMPT_CEILING);
        rounds += 1;
    }
    assert_eq!(rounds, 500);
}
