#![no_main]

use arbitrary::Arbitrary;
use dice_guess::game::check_invariants;
use dice_guess::{ATTEMPT_CEILING, GameController, RollOutcome};
use libfuzzer_sys::fuzz_target;

/// One user action forwarded by the view.
#[derive(Arbitrary, Debug)]
enum Action {
    /// Raw dialog text, not limited to one digit.
    Submit(String),
    Roll,
}

/// Structured input for a play session.
#[derive(Arbitrary, Debug)]
struct SessionInput {
    /// Seed for the die.
    seed: u64,
    /// Actions in order (capped to keep runs short).
    actions: Vec<Action>,
}

fuzz_target!(|input: SessionInput| {
    let mut game = GameController::seeded(input.seed);

    for action in input.actions.into_iter().take(1_000) {
        let before = game.snapshot();
        match action {
            Action::Submit(raw) => {
                if game.submit_guess(&raw).is_err() {
                    assert_eq!(game.snapshot(), before, "rejected guess changed state");
                }
            }
            Action::Roll => match game.roll_once() {
                RollOutcome::NeedsGuess => {
                    assert!(before.guess.is_none());
                    assert_eq!(game.attempts(), before.attempts);
                }
                RollOutcome::Miss { attempts, .. } => {
                    assert_eq!(attempts, before.attempts + 1);
                    assert!(attempts < ATTEMPT_CEILING);
                }
                RollOutcome::Won { .. } | RollOutcome::Exhausted { .. } => {
                    assert_eq!(game.attempts(), 0);
                    assert!(game.guess().is_none());
                }
            },
        }

        let violations = check_invariants(&game.snapshot());
        assert!(violations.is_empty(), "{violations:?}");
    }
});
