//! Game invariants - sanity checks that detect bugs.
//!
//! These hold between any two operations on a correctly implemented
//! controller. A violation is always a bug, never a gameplay outcome.

use thiserror::Error;

use crate::game::{ATTEMPT_CEILING, GameSnapshot};

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invariant violation: {message}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(snapshot: &GameSnapshot) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    // The dialog is the guess prompt: open exactly when there is no guess
    if snapshot.dialog_visible == snapshot.guess.is_some() {
        violations.push(InvariantViolation {
            message: format!(
                "dialog_visible = {} but guess = {:?}",
                snapshot.dialog_visible, snapshot.guess
            ),
        });
    }

    // Reaching the ceiling always ends the round
    if snapshot.attempts >= ATTEMPT_CEILING {
        violations.push(InvariantViolation {
            message: format!(
                "{} attempts recorded, ceiling is {ATTEMPT_CEILING}",
                snapshot.attempts
            ),
        });
    }

    // Attempts only accumulate while a guess is active
    if snapshot.guess.is_none() && snapshot.attempts != 0 {
        violations.push(InvariantViolation {
            message: format!("{} attempts recorded without a guess", snapshot.attempts),
        });
    }

    if snapshot.attempts > 0 && snapshot.last_roll.is_none() {
        violations.push(InvariantViolation {
            message: "attempts recorded but no roll".to_string(),
        });
    }

    violations
}
