//! Error types for the game core.

use thiserror::Error;

/// A submitted guess that is not an integer in `1..=6`.
///
/// Returned by [`crate::GameController::submit_guess`]. No state is changed
/// when this is returned, so the guess dialog stays open for re-entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please enter a number between 1 and 6.")]
pub struct InvalidGuess {
    /// The raw text that was rejected.
    pub input: String,
}

impl InvalidGuess {
    /// Create an error for the given raw input.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
