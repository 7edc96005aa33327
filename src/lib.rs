// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Dice Guess: pick a face, roll a six-sided die, try your luck.
//!
//! The crate is split into a pure game core and the surfaces that drive it:
//! - [`game`] holds the round state machine, the die faces and the
//!   randomness seam
//! - [`simulation`] plays many rounds headlessly and aggregates statistics
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   View layer (TUI) / Simulation     │
//! ├─────────────────────────────────────┤
//! │         Game Controller             │
//! ├─────────────────────────────────────┤
//! │      Die Roller (rand / script)     │
//! └─────────────────────────────────────┘
//! ```
//!
//! A view only ever calls two operations on the controller:
//! [`GameController::submit_guess`] and [`GameController::roll_once`].

pub mod error;
pub mod game;
pub mod simulation;

pub use error::InvalidGuess;

// Re-export key game types at crate root for convenience
pub use game::{
    ATTEMPT_CEILING, DieRoller, Face, GameController, GameSnapshot, RngRoller, RollOutcome,
    ScriptedRoller,
};
