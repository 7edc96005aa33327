//! Game layer for Dice Guess.
//!
//! Implements the rules of the guessing game:
//! - Die faces and their visual lookup
//! - Rollers (seeded, entropy-backed, scripted)
//! - The round state machine driven by the view
//! - Invariant checks used by tests and fuzzing

mod controller;
mod face;
mod invariants;
mod roller;

pub use controller::{ATTEMPT_CEILING, GameController, GameSnapshot, RollOutcome};
pub use face::{Face, PipGrid};
pub use invariants::{InvariantViolation, check_invariants};
pub use roller::{DieRoller, RngRoller, ScriptedRoller};
