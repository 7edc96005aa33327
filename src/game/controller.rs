//! The round state machine behind the dice-guessing screen.
//!
//! A round starts when a guess is accepted and ends on a matching roll or
//! after [`ATTEMPT_CEILING`] misses. Between rounds the guess dialog is open
//! and roll requests only re-open it.

use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;

use crate::error::InvalidGuess;
use crate::game::{DieRoller, Face, RngRoller};

/// Rolls allowed per round before a forced reset.
pub const ATTEMPT_CEILING: u8 = 5;

/// What a single roll request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RollOutcome {
    /// No active guess: nothing was drawn and the dialog was opened.
    NeedsGuess,
    /// The roll missed and the round continues.
    Miss {
        /// Face that was rolled.
        roll: Face,
        /// Attempts used so far this round.
        attempts: u8,
    },
    /// The roll matched the guess and the round ended.
    Won {
        /// Face that was rolled.
        roll: Face,
        /// Attempt on which the guess was hit (`1..=ATTEMPT_CEILING`).
        attempts: u8,
    },
    /// The last allowed roll missed and the round ended.
    Exhausted {
        /// Face that was rolled.
        roll: Face,
    },
}

impl RollOutcome {
    /// The face drawn, if a roll happened.
    #[must_use]
    pub const fn roll(self) -> Option<Face> {
        match self {
            RollOutcome::NeedsGuess => None,
            RollOutcome::Miss { roll, .. }
            | RollOutcome::Won { roll, .. }
            | RollOutcome::Exhausted { roll } => Some(roll),
        }
    }

    /// Whether this roll ended the round.
    #[must_use]
    pub const fn ends_round(self) -> bool {
        matches!(self, RollOutcome::Won { .. } | RollOutcome::Exhausted { .. })
    }
}

/// Everything a view needs to render the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Active guess, if any.
    pub guess: Option<Face>,
    /// Rolls made in the current round.
    pub attempts: u8,
    /// Most recent roll, if any roll has happened this session.
    pub last_roll: Option<Face>,
    /// Set by a matching roll, cleared when a round is exhausted.
    pub won: bool,
    /// Whether the guess dialog should be shown.
    pub dialog_visible: bool,
}

/// Owns the round state and applies the two user actions to it.
#[derive(Debug, Clone)]
pub struct GameController<R> {
    roller: R,
    guess: Option<Face>,
    attempts: u8,
    last_roll: Option<Face>,
    won: bool,
    dialog_visible: bool,
}

impl GameController<RngRoller<StdRng>> {
    /// Controller rolling with operating system entropy.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(RngRoller::from_os_rng())
    }

    /// Controller with a reproducible roll sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngRoller::seeded(seed))
    }
}

impl<R: DieRoller> GameController<R> {
    /// Fresh session: no guess, no attempts, dialog open.
    #[must_use]
    pub const fn new(roller: R) -> Self {
        Self {
            roller,
            guess: None,
            attempts: 0,
            last_roll: None,
            won: false,
            dialog_visible: true,
        }
    }

    /// Accept a guess typed into the dialog.
    ///
    /// On success the dialog closes. Attempts and the previous roll are
    /// left as they are.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGuess`] if `raw` is not an integer in `1..=6`. State
    /// is unchanged in that case.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Face, InvalidGuess> {
        let guess = Face::parse_guess(raw).inspect_err(|err| {
            debug!(input = %err.input, "rejected guess");
        })?;
        self.set_guess(guess);
        Ok(guess)
    }

    /// Accept an already validated guess.
    ///
    /// Same effect as a successful [`submit_guess`](Self::submit_guess).
    pub fn set_guess(&mut self, guess: Face) {
        self.guess = Some(guess);
        self.dialog_visible = false;
        debug!(%guess, "guess accepted");
    }

    /// Roll the die once against the active guess.
    ///
    /// Without a guess this only opens the dialog.
    pub fn roll_once(&mut self) -> RollOutcome {
        let Some(guess) = self.guess else {
            self.dialog_visible = true;
            debug!("roll requested without a guess");
            return RollOutcome::NeedsGuess;
        };

        let roll = self.roller.roll();
        self.last_roll = Some(roll);
        self.attempts += 1;
        let attempts = self.attempts;
        debug!(%roll, %guess, attempts, "rolled");

        if roll == guess {
            self.won = true;
            self.end_round();
            debug!(%guess, attempts, "round won");
            RollOutcome::Won { roll, attempts }
        } else if attempts >= ATTEMPT_CEILING {
            self.won = false;
            self.end_round();
            debug!(%guess, "round lost, attempts exhausted");
            RollOutcome::Exhausted { roll }
        } else {
            RollOutcome::Miss { roll, attempts }
        }
    }

    fn end_round(&mut self) {
        self.attempts = 0;
        self.guess = None;
        self.dialog_visible = true;
    }

    /// Active guess, if any.
    #[must_use]
    pub const fn guess(&self) -> Option<Face> {
        self.guess
    }

    /// Rolls made in the current round.
    #[must_use]
    pub const fn attempts(&self) -> u8 {
        self.attempts
    }

    /// Rolls left before the round is forced to end.
    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        ATTEMPT_CEILING.saturating_sub(self.attempts)
    }

    /// Most recent roll.
    #[must_use]
    pub const fn last_roll(&self) -> Option<Face> {
        self.last_roll
    }

    /// Face to draw on screen: the last roll, or one pip before any roll.
    #[must_use]
    pub fn displayed_face(&self) -> Face {
        self.last_roll.unwrap_or(Face::One)
    }

    /// Whether the most recent finished round was won.
    #[must_use]
    pub const fn won(&self) -> bool {
        self.won
    }

    /// Whether the guess dialog should be shown.
    #[must_use]
    pub const fn dialog_visible(&self) -> bool {
        self.dialog_visible
    }

    /// Copy of all view-facing state.
    #[must_use]
    pub const fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            guess: self.guess,
            attempts: self.attempts,
            last_roll: self.last_roll,
            won: self.won,
            dialog_visible: self.dialog_visible,
        }
    }

    /// The underlying roller.
    #[must_use]
    pub const fn roller(&self) -> &R {
        &self.roller
    }
}
