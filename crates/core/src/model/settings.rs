use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::country::Country;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("rounds per game must be > 0")]
    InvalidRounds,

    #[error("options per round must be between 2 and {max}, got {got}")]
    InvalidOptionsPerRound { got: usize, max: usize },
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Shape of a single game: how many rounds it lasts and how many flags each round offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuizSettings")]
pub struct QuizSettings {
    rounds: u32,
    options_per_round: usize,
}

impl QuizSettings {
    pub const DEFAULT_ROUNDS: u32 = 8;
    pub const DEFAULT_OPTIONS_PER_ROUND: usize = 3;

    /// # Errors
    ///
    /// Returns `SettingsError::InvalidRounds` if `rounds` is zero.
    /// Returns `SettingsError::InvalidOptionsPerRound` if `options_per_round` is below 2
    /// or larger than the country pool.
    pub fn new(rounds: u32, options_per_round: usize) -> Result<Self, SettingsError> {
        if rounds == 0 {
            return Err(SettingsError::InvalidRounds);
        }
        let max = Country::ALL.len();
        if !(2..=max).contains(&options_per_round) {
            return Err(SettingsError::InvalidOptionsPerRound {
                got: options_per_round,
                max,
            });
        }

        Ok(Self {
            rounds,
            options_per_round,
        })
    }

    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    #[must_use]
    pub fn options_per_round(&self) -> usize {
        self.options_per_round
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            rounds: Self::DEFAULT_ROUNDS,
            options_per_round: Self::DEFAULT_OPTIONS_PER_ROUND,
        }
    }
}

/// Unchecked wire form; deserialized values go through `QuizSettings::new`.
#[derive(Deserialize)]
struct RawQuizSettings {
    rounds: u32,
    options_per_round: usize,
}

impl TryFrom<RawQuizSettings> for QuizSettings {
    type Error = SettingsError;

    fn try_from(raw: RawQuizSettings) -> Result<Self, Self::Error> {
        Self::new(raw.rounds, raw.options_per_round)
    }
}
