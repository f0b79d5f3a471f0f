use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::outcome::RoundRecord;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("game has {rounds} rounds but {records} were recorded")]
    CountMismatch { rounds: u32, records: usize },
}

/// Result of a finished game, shown in the game-over alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    rounds: u32,
    correct: u32,
    records: Vec<RoundRecord>,
}

impl GameSummary {
    /// Build a summary from the rounds of a completed game.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before `started_at`.
    /// Returns `SummaryError::CountMismatch` if the records do not cover every round.
    pub fn from_records(
        rounds: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        records: Vec<RoundRecord>,
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        if usize::try_from(rounds).ok() != Some(records.len()) {
            return Err(SummaryError::CountMismatch {
                rounds,
                records: records.len(),
            });
        }

        let mut correct = 0_u32;
        for record in &records {
            if record.is_correct() {
                correct = correct.saturating_add(1);
            }
        }

        Ok(Self {
            started_at,
            completed_at,
            rounds,
            correct,
            records,
        })
    }

    /// Final score: one point per correct answer.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    #[must_use]
    pub fn wrong(&self) -> u32 {
        self.rounds.saturating_sub(self.correct)
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }
}
