use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::{debug, warn};

use flag_core::Clock;
use flag_core::model::{Country, GameSummary, QuizSettings, RoundOutcome, RoundRecord};

use super::observer::{QuizEvent, QuizObserver, QuizSnapshot};
use crate::error::QuizError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// State of one flag quiz game.
///
/// Every round shuffles the whole country pool and offers its first
/// `options_per_round` entries, so a country may come up again in later rounds.
/// Once `question_number` passes the configured round count the game is over
/// and only `restart` is accepted.
pub struct QuizSession {
    settings: QuizSettings,
    clock: Clock,
    rng: StdRng,
    pool: Vec<Country>,
    correct_index: usize,
    score: u32,
    question_number: u32,
    selected: Option<usize>,
    history: Vec<RoundRecord>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    observer: Option<Box<dyn QuizObserver>>,
}

impl QuizSession {
    /// Start a game seeded from OS entropy.
    #[must_use]
    pub fn new(settings: QuizSettings, clock: Clock) -> Self {
        Self::with_rng(settings, clock, StdRng::from_os_rng())
    }

    /// Start a game whose questions are fully determined by `seed`.
    #[must_use]
    pub fn with_seed(settings: QuizSettings, clock: Clock, seed: u64) -> Self {
        Self::with_rng(settings, clock, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: QuizSettings, clock: Clock, rng: StdRng) -> Self {
        let mut session = Self {
            settings,
            clock,
            rng,
            pool: Country::ALL.to_vec(),
            correct_index: 0,
            score: 0,
            question_number: 1,
            selected: None,
            history: Vec::new(),
            started_at: clock.now(),
            completed_at: None,
            observer: None,
        };
        session.start();
        session
    }

    /// Install the listener notified after each mutation.
    #[must_use]
    pub fn with_observer(mut self, observer: impl QuizObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Reset to the first question with a fresh shuffle and a zero score.
    pub fn start(&mut self) {
        self.shuffle_round();
        self.score = 0;
        self.question_number = 1;
        self.selected = None;
        self.history.clear();
        self.started_at = self.clock.now();
        self.completed_at = None;
        self.notify(QuizEvent::Started);
    }

    /// Same as `start`. Called when the player dismisses the game-over alert.
    pub fn restart(&mut self) {
        self.start();
    }

    /// Answer the current round with the flag at `index`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::GameOver` once all rounds are played.
    /// Returns `QuizError::InvalidIndex` if `index` is not one of the offered flags.
    /// Returns `QuizError::AlreadyAnswered` if this round already has an answer.
    pub fn answer(&mut self, index: usize) -> Result<RoundOutcome, QuizError> {
        if self.is_game_over() {
            return Err(QuizError::GameOver);
        }
        let options = self.settings.options_per_round();
        if index >= options {
            return Err(QuizError::InvalidIndex { index, options });
        }
        if self.selected.is_some() {
            return Err(QuizError::AlreadyAnswered);
        }

        let chosen = self.pool[index];
        let correct = self.target();
        self.selected = Some(index);

        let record = RoundRecord {
            question_number: self.question_number,
            offered: self.options().to_vec(),
            correct,
            chosen,
        };
        let outcome = record.outcome();
        if outcome.is_correct() {
            self.score += 1;
        }
        self.history.push(record);

        self.notify(QuizEvent::Answered { outcome });
        Ok(outcome)
    }

    /// Move past an answered round.
    ///
    /// Prepares the next question, or ends the game when the last round was answered.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::GameOver` once all rounds are played.
    /// Returns `QuizError::NotAnswered` if the current round has no answer yet.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        if self.is_game_over() {
            return Err(QuizError::GameOver);
        }
        if self.selected.is_none() {
            return Err(QuizError::NotAnswered);
        }

        self.selected = None;
        self.question_number += 1;

        if self.is_game_over() {
            self.completed_at = Some(self.clock.now());
            self.notify(QuizEvent::Finished { score: self.score });
        } else {
            self.shuffle_round();
            self.notify(QuizEvent::Advanced {
                question_number: self.question_number,
            });
        }
        Ok(())
    }

    fn shuffle_round(&mut self) {
        self.pool.shuffle(&mut self.rng);
        self.correct_index = self.rng.random_range(0..self.settings.options_per_round());
        debug!(
            target: "quiz",
            correct_index = self.correct_index,
            "round prepared"
        );
    }

    fn notify(&mut self, event: QuizEvent) {
        let Some(mut observer) = self.observer.take() else {
            return;
        };
        observer.on_change(&event, &self.snapshot());
        self.observer = Some(observer);
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot<'_> {
        QuizSnapshot {
            options: self.options(),
            target: self.target(),
            score: self.score,
            question_number: self.question_number,
            rounds: self.settings.rounds(),
            selected: self.selected,
            is_game_over: self.is_game_over(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    /// Flags offered this round, in display order.
    #[must_use]
    pub fn options(&self) -> &[Country] {
        &self.pool[..self.settings.options_per_round()]
    }

    /// Country the player has to find.
    #[must_use]
    pub fn target(&self) -> Country {
        self.pool[self.correct_index]
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// 1-based. Exceeds the round count once the game is over.
    #[must_use]
    pub fn question_number(&self) -> u32 {
        self.question_number
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn round_answered(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.question_number > self.settings.rounds()
    }

    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Summary of the finished game. `None` while rounds remain.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        let completed_at = self.completed_at?;
        match GameSummary::from_records(
            self.settings.rounds(),
            self.started_at,
            completed_at,
            self.history.clone(),
        ) {
            Ok(summary) => Some(summary),
            Err(err) => {
                warn!(target: "quiz", %err, "game summary is inconsistent");
                None
            }
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("settings", &self.settings)
            .field("options", &self.options())
            .field("correct_index", &self.correct_index)
            .field("score", &self.score)
            .field("question_number", &self.question_number)
            .field("selected", &self.selected)
            .field("has_observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
