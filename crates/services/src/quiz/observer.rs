use flag_core::model::{Country, RoundOutcome};
use tracing::{debug, info};

/// State change reported after a successful session mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    Started,
    Answered { outcome: RoundOutcome },
    Advanced { question_number: u32 },
    Finished { score: u32 },
}

/// Read-only view of what the presentation layer renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSnapshot<'a> {
    pub options: &'a [Country],
    pub target: Country,
    pub score: u32,
    pub question_number: u32,
    pub rounds: u32,
    pub selected: Option<usize>,
    pub is_game_over: bool,
}

/// Listener invoked by `QuizSession` after every mutation.
pub trait QuizObserver {
    fn on_change(&mut self, event: &QuizEvent, snapshot: &QuizSnapshot<'_>);
}

/// Observer that reports session events through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl QuizObserver for TracingObserver {
    fn on_change(&mut self, event: &QuizEvent, snapshot: &QuizSnapshot<'_>) {
        match event {
            QuizEvent::Started => info!(
                target: "quiz",
                rounds = snapshot.rounds,
                target_country = %snapshot.target,
                "game started"
            ),
            QuizEvent::Answered { outcome } => debug!(
                target: "quiz",
                question = snapshot.question_number,
                correct = outcome.is_correct(),
                score = snapshot.score,
                "round answered"
            ),
            QuizEvent::Advanced { question_number } => debug!(
                target: "quiz",
                question = *question_number,
                target_country = %snapshot.target,
                "next question"
            ),
            QuizEvent::Finished { score } => info!(
                target: "quiz",
                score = *score,
                rounds = snapshot.rounds,
                "game over"
            ),
        }
    }
}
