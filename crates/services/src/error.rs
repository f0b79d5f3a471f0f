//! Shared error types for the services crate.

use thiserror::Error;

/// Rejections from `QuizSession`. A rejected call never changes session state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("option {index} is out of range, expected 0..{options}")]
    InvalidIndex { index: usize, options: usize },
    #[error("game is over")]
    GameOver,
    #[error("round has already been answered")]
    AlreadyAnswered,
    #[error("round has not been answered yet")]
    NotAnswered,
}
