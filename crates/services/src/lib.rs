#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use flag_core::Clock;

pub use error::QuizError;
pub use quiz::{QuizEvent, QuizObserver, QuizSession, QuizSnapshot, TracingObserver};
