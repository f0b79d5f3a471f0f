mod observer;
mod session;

pub use observer::{QuizEvent, QuizObserver, QuizSnapshot, TracingObserver};
pub use session::QuizSession;
