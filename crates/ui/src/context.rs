use std::sync::Arc;

use flag_core::model::QuizSettings;
use services::{Clock, QuizSession, TracingObserver};

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn quiz_settings(&self) -> QuizSettings;

    /// Fixed RNG seed. `None` draws from OS entropy.
    fn seed(&self) -> Option<u64>;

    fn clock(&self) -> Clock;
}

#[derive(Clone, Debug)]
pub struct AppContext {
    settings: QuizSettings,
    seed: Option<u64>,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            settings: app.quiz_settings(),
            seed: app.seed(),
            clock: app.clock(),
        }
    }

    /// Start a new game with change events routed to `tracing`.
    #[must_use]
    pub fn start_quiz(&self) -> QuizSession {
        let session = match self.seed {
            Some(seed) => QuizSession::with_seed(self.settings, self.clock, seed),
            None => QuizSession::new(self.settings, self.clock),
        };
        session.with_observer(TracingObserver)
    }
}

// Provided by the application composition root (`crates/app`).

#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
