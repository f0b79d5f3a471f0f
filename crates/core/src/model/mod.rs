mod country;
mod flag;
mod outcome;
mod settings;
mod summary;

pub use country::Country;
pub use flag::{Band, BandLayout, FlagDesign, FlagOverlay};
pub use outcome::{RoundOutcome, RoundRecord};
pub use settings::{QuizSettings, SettingsError};
pub use summary::{GameSummary, SummaryError};
