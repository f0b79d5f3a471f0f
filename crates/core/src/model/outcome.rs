use serde::{Deserialize, Serialize};

use crate::model::country::Country;

/// Verdict for a single tap on a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Correct { country: Country },
    Wrong { chosen: Country, correct: Country },
}

impl RoundOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, RoundOutcome::Correct { .. })
    }

    /// Headline shown in the round alert.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            RoundOutcome::Correct { .. } => "Correct".to_string(),
            RoundOutcome::Wrong { chosen, .. } => format!("Wrong! That's the flag of {chosen}"),
        }
    }

    /// Extra line naming the right answer. `None` when the answer was correct.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            RoundOutcome::Correct { .. } => None,
            RoundOutcome::Wrong { correct, .. } => {
                Some(format!("The correct answer was {correct}"))
            }
        }
    }
}

/// What happened in one answered round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub question_number: u32,
    pub offered: Vec<Country>,
    pub correct: Country,
    pub chosen: Country,
}

impl RoundRecord {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.chosen == self.correct
    }

    #[must_use]
    pub fn outcome(&self) -> RoundOutcome {
        if self.is_correct() {
            RoundOutcome::Correct {
                country: self.correct,
            }
        } else {
            RoundOutcome::Wrong {
                chosen: self.chosen,
                correct: self.correct,
            }
        }
    }
}
