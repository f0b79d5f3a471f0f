use flag_core::model::RoundOutcome;
use services::{QuizError, QuizSession};

use super::flag_vm::{FlagVm, map_flag};
use super::time_fmt::format_elapsed;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Tap(usize),
    Continue,
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagEmphasis {
    Normal,
    Selected,
    Dimmed,
}

impl FlagEmphasis {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            FlagEmphasis::Normal => "flag-button",
            FlagEmphasis::Selected => "flag-button flag-button--selected",
            FlagEmphasis::Dimmed => "flag-button flag-button--dimmed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagButtonVm {
    pub index: usize,
    pub label: &'static str,
    pub image: FlagVm,
    pub emphasis: FlagEmphasis,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlertVm {
    None,
    Round {
        title: String,
        detail: Option<String>,
        score_line: String,
    },
    GameOver {
        final_line: String,
        elapsed_line: Option<String>,
    },
}

impl AlertVm {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, AlertVm::None)
    }
}

/// Everything the game screen renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameScreenVm {
    pub target: String,
    pub flags: Vec<FlagButtonVm>,
    pub score: String,
    pub progress: String,
    pub alert: AlertVm,
}

pub struct QuizVm {
    session: QuizSession,
    last_outcome: Option<RoundOutcome>,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            last_outcome: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// # Errors
    ///
    /// Returns the `QuizError` from the session when the intent does not fit the
    /// current state. Nothing changes in that case.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<(), QuizError> {
        match intent {
            QuizIntent::Tap(index) => {
                let outcome = self.session.answer(index)?;
                self.last_outcome = Some(outcome);
            }
            QuizIntent::Continue => {
                self.session.advance()?;
                self.last_outcome = None;
            }
            QuizIntent::Reset => {
                self.session.restart();
                self.last_outcome = None;
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn alert(&self) -> AlertVm {
        if self.session.is_game_over() {
            let summary = self.session.summary();
            let score = summary
                .as_ref()
                .map_or(self.session.score(), |summary| summary.score());
            let rounds = self.session.settings().rounds();
            return AlertVm::GameOver {
                final_line: format!("Your final score is {score} out of {rounds}"),
                elapsed_line: summary.map(|summary| {
                    format_elapsed(summary.completed_at() - summary.started_at())
                }),
            };
        }

        match self.last_outcome {
            Some(outcome) => AlertVm::Round {
                title: outcome.title(),
                detail: outcome.detail(),
                score_line: format!("Your score is {}", self.session.score()),
            },
            None => AlertVm::None,
        }
    }

    #[must_use]
    pub fn screen(&self) -> GameScreenVm {
        let selected = self.session.selected();
        let flags = self
            .session
            .options()
            .iter()
            .enumerate()
            .map(|(index, country)| {
                let emphasis = match selected {
                    None => FlagEmphasis::Normal,
                    Some(chosen) if chosen == index => FlagEmphasis::Selected,
                    Some(_) => FlagEmphasis::Dimmed,
                };
                FlagButtonVm {
                    index,
                    label: country.accessibility_label(),
                    image: map_flag(&country.design()),
                    emphasis,
                }
            })
            .collect();

        let rounds = self.session.settings().rounds();
        let question = self.session.question_number().min(rounds);

        GameScreenVm {
            target: self.session.target().to_string(),
            flags,
            score: format!("Score: {}", self.session.score()),
            progress: format!("Question {question} of {rounds}"),
            alert: self.alert(),
        }
    }
}

/// Keyboard shortcut for the current screen: digits tap a flag, Enter or Space
/// confirms the open alert.
#[must_use]
pub fn intent_for_key(key: &str, alert: &AlertVm, options: usize) -> Option<QuizIntent> {
    match alert {
        AlertVm::None => {
            let digit = key.parse::<usize>().ok()?;
            let index = digit.checked_sub(1)?;
            (index < options).then_some(QuizIntent::Tap(index))
        }
        AlertVm::Round { .. } => {
            matches!(key, "Enter" | " ").then_some(QuizIntent::Continue)
        }
        AlertVm::GameOver { .. } => {
            matches!(key, "Enter" | " ").then_some(QuizIntent::Reset)
        }
    }
}

#[cfg(test)]
mod tests {
    use flag_core::model::QuizSettings;
    use flag_core::time::fixed_clock;

    use super::*;

    fn vm(seed: u64) -> QuizVm {
        QuizVm::new(QuizSession::with_seed(
            QuizSettings::default(),
            fixed_clock(),
            seed,
        ))
    }

    #[test]
    fn fresh_screen_has_three_normal_flags() {
        let vm = vm(1);
        let screen = vm.screen();

        assert_eq!(screen.flags.len(), 3);
        assert!(
            screen
                .flags
                .iter()
                .all(|flag| flag.emphasis == FlagEmphasis::Normal)
        );
        assert_eq!(screen.score, "Score: 0");
        assert_eq!(screen.progress, "Question 1 of 8");
        assert_eq!(screen.alert, AlertVm::None);
        assert_eq!(screen.target, vm.session().target().name());
    }

    #[test]
    fn tapping_correct_flag_opens_round_alert() {
        let mut vm = vm(2);
        let index = vm.session().correct_index();

        vm.dispatch(QuizIntent::Tap(index)).unwrap();
        let screen = vm.screen();

        assert_eq!(
            screen.alert,
            AlertVm::Round {
                title: "Correct".to_string(),
                detail: None,
                score_line: "Your score is 1".to_string(),
            }
        );
        assert_eq!(screen.flags[index].emphasis, FlagEmphasis::Selected);
        let dimmed = screen
            .flags
            .iter()
            .filter(|flag| flag.emphasis == FlagEmphasis::Dimmed)
            .count();
        assert_eq!(dimmed, 2);
    }

    #[test]
    fn tapping_wrong_flag_names_it() {
        let mut vm = vm(2);
        let index = (vm.session().correct_index() + 1) % 3;
        let chosen = vm.session().options()[index];
        let correct = vm.session().target();

        vm.dispatch(QuizIntent::Tap(index)).unwrap();

        match vm.alert() {
            AlertVm::Round {
                title,
                detail,
                score_line,
            } => {
                assert_eq!(title, format!("Wrong! That's the flag of {chosen}"));
                assert_eq!(detail, Some(format!("The correct answer was {correct}")));
                assert_eq!(score_line, "Your score is 0");
            }
            other => panic!("unexpected alert {other:?}"),
        }
    }

    #[test]
    fn continue_closes_alert_and_advances() {
        let mut vm = vm(3);
        vm.dispatch(QuizIntent::Tap(0)).unwrap();
        vm.dispatch(QuizIntent::Continue).unwrap();

        let screen = vm.screen();
        assert_eq!(screen.alert, AlertVm::None);
        assert_eq!(screen.progress, "Question 2 of 8");
    }

    #[test]
    fn rejected_intent_keeps_alert() {
        let mut vm = vm(3);
        vm.dispatch(QuizIntent::Tap(1)).unwrap();
        let before = vm.screen();

        assert_eq!(
            vm.dispatch(QuizIntent::Tap(2)),
            Err(QuizError::AlreadyAnswered)
        );
        assert_eq!(vm.screen(), before);
    }

    #[test]
    fn last_round_shows_game_over_then_reset() {
        let mut vm = vm(4);
        for _ in 0..8 {
            let index = vm.session().correct_index();
            vm.dispatch(QuizIntent::Tap(index)).unwrap();
            vm.dispatch(QuizIntent::Continue).unwrap();
        }

        let screen = vm.screen();
        assert_eq!(screen.progress, "Question 8 of 8");
        assert_eq!(
            screen.alert,
            AlertVm::GameOver {
                final_line: "Your final score is 8 out of 8".to_string(),
                elapsed_line: Some("Finished in 0:00".to_string()),
            }
        );

        vm.dispatch(QuizIntent::Reset).unwrap();
        let screen = vm.screen();
        assert_eq!(screen.alert, AlertVm::None);
        assert_eq!(screen.score, "Score: 0");
        assert_eq!(screen.progress, "Question 1 of 8");
    }

    #[test]
    fn keys_map_to_intents_per_alert() {
        assert_eq!(
            intent_for_key("2", &AlertVm::None, 3),
            Some(QuizIntent::Tap(1))
        );
        assert_eq!(intent_for_key("4", &AlertVm::None, 3), None);
        assert_eq!(intent_for_key("0", &AlertVm::None, 3), None);
        assert_eq!(intent_for_key("Enter", &AlertVm::None, 3), None);

        let round = AlertVm::Round {
            title: "Correct".to_string(),
            detail: None,
            score_line: "Your score is 1".to_string(),
        };
        assert_eq!(
            intent_for_key("Enter", &round, 3),
            Some(QuizIntent::Continue)
        );
        assert_eq!(intent_for_key("1", &round, 3), None);

        let over = AlertVm::GameOver {
            final_line: String::new(),
            elapsed_line: None,
        };
        assert_eq!(intent_for_key(" ", &over, 3), Some(QuizIntent::Reset));
    }
}
