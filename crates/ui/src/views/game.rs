use dioxus::prelude::*;
use tracing::warn;

use crate::context::AppContext;
use crate::vm::{AlertVm, GameScreenVm, QuizIntent, QuizVm, intent_for_key};

use super::alerts::{GameOverAlert, RoundAlert};
use super::flag::FlagImage;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(|| QuizVm::new(ctx.start_quiz()));

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let result = vm.write().dispatch(intent);
        if let Err(err) = result {
            warn!(target: "ui", %err, ?intent, "quiz intent rejected");
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<GameTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    let screen = vm.read().screen();

    rsx! {
        GameBoard { screen, on_intent: dispatch_intent }
    }
}

#[component]
pub fn GameBoard(screen: GameScreenVm, on_intent: Callback<QuizIntent>) -> Element {
    let alert_open = screen.alert.is_open();
    let options = screen.flags.len();
    let key_alert = screen.alert.clone();

    let flag_buttons = screen.flags.iter().map(|flag| {
        let index = flag.index;
        let number = index + 1;
        rsx! {
            button {
                key: "{index}",
                id: "flag-{number}",
                class: "{flag.emphasis.class()}",
                r#type: "button",
                aria_label: "{flag.label}",
                disabled: alert_open,
                onclick: move |_| on_intent.call(QuizIntent::Tap(index)),
                FlagImage { flag: flag.image.clone() }
            }
        }
    });

    rsx! {
        div {
            class: "game",
            tabindex: "0",
            onkeydown: move |evt: KeyboardEvent| {
                let key = evt.data.key().to_string();
                if let Some(intent) = intent_for_key(&key, &key_alert, options) {
                    evt.prevent_default();
                    on_intent.call(intent);
                }
            },
            h1 { class: "game-title", "Guess the Flag" }
            section { class: "game-card",
                div { class: "game-prompt",
                    p { class: "game-prompt-label", "Tap the flag of" }
                    p { class: "game-prompt-target", "{screen.target}" }
                }
                div { class: "game-flags", {flag_buttons} }
            }
            p { class: "game-progress", "{screen.progress}" }
            p { class: "game-score", "{screen.score}" }

            match screen.alert.clone() {
                AlertVm::None => rsx! {},
                AlertVm::Round { title, detail, score_line } => rsx! {
                    RoundAlert {
                        title,
                        detail,
                        score_line,
                        on_continue: move |()| on_intent.call(QuizIntent::Continue),
                    }
                },
                AlertVm::GameOver { final_line, elapsed_line } => rsx! {
                    GameOverAlert {
                        final_line,
                        elapsed_line,
                        on_reset: move |()| on_intent.call(QuizIntent::Reset),
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct GameTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl GameTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("game dispatch registered")
    }
}
