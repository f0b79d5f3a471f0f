use dioxus::prelude::*;

#[component]
pub fn RoundAlert(
    title: String,
    detail: Option<String>,
    score_line: String,
    on_continue: Callback<()>,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            div { class: "modal", role: "alertdialog",
                h3 { class: "modal-title", "{title}" }
                if let Some(detail) = detail.as_ref() {
                    p { class: "modal-detail", "{detail}" }
                }
                p { class: "modal-body", "{score_line}" }
                div { class: "modal-actions",
                    button {
                        id: "round-continue",
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_continue.call(()),
                        "Continue"
                    }
                }
            }
        }
    }
}

#[component]
pub fn GameOverAlert(
    final_line: String,
    elapsed_line: Option<String>,
    on_reset: Callback<()>,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            div { class: "modal", role: "alertdialog",
                h3 { class: "modal-title", "Game over" }
                p { class: "modal-body", "{final_line}" }
                if let Some(elapsed) = elapsed_line.as_ref() {
                    p { class: "modal-detail", "{elapsed}" }
                }
                div { class: "modal-actions",
                    button {
                        id: "game-reset",
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_reset.call(()),
                        "Press to reset game"
                    }
                }
            }
        }
    }
}
