use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use flag_core::model::QuizSettings;
use flag_core::time::fixed_clock;
use services::Clock;

use crate::context::{UiApp, build_app_context};
use crate::vm::{GameScreenVm, QuizIntent};
use crate::views::GameView;
use crate::views::game::{GameBoard, GameTestHandles};

#[derive(Clone)]
struct TestApp {
    settings: QuizSettings,
    seed: u64,
}

impl UiApp for TestApp {
    fn quiz_settings(&self) -> QuizSettings {
        self.settings
    }

    fn seed(&self) -> Option<u64> {
        Some(self.seed)
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

#[derive(Props, Clone)]
struct GameHarnessProps {
    app: Arc<TestApp>,
    handles: GameTestHandles,
}

impl PartialEq for GameHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn GameHarness(props: GameHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { GameView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: GameTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Send an intent through the view's dispatcher and re-render.
    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_game_harness(settings: QuizSettings, seed: u64) -> ViewHarness {
    let handles = GameTestHandles::default();
    let dom = VirtualDom::new_with_props(
        GameHarness,
        GameHarnessProps {
            app: Arc::new(TestApp { settings, seed }),
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}

#[derive(Props, Clone, PartialEq)]
struct BoardHarnessProps {
    screen: GameScreenVm,
}

#[component]
fn BoardHarness(props: BoardHarnessProps) -> Element {
    rsx! {
        GameBoard { screen: props.screen.clone(), on_intent: move |_| {} }
    }
}

/// Render a board for a prepared screen without a live session.
pub fn render_board(screen: GameScreenVm) -> String {
    let mut dom = VirtualDom::new_with_props(BoardHarness, BoardHarnessProps { screen });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
