use flag_core::model::QuizSettings;
use flag_core::time::fixed_clock;
use services::QuizSession;

use crate::vm::{QuizIntent, QuizVm};

use super::test_harness::{render_board, setup_game_harness};

fn seeded_vm(seed: u64) -> QuizVm {
    QuizVm::new(QuizSession::with_seed(
        QuizSettings::default(),
        fixed_clock(),
        seed,
    ))
}

#[test]
fn game_view_smoke_renders_prompt_and_flags() {
    let mut harness = setup_game_harness(QuizSettings::default(), 5);
    harness.rebuild();
    let html = harness.render();

    let expected = seeded_vm(5).session().target().to_string();
    assert!(html.contains("Guess the Flag"), "missing title in {html}");
    assert!(html.contains("Tap the flag of"), "missing prompt in {html}");
    assert!(html.contains(&expected), "missing {expected} in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Question 1 of 8"), "missing progress in {html}");
    assert_eq!(html.matches("flag-button").count(), 3, "expected 3 flags in {html}");
    assert!(!html.contains("Continue"), "unexpected alert in {html}");
}

#[test]
fn game_view_smoke_labels_each_flag() {
    let mut harness = setup_game_harness(QuizSettings::default(), 6);
    harness.rebuild();
    let html = harness.render();

    let vm = seeded_vm(6);
    for country in vm.session().options() {
        let label = country.accessibility_label();
        assert!(html.contains(label), "missing label {label} in {html}");
    }
}

#[test]
fn game_view_smoke_tap_shows_round_alert() {
    let mut harness = setup_game_harness(QuizSettings::default(), 7);
    harness.rebuild();
    let correct = seeded_vm(7).session().correct_index();

    harness.dispatch(QuizIntent::Tap(correct));
    let html = harness.render();

    assert!(html.contains("Correct"), "missing verdict in {html}");
    assert!(html.contains("Your score is 1"), "missing score line in {html}");
    assert!(html.contains("Continue"), "missing continue in {html}");
    assert!(html.contains("flag-button--selected"), "missing selection in {html}");

    harness.dispatch(QuizIntent::Continue);
    let html = harness.render();
    assert!(html.contains("Question 2 of 8"), "missing progress in {html}");
    assert!(!html.contains("Your score is"), "alert still open in {html}");
}

#[test]
fn game_view_smoke_plays_to_game_over_and_resets() {
    let settings = QuizSettings::new(2, 3).unwrap();
    let mut harness = setup_game_harness(settings, 8);
    harness.rebuild();

    for _ in 0..2 {
        harness.dispatch(QuizIntent::Tap(0));
        harness.dispatch(QuizIntent::Continue);
    }
    let html = harness.render();
    assert!(html.contains("Game over"), "missing game over in {html}");
    assert!(html.contains("out of 2"), "missing final score in {html}");
    assert!(html.contains("Press to reset game"), "missing reset in {html}");

    harness.dispatch(QuizIntent::Reset);
    let html = harness.render();
    assert!(!html.contains("Game over"), "game over still open in {html}");
    assert!(html.contains("Score: 0"), "score not reset in {html}");
    assert!(html.contains("Question 1 of 2"), "progress not reset in {html}");
}

#[test]
fn board_smoke_renders_wrong_answer_detail() {
    let mut vm = seeded_vm(9);
    let wrong = (vm.session().correct_index() + 1) % 3;
    let correct = vm.session().target();
    vm.dispatch(QuizIntent::Tap(wrong)).unwrap();

    let html = render_board(vm.screen());

    assert!(html.contains("Wrong! That"), "missing verdict in {html}");
    let detail = format!("The correct answer was {correct}");
    assert!(html.contains(&detail), "missing {detail} in {html}");
    assert_eq!(html.matches("flag-button--dimmed").count(), 2, "dimming in {html}");
}
