use quiz_core::model::QuizSettings;
use services::AppEvent;

use super::test_harness::{
    setup_driven_harness, setup_page_harness, setup_page_harness_with_settings,
};

fn start(quiz: &str) -> AppEvent {
    AppEvent::StartQuiz(quiz.to_string())
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_is_the_default_panel() {
    let mut harness = setup_page_harness("", Vec::new());
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains(r#"class="page active" data-route="welcome""#),
        "welcome not active in {html}"
    );
    assert!(html.contains("Start a quiz"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn choose_quiz_lists_catalog() {
    let mut harness = setup_page_harness("#choose-quiz", Vec::new());
    harness.rebuild();
    let html = harness.render();
    for quiz in ["gk", "web", "science"] {
        let tag = format!(r#"data-quiz="{quiz}""#);
        assert!(html.contains(&tag), "missing {tag} in {html}");
    }
    assert!(html.contains("General Knowledge"), "missing title in {html}");
    assert!(html.contains("3 questions"), "missing count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_panel_renders_first_question() {
    let mut harness = setup_page_harness("", vec![start("gk")]);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains(r#"class="page active" data-route="quiz""#),
        "quiz not active in {html}"
    );
    assert!(html.contains("What is the capital of France?"), "missing prompt in {html}");
    assert!(html.contains("00:30"), "missing timer in {html}");
    assert!(html.contains(r#"data-index="3""#), "missing option index in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn selected_option_is_marked() {
    let mut harness = setup_page_harness("", vec![start("gk"), AppEvent::SelectOption(1)]);
    harness.rebuild();
    let html = harness.render();
    assert_eq!(html.matches("option selected").count(), 1, "in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn confirm_without_selection_shakes_options() {
    let mut harness = setup_page_harness("", vec![start("gk"), AppEvent::Confirm]);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("options shake shake-odd"), "missing shake in {html}");
    assert!(html.contains("What is the capital of France?"), "question changed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_panel_shows_summary() {
    let events = vec![
        start("gk"),
        AppEvent::SelectOption(0),
        AppEvent::Confirm,
        AppEvent::FeedbackElapsed,
        AppEvent::SelectOption(1),
        AppEvent::Confirm,
        AppEvent::FeedbackElapsed,
        AppEvent::SelectOption(0),
        AppEvent::Confirm,
    ];
    let mut harness = setup_page_harness("", events);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains(r#"class="page active" data-route="result""#),
        "result not active in {html}"
    );
    assert!(
        html.contains("You answered 2 out of 3 correctly."),
        "missing summary in {html}"
    );
    assert!(html.contains("No quiz in progress."), "stale quiz panel in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_quiz_shows_notice() {
    let mut harness = setup_page_harness("#choose-quiz", vec![start("nope")]);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Quiz not found"), "missing notice in {html}");
    assert!(
        html.contains(r#"class="page active" data-route="choose-quiz""#),
        "panel changed in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn stale_quiz_bookmark_lands_on_welcome() {
    let mut harness = setup_page_harness("#quiz", Vec::new());
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains(r#"class="page active" data-route="welcome""#),
        "welcome not active in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_reports_last_result() {
    let events = vec![
        start("web"),
        AppEvent::SelectOption(1),
        AppEvent::Confirm,
        AppEvent::FeedbackElapsed,
        AppEvent::SelectOption(0),
        AppEvent::Confirm,
        AppEvent::Navigate("dashboard".to_string()),
    ];
    let mut harness = setup_page_harness("", events);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Web Development: 1/2"), "missing result in {html}");
    assert!(html.contains("Quiz finished"), "missing status in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_states_configured_question_time() {
    let settings = QuizSettings::default().with_question_secs(15).unwrap();
    let mut harness = setup_page_harness_with_settings("", settings, vec![start("gk")]);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Each question gives you 15 seconds."),
        "missing duration in {html}"
    );
    assert!(html.contains("00:15"), "timer ignores settings in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn navigation_parks_focus_for_after_render() {
    let mut harness = setup_driven_harness("", vec![AppEvent::Navigate("choose-quiz".to_string())]);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains(r#"<output id="pending-focus">start-gk</output>"#),
        "focus target not parked in {html}"
    );
    assert!(
        html.contains(r#"class="page active" data-route="choose-quiz""#),
        "choose-quiz not active in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn starting_a_quiz_parks_focus_on_first_option() {
    let mut harness = setup_driven_harness("#choose-quiz", vec![start("gk")]);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains(r#"<output id="pending-focus">option-0</output>"#),
        "focus target not parked in {html}"
    );
    assert!(html.contains(r#"id="option-0""#), "first option missing in {html}");
}
