use chrono::Days;
use vocab_core::Outcome;
use vocab_core::time::fixed_now;

use crate::vm::StudyIntent;

use super::test_harness::{
    DATASET, drive_dom, setup_missing_dataset_harness, setup_study_harness,
    setup_unwritable_progress_harness,
};

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_renders_first_card() {
    let mut harness = setup_study_harness(DATASET);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Blue"), "missing word in {html}");
    assert!(html.contains("/bluː/"), "missing ipa in {html}");
    assert!(html.contains(r#"data-side="front""#), "missing side in {html}");
    assert!(html.contains("1 / 5"), "missing counter in {html}");
    assert!(html.contains("Unseen"), "missing status in {html}");
    assert!(html.contains("res/blue.png"), "missing image in {html}");
    assert!(html.contains("color-blue"), "missing color class in {html}");
    assert!(
        html.contains("--stripe-color: #3b82f6"),
        "missing stripe in {html}"
    );
    for label in ["Back", "Again", "Good", "Easy", "Skip"] {
        assert!(html.contains(label), "missing {label} button in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_renders_error_panel_without_dataset() {
    let mut harness = setup_missing_dataset_harness();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Unable to start"), "missing panel in {html}");
    assert!(
        html.contains("Could not read the vocabulary file."),
        "missing message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn flip_intent_toggles_card_side() {
    let mut harness = setup_study_harness(DATASET);
    harness.rebuild();
    let dispatch = harness.handles.dispatch();

    dispatch.call(StudyIntent::Flip);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains(r#"data-side="back""#), "missing back side in {html}");

    dispatch.call(StudyIntent::Flip);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains(r#"data-side="front""#), "missing front side in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn navigation_moves_cursor_but_defers_face_text() {
    let mut harness = setup_study_harness(DATASET);
    harness.rebuild();
    let dispatch = harness.handles.dispatch();

    dispatch.call(StudyIntent::Flip);
    drive_dom(&mut harness.dom);
    dispatch.call(StudyIntent::Next);
    drive_dom(&mut harness.dom);
    let html = harness.render();

    // Navigation snaps back to the front and retargets the cursor-driven
    // parts right away.
    assert!(html.contains(r#"data-side="front""#), "missing front side in {html}");
    assert!(html.contains("2 / 5"), "missing counter in {html}");
    assert!(html.contains("color-red"), "missing color class in {html}");
    assert!(html.contains("res/red.png"), "missing image in {html}");
    // The face text still shows the previous entry until the half-flip
    // timer fires.
    assert!(
        html.contains(r#"<h2 class="card-word">Blue</h2>"#),
        "face text swapped early in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn grading_updates_drawer_status_and_progress_file() {
    let mut harness = setup_study_harness(DATASET);
    harness.rebuild();
    let dispatch = harness.handles.dispatch();

    dispatch.call(StudyIntent::ToggleEntries);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("entries-table"), "missing drawer in {html}");
    assert!(html.contains("row-highlight"), "missing highlight in {html}");
    assert!(html.contains("<td>Unseen</td>"), "missing unseen rows in {html}");

    dispatch.call(StudyIntent::Grade(Outcome::Good));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("<td>Good</td>"), "missing graded row in {html}");

    let cursor = harness.handles.vm().read().as_ref().map(|vm| vm.cursor());
    assert_eq!(cursor, Some(1), "grading should advance to the next card");

    let due = fixed_now().date_naive() + Days::new(3);
    let saved = std::fs::read_to_string(&harness.progress_path).expect("progress file");
    assert!(saved.contains(r#""lastResult": "Good""#), "missing outcome in {saved}");
    assert!(saved.contains(&due.to_string()), "missing due date in {saved}");

    // Jumping back to the graded entry surfaces its record in the status
    // line.
    dispatch.call(StudyIntent::JumpTo(0));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(
        html.contains(&format!("Good · due {due}")),
        "missing status line in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn failed_save_shows_banner_and_keeps_cursor() {
    let mut harness = setup_unwritable_progress_harness(DATASET);
    harness.rebuild();
    let dispatch = harness.handles.dispatch();

    dispatch.call(StudyIntent::Grade(Outcome::Easy));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(
        html.contains("Could not save your progress."),
        "missing banner in {html}"
    );

    let cursor = harness.handles.vm().read().as_ref().map(|vm| vm.cursor());
    assert_eq!(cursor, Some(0), "failed grading must not advance");

    // The rolled-back record never reaches the drawer.
    dispatch.call(StudyIntent::ToggleEntries);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(!html.contains("<td>Easy</td>"), "rolled-back row in {html}");
}
