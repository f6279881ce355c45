use dioxus::document::eval;
use dioxus::prelude::*;
use log::{error, warn};

use services::{AppServices, AppServicesError, DatasetError, SessionError};
use vocab_core::Outcome;

use crate::context::AppContext;
use crate::palette::{color_key, stripe_color};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{EntryRowVm, StudyIntent, StudyVm};
use super::scripts::{click_tone_script, outcome_tone_script};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Full card flip length. Face text swaps at the halfway point, while the
/// card is edge-on, so the old entry never shows on the new card.
const FLIP_DURATION_MS: u64 = 600;

fn startup_error(err: &AppServicesError) -> ViewError {
    match err {
        AppServicesError::Dataset(DatasetError::Empty)
        | AppServicesError::Session(SessionError::NoEntries) => ViewError::EmptyDataset,
        AppServicesError::Dataset(_) => ViewError::DatasetUnavailable,
        _ => ViewError::Unknown,
    }
}

/// Catches the face text up to the cursor once the flip has hidden it.
fn settle_text_after_flip(mut vm: Signal<Option<StudyVm>>) {
    spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(FLIP_DURATION_MS / 2)).await;
        if let Some(vm) = vm.write().as_mut() {
            vm.sync_shown_text();
        }
    });
}

/// Owned snapshot of everything the ready markup renders, taken under one
/// read of the view model signal.
struct CardSnapshot {
    counter: String,
    status: String,
    side_attr: &'static str,
    front_class: String,
    inner_style: String,
    id_label: String,
    word: String,
    ipa: String,
    part_of_speech: String,
    group: String,
    translation: String,
    transliteration: String,
    sentence: String,
    image: Option<String>,
    audio: Option<String>,
    entries_open: bool,
    rows: Vec<EntryRowVm>,
}

fn snapshot(vm: &StudyVm) -> CardSnapshot {
    let current = vm.current();
    let stripe = stripe_color(&current.word);
    let front_class = format!("card-face card-front color-{}", color_key(&current.word));
    let inner_style =
        format!("--flip-duration: {FLIP_DURATION_MS}ms; --stripe-color: {stripe};");
    let shown = vm.shown();
    CardSnapshot {
        counter: format!("{} / {}", vm.cursor() + 1, vm.entry_count()),
        status: vm.status_line(),
        side_attr: vm.side().as_attr(),
        front_class,
        inner_style,
        id_label: shown.id.to_string(),
        word: shown.word.clone(),
        ipa: shown.ipa.clone(),
        part_of_speech: shown.part_of_speech.clone(),
        group: shown.group.clone(),
        translation: shown.translation.clone(),
        transliteration: shown.transliteration.clone(),
        sentence: shown.sentence.clone(),
        image: vm.resolved_image(),
        audio: vm.resolved_audio(),
        entries_open: vm.entries_open(),
        rows: vm.entry_rows(),
    }
}

#[component]
pub fn StudyView() -> Element {
    let ctx = use_context::<AppContext>();

    let error = use_signal(|| None::<ViewError>);
    let vm = use_signal(|| None::<StudyVm>);

    let resource = use_resource(move || {
        let ctx = ctx.clone();
        let mut vm = vm;
        let mut error = error;
        async move {
            let services = AppServices::init(ctx.config(), ctx.clock()).map_err(|err| {
                error!("startup failed: {err}");
                startup_error(&err)
            })?;
            vm.set(Some(StudyVm::new(services)));
            error.set(None);
            Ok::<_, ViewError>(())
        }
    });

    let state = view_state_from_resource(resource);

    let dispatch_intent = use_callback(move |intent: StudyIntent| {
        let mut error = error;
        let mut vm = vm;

        match intent {
            StudyIntent::Flip => {
                if let Some(vm) = vm.write().as_mut() {
                    vm.flip();
                }
            }
            StudyIntent::Next => {
                let _ = eval(&click_tone_script());
                if let Some(vm) = vm.write().as_mut() {
                    vm.advance_card();
                }
                settle_text_after_flip(vm);
            }
            StudyIntent::Prev => {
                let _ = eval(&click_tone_script());
                if let Some(vm) = vm.write().as_mut() {
                    vm.retreat_card();
                }
                settle_text_after_flip(vm);
            }
            StudyIntent::JumpTo(index) => {
                if let Some(vm) = vm.write().as_mut() {
                    vm.jump_to_card(index);
                }
                settle_text_after_flip(vm);
            }
            StudyIntent::Grade(outcome) => {
                let _ = eval(&outcome_tone_script(outcome));
                let result = match vm.write().as_mut() {
                    Some(vm) => vm.grade(outcome),
                    None => return,
                };
                match result {
                    Ok(_) => {
                        error.set(None);
                        if let Some(vm) = vm.write().as_mut() {
                            vm.advance_card();
                        }
                        settle_text_after_flip(vm);
                    }
                    Err(err) => {
                        // The in-memory record was rolled back; keep the
                        // cursor on the failed entry so the user can retry.
                        warn!("could not persist grading: {err}");
                        error.set(Some(ViewError::SaveFailed));
                    }
                }
            }
            StudyIntent::ToggleEntries => {
                if let Some(vm) = vm.write().as_mut() {
                    vm.toggle_entries();
                }
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<StudyTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let vm_guard = vm.read();
    let card = vm_guard.as_ref().map(snapshot);
    let banner = *error.read();

    rsx! {
        section { class: "study",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "study-loading", "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "fatal-panel",
                        h2 { "Unable to start" }
                        p { "{err.message()}" }
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(card) = card {
                        header { class: "study-header",
                            button {
                                class: "study-header__toggle",
                                id: "toggle-entries",
                                r#type: "button",
                                onclick: move |_| dispatch_intent.call(StudyIntent::ToggleEntries),
                                "☰"
                            }
                            h1 { class: "study-header__title", "Vocab Cards" }
                            span { class: "study-header__counter", "{card.counter}" }
                        }
                        if let Some(err) = banner {
                            p { class: "study-banner", "{err.message()}" }
                        }
                        div { class: "card",
                            div {
                                class: "card-inner",
                                id: "card-inner",
                                "data-side": card.side_attr,
                                style: "{card.inner_style}",
                                div {
                                    class: "{card.front_class}",
                                    onclick: move |_| dispatch_intent.call(StudyIntent::Flip),
                                    span { class: "card-id", "{card.id_label}" }
                                    h2 { class: "card-word", "{card.word}" }
                                    p { class: "card-ipa", "{card.ipa}" }
                                    p { class: "card-pos", "{card.part_of_speech}" }
                                    if let Some(image) = card.image.as_deref() {
                                        img {
                                            class: "card-image",
                                            src: "{image}",
                                            alt: "{card.word}",
                                            onclick: move |evt| evt.stop_propagation(),
                                        }
                                    }
                                }
                                div {
                                    class: "card-face card-back",
                                    onclick: move |_| dispatch_intent.call(StudyIntent::Flip),
                                    p { class: "card-translation", "{card.translation}" }
                                    p { class: "card-transliteration", "{card.transliteration}" }
                                    p { class: "card-sentence", "{card.sentence}" }
                                    p { class: "card-group", "{card.group}" }
                                    if let Some(audio) = card.audio.as_deref() {
                                        audio {
                                            class: "card-audio",
                                            controls: true,
                                            src: "{audio}",
                                            onclick: move |evt| evt.stop_propagation(),
                                        }
                                    }
                                }
                            }
                        }
                        p { class: "study-status", "{card.status}" }
                        div { class: "study-controls",
                            button {
                                class: "study-nav",
                                id: "btn-back",
                                r#type: "button",
                                onclick: move |_| dispatch_intent.call(StudyIntent::Prev),
                                "Back"
                            }
                            GradeButton { label: "Again", outcome: Outcome::Again, on_intent: dispatch_intent }
                            GradeButton { label: "Good", outcome: Outcome::Good, on_intent: dispatch_intent }
                            GradeButton { label: "Easy", outcome: Outcome::Easy, on_intent: dispatch_intent }
                            button {
                                class: "study-nav",
                                id: "btn-skip",
                                r#type: "button",
                                onclick: move |_| dispatch_intent.call(StudyIntent::Next),
                                "Skip"
                            }
                        }
                        if card.entries_open {
                            section { class: "entries", id: "entries",
                                table { class: "entries-table",
                                    thead {
                                        tr {
                                            th { "ID" }
                                            th { "Word" }
                                            th { "Status" }
                                        }
                                    }
                                    tbody { id: "entries-body",
                                        for row in card.rows {
                                            tr {
                                                key: "{row.id}",
                                                class: if row.is_current {
                                                    "entries-row row-highlight"
                                                } else {
                                                    "entries-row"
                                                },
                                                onclick: move |_| dispatch_intent.call(StudyIntent::JumpTo(row.index)),
                                                td { "{row.id}" }
                                                td { "{row.word}" }
                                                td { "{row.status}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    } else {
                        p { "No entries available." }
                    }
                },
            }
        }
    }
}

#[component]
fn GradeButton(
    label: &'static str,
    outcome: Outcome,
    on_intent: EventHandler<StudyIntent>,
) -> Element {
    let (class, id) = match outcome {
        Outcome::Again => ("study-grade study-grade--again", "btn-again"),
        Outcome::Good => ("study-grade study-grade--good", "btn-good"),
        Outcome::Easy => ("study-grade study-grade--easy", "btn-easy"),
    };
    rsx! {
        button {
            class: "{class}",
            id: "{id}",
            r#type: "button",
            onclick: move |_| on_intent.call(StudyIntent::Grade(outcome)),
            "{label}"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct StudyTestHandles {
    dispatch: Rc<RefCell<Option<Callback<StudyIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<StudyVm>>>>>,
}

#[cfg(test)]
impl StudyTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<StudyIntent>, vm: Signal<Option<StudyVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<StudyIntent> {
        (*self.dispatch.borrow()).expect("study dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<StudyVm>> {
        (*self.vm.borrow()).expect("study vm registered")
    }
}
