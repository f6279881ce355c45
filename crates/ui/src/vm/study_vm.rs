use services::{AppServices, SessionError};
use vocab_core::{Entry, Outcome, ProgressRecord};

/// Everything the study view can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudyIntent {
    Flip,
    Next,
    Prev,
    JumpTo(usize),
    Grade(Outcome),
    ToggleEntries,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardSide {
    #[default]
    Front,
    Back,
}

impl CardSide {
    fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }

    /// Value for the card's `data-side` attribute; CSS keys the flip
    /// transform off it.
    #[must_use]
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

/// One row of the entries drawer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryRowVm {
    pub index: usize,
    pub id: String,
    pub word: String,
    pub status: &'static str,
    pub is_current: bool,
}

/// View model for the study screen.
///
/// Navigation snaps the card back to its front face, but the text swap is
/// split from the cursor move: `shown_index` keeps the previous entry's
/// text on the faces until the flip animation has hidden them, then
/// [`StudyVm::sync_shown_text`] catches it up. The image and stripe follow
/// the cursor immediately.
pub struct StudyVm {
    services: AppServices,
    side: CardSide,
    shown_index: usize,
    entries_open: bool,
}

impl StudyVm {
    #[must_use]
    pub fn new(services: AppServices) -> Self {
        let shown_index = services.session().cursor();
        Self {
            services,
            side: CardSide::Front,
            shown_index,
            entries_open: false,
        }
    }

    #[must_use]
    pub fn side(&self) -> CardSide {
        self.side
    }

    pub fn flip(&mut self) {
        self.side = self.side.flipped();
    }

    #[must_use]
    pub fn entries_open(&self) -> bool {
        self.entries_open
    }

    pub fn toggle_entries(&mut self) {
        self.entries_open = !self.entries_open;
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.services.session().cursor()
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.services.session().entry_count()
    }

    /// The entry under the cursor. Drives the image, stripe, and grading.
    #[must_use]
    pub fn current(&self) -> &Entry {
        self.services.session().current()
    }

    /// The entry whose text is on the card faces right now. Lags behind
    /// [`StudyVm::current`] for half a flip after navigation.
    #[must_use]
    pub fn shown(&self) -> &Entry {
        &self.services.session().entries()[self.shown_index]
    }

    #[must_use]
    pub fn text_settled(&self) -> bool {
        self.shown_index == self.services.session().cursor()
    }

    pub fn sync_shown_text(&mut self) {
        self.shown_index = self.services.session().cursor();
    }

    pub fn advance_card(&mut self) {
        self.services.session_mut().advance();
        self.side = CardSide::Front;
    }

    pub fn retreat_card(&mut self) {
        self.services.session_mut().retreat();
        self.side = CardSide::Front;
    }

    pub fn jump_to_card(&mut self, index: usize) {
        self.services.session_mut().jump_to(index);
        self.side = CardSide::Front;
    }

    /// Grades the current entry with the app clock's notion of now.
    /// The cursor stays put; callers advance separately.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Progress` when the grading cannot be
    /// persisted.
    pub fn grade(&mut self, outcome: Outcome) -> Result<ProgressRecord, SessionError> {
        let now = self.services.clock().now();
        self.services.session_mut().grade_current(outcome, now)
    }

    #[must_use]
    pub fn resolved_image(&self) -> Option<String> {
        self.current().image.resolve(self.services.res_dir())
    }

    /// Audio follows the shown text, not the cursor, so the back face
    /// keeps a consistent entry while the card flips home.
    #[must_use]
    pub fn resolved_audio(&self) -> Option<String> {
        self.shown().audio.resolve(self.services.res_dir())
    }

    /// Progress summary for the entry under the cursor.
    #[must_use]
    pub fn status_line(&self) -> String {
        let session = self.services.session();
        session
            .progress()
            .lookup(session.current().id)
            .map_or_else(
                || "Unseen".to_string(),
                |record| format!("{} · due {}", record.last_result, record.due_date),
            )
    }

    #[must_use]
    pub fn entry_rows(&self) -> Vec<EntryRowVm> {
        let session = self.services.session();
        let cursor = session.cursor();
        let progress = session.progress();
        session
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| EntryRowVm {
                index,
                id: entry.id.to_string(),
                word: entry.word.clone(),
                status: progress
                    .lookup(entry.id)
                    .map_or("Unseen", |record| record.last_result.as_str()),
                is_current: index == cursor,
            })
            .collect()
    }
}
