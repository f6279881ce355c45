use crate::model::ids::EntryId;

//
// ─── RESOURCE REF ──────────────────────────────────────────────────────────────
//

/// Reference to an image or audio asset, as it appears in the dataset.
///
/// A cell holds either a bare file name, resolved against the configured
/// resource directory, or a value with a path separator, used verbatim.
/// An empty cell means the entry carries no such asset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceRef(String);

impl ResourceRef {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the reference against `res_dir`.
    ///
    /// Returns `None` for an empty reference. A value containing a path
    /// separator is returned unchanged; a bare file name is joined onto
    /// `res_dir`.
    #[must_use]
    pub fn resolve(&self, res_dir: &str) -> Option<String> {
        if self.0.is_empty() {
            return None;
        }
        if self.0.contains('/') {
            return Some(self.0.clone());
        }
        Some(format!("{res_dir}/{}", self.0))
    }
}

//
// ─── ENTRY ─────────────────────────────────────────────────────────────────────
//

/// One vocabulary item from the dataset.
///
/// Entries are loaded once at startup, sorted ascending by id, and never
/// mutated afterwards. The identifier is an integer; every other field is
/// free text straight from its dataset column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub word: String,
    pub ipa: String,
    pub part_of_speech: String,
    pub group: String,
    pub translation: String,
    pub transliteration: String,
    pub sentence: String,
    pub image: ResourceRef,
    pub audio: ResourceRef,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
