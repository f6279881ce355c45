use csv::ReaderBuilder;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use vocab_core::model::{Entry, EntryId, ResourceRef};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while loading the entry dataset.
///
/// These are fatal: the app has nothing to show without a dataset.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("could not read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not decode dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset has no entries")]
    Empty,

    #[error("duplicate entry id {0}")]
    DuplicateId(u64),
}

//
// ─── ROW DECODING ─────────────────────────────────────────────────────────────
//

/// One dataset row as it appears on disk. Headers are matched exactly; the
/// id is decoded as an integer, everything else as text. String columns
/// default to empty so short rows still decode.
#[derive(Debug, Deserialize)]
struct EntryRow {
    #[serde(rename = "ID")]
    id: u64,
    #[serde(rename = "Main Word", default)]
    word: String,
    #[serde(rename = "IPA", default)]
    ipa: String,
    #[serde(rename = "Part Of Speech", default)]
    part_of_speech: String,
    #[serde(rename = "Group", default)]
    group: String,
    #[serde(rename = "Chinese Translation", default)]
    translation: String,
    #[serde(rename = "Chinese Transliteration", default)]
    transliteration: String,
    #[serde(rename = "Sentence", default)]
    sentence: String,
    #[serde(rename = "Image URL", default)]
    image: String,
    #[serde(rename = "Audio URL", default)]
    audio: String,
}

impl EntryRow {
    fn into_entry(self) -> Entry {
        Entry {
            id: EntryId::new(self.id),
            word: self.word,
            ipa: self.ipa,
            part_of_speech: self.part_of_speech,
            group: self.group,
            translation: self.translation,
            transliteration: self.transliteration,
            sentence: self.sentence,
            image: ResourceRef::new(self.image),
            audio: ResourceRef::new(self.audio),
        }
    }
}

//
// ─── LOADING ──────────────────────────────────────────────────────────────────
//

/// Loads and decodes the dataset file at `path`.
///
/// # Errors
///
/// Returns `DatasetError` if the file cannot be read or decoded, holds no
/// entries, or repeats an id.
pub fn load_entries(path: impl AsRef<Path>) -> Result<Vec<Entry>, DatasetError> {
    let file = File::open(path)?;
    read_entries(file)
}

/// Decodes entries from any reader and orders them ascending by id.
///
/// # Errors
///
/// Same conditions as [`load_entries`], minus the file open.
pub fn read_entries(reader: impl Read) -> Result<Vec<Entry>, DatasetError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    let mut seen = BTreeSet::new();
    for row in csv_reader.deserialize::<EntryRow>() {
        let row = row?;
        if !seen.insert(row.id) {
            return Err(DatasetError::DuplicateId(row.id));
        }
        entries.push(row.into_entry());
    }
    if entries.is_empty() {
        return Err(DatasetError::Empty);
    }
    entries.sort_by_key(|entry| entry.id);
    Ok(entries)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
