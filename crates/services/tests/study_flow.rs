use std::fs;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use services::{AppServices, ProgressService, StudyConfig, StudySession};
use storage::repository::{MemoryProgressRepository, ProgressRepository};
use vocab_core::model::{Entry, EntryId, Outcome, ResourceRef};
use vocab_core::time::fixed_clock;

fn entry(id: u64, word: &str) -> Entry {
    Entry {
        id: EntryId::new(id),
        word: word.to_string(),
        ipa: format!("/{word}/"),
        part_of_speech: "adjective".to_string(),
        group: word.to_string(),
        translation: String::new(),
        transliteration: String::new(),
        sentence: format!("A {word} thing."),
        image: ResourceRef::default(),
        audio: ResourceRef::new(format!("{word}.mp3")),
    }
}

fn five_entries() -> Vec<Entry> {
    ["blue", "yellow", "red", "green", "purple"]
        .iter()
        .enumerate()
        .map(|(i, word)| entry(i as u64 + 1, word))
        .collect()
}

fn instant(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

#[test]
fn navigate_then_grade_leaves_cursor_and_records_due_date() {
    let repo = Arc::new(MemoryProgressRepository::new());
    let progress = ProgressService::load(Arc::clone(&repo) as Arc<dyn ProgressRepository>).unwrap();
    let mut session = StudySession::new(five_entries(), progress).unwrap();

    session.advance();
    session.advance();
    session.retreat();
    let record = session
        .grade_current(Outcome::Good, instant("2024-01-01T09:00:00Z"))
        .unwrap();

    assert_eq!(session.cursor(), 1);
    assert_eq!(record.last_result, Outcome::Good);
    assert_eq!(record.due_date.to_string(), "2024-01-04");

    // the graded entry is the one under the cursor, and the store holds
    // exactly that one record
    let graded_id = session.current().id;
    assert_eq!(graded_id, EntryId::new(2));
    assert_eq!(session.progress().lookup(graded_id), Some(&record));
    assert_eq!(session.progress().len(), 1);
}

#[test]
fn gradings_survive_a_service_reload() {
    let repo = Arc::new(MemoryProgressRepository::new());

    {
        let progress =
            ProgressService::load(Arc::clone(&repo) as Arc<dyn ProgressRepository>).unwrap();
        let mut session = StudySession::new(five_entries(), progress).unwrap();
        session
            .grade_current(Outcome::Easy, instant("2024-01-01T09:00:00Z"))
            .unwrap();
        session.advance();
        session
            .grade_current(Outcome::Again, instant("2024-01-01T23:00:00Z"))
            .unwrap();
    }

    let progress = ProgressService::load(repo as Arc<dyn ProgressRepository>).unwrap();
    let session = StudySession::new(five_entries(), progress).unwrap();

    let first = session.progress().lookup(EntryId::new(1)).unwrap();
    assert_eq!(first.last_result, Outcome::Easy);
    assert_eq!(first.due_date.to_string(), "2024-01-08");

    let second = session.progress().lookup(EntryId::new(2)).unwrap();
    assert_eq!(second.last_result, Outcome::Again);
    assert_eq!(second.due_date.to_string(), "2024-01-02");

    assert_eq!(session.progress().lookup(EntryId::new(3)), None);
}

#[test]
fn regrading_overwrites_across_reloads() {
    let repo = Arc::new(MemoryProgressRepository::new());
    let day = instant("2024-03-15T12:00:00Z");

    let progress = ProgressService::load(Arc::clone(&repo) as Arc<dyn ProgressRepository>).unwrap();
    let mut session = StudySession::new(five_entries(), progress).unwrap();
    session.jump_to(2);
    session.grade_current(Outcome::Easy, day).unwrap();
    session.grade_current(Outcome::Again, day).unwrap();

    let reloaded = ProgressService::load(repo as Arc<dyn ProgressRepository>).unwrap();
    let record = reloaded.lookup(EntryId::new(3)).unwrap();
    assert_eq!(record.last_result, Outcome::Again);
    assert_eq!(record.due_date.to_string(), "2024-03-16");
    assert_eq!(reloaded.len(), 1);
}

const SAMPLE_CSV: &str = "\
ID,Main Word,IPA,Part Of Speech,Group,Chinese Translation,Chinese Transliteration,Sentence,Image URL,Audio URL
3,red,/rɛd/,adjective,red,红色,hóngsè,Roses are red.,,red.mp3
1,blue,/bluː/,adjective,blue,蓝色,lánsè,The sky is blue.,,blue.mp3
2,yellow,/ˈjɛloʊ/,adjective,yellow,黄色,huángsè,The sun looks yellow.,,yellow.mp3
";

#[test]
fn app_services_bootstrap_from_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data_path = dir.path().join("words.csv");
    fs::write(&data_path, SAMPLE_CSV).unwrap();

    let mut config = StudyConfig::new(&data_path);
    config.progress_path = Some(dir.path().join("progress.json"));
    config.res_dir = "res".to_string();

    let mut services = AppServices::init(&config, fixed_clock()).unwrap();
    assert!(services.clock().is_fixed());
    assert_eq!(services.res_dir(), "res");

    let session = services.session();
    assert_eq!(session.entry_count(), 3);
    assert_eq!(session.current().id, EntryId::new(1));
    assert_eq!(session.current().word, "blue");

    // grade through the session and reopen the whole stack
    let now = services.clock().now();
    services.session_mut().grade_current(Outcome::Good, now).unwrap();

    let reopened = AppServices::init(&config, fixed_clock()).unwrap();
    let record = reopened
        .session()
        .progress()
        .lookup(EntryId::new(1))
        .unwrap()
        .to_owned();
    assert_eq!(record.last_result, Outcome::Good);
}

#[test]
fn bootstrap_fails_without_a_dataset() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = StudyConfig::new(dir.path().join("absent.csv"));
    config.progress_path = Some(dir.path().join("progress.json"));
    assert!(AppServices::init(&config, fixed_clock()).is_err());
}
