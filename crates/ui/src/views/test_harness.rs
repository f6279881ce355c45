use std::path::PathBuf;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use services::StudyConfig;
use vocab_core::time::fixed_clock;

use crate::context::AppContext;
use crate::views::StudyView;
use crate::views::study::StudyTestHandles;

/// Five-entry color dataset. Entry 3 ships without an image so the optional
/// asset path gets exercised.
pub const DATASET: &str = "\
ID,Main Word,IPA,Part Of Speech,Group,Chinese Translation,Chinese Transliteration,Sentence,Image URL,Audio URL
1,Blue,/bluː/,adjective,colors,蓝色,lán sè,The sky is blue.,blue.png,blue.mp3
2,Red,/rɛd/,adjective,colors,红色,hóng sè,The rose is red.,red.png,red.mp3
3,Green,/ɡriːn/,adjective,colors,绿色,lǜ sè,The grass is green.,,green.mp3
4,Yellow,/ˈjɛloʊ/,adjective,colors,黄色,huáng sè,The sun is yellow.,yellow.png,yellow.mp3
5,Purple,/ˈpɜːrpəl/,adjective,colors,紫色,zǐ sè,The plum is purple.,,purple.mp3
";

#[derive(Props, Clone)]
struct StudyHarnessProps {
    context: AppContext,
    handles: StudyTestHandles,
}

impl PartialEq for StudyHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for StudyHarnessProps {}

#[component]
fn StudyHarness(props: StudyHarnessProps) -> Element {
    use_context_provider(|| props.context.clone());
    use_context_provider(|| props.handles.clone());
    rsx! { StudyView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: StudyTestHandles,
    pub progress_path: PathBuf,
    _dir: tempfile::TempDir,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
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

pub fn setup_study_harness(dataset: &str) -> ViewHarness {
    let dir = tempfile::tempdir().expect("tempdir");
    let data_path = dir.path().join("colors.csv");
    std::fs::write(&data_path, dataset).expect("write dataset");
    let progress_path = dir.path().join("progress.json");
    harness_with_paths(dir, data_path, progress_path)
}

/// Points the dataset at a file that does not exist.
pub fn setup_missing_dataset_harness() -> ViewHarness {
    let dir = tempfile::tempdir().expect("tempdir");
    let data_path = dir.path().join("missing.csv");
    let progress_path = dir.path().join("progress.json");
    harness_with_paths(dir, data_path, progress_path)
}

/// Progress slot that loads as empty but rejects every write: the path is
/// an existing directory.
pub fn setup_unwritable_progress_harness(dataset: &str) -> ViewHarness {
    let dir = tempfile::tempdir().expect("tempdir");
    let data_path = dir.path().join("colors.csv");
    std::fs::write(&data_path, dataset).expect("write dataset");
    let progress_path = dir.path().join("progress-slot");
    std::fs::create_dir(&progress_path).expect("create blocking dir");
    harness_with_paths(dir, data_path, progress_path)
}

fn harness_with_paths(
    dir: tempfile::TempDir,
    data_path: PathBuf,
    progress_path: PathBuf,
) -> ViewHarness {
    let mut config = StudyConfig::new(data_path);
    config.progress_path = Some(progress_path.clone());

    let handles = StudyTestHandles::default();
    let dom = VirtualDom::new_with_props(
        StudyHarness,
        StudyHarnessProps {
            context: AppContext::new(config, fixed_clock()),
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        handles,
        progress_path,
        _dir: dir,
    }
}
