mod study_vm;

pub use study_vm::{CardSide, EntryRowVm, StudyIntent, StudyVm};
