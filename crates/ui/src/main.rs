#![allow(non_snake_case)]

mod app;
mod context;
mod palette;
mod views;
mod vm;

use services::{Clock, StudyConfig};

// Dev shell: runs the study view against the repo-local sample dataset.
// The real composition root with argument parsing lives in `crates/app`.
fn main() {
    let context = context::AppContext::new(
        StudyConfig::new("data/colors.csv"),
        Clock::local_clock(),
    );
    dioxus::LaunchBuilder::desktop()
        .with_context(context)
        .launch(app::App);
}
