use std::fmt;
use std::path::PathBuf;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use log::info;

use services::{Clock, StudyConfig};
use storage::json::default_progress_path;
use ui::{App, AppContext};

const DEFAULT_DATA_PATH: &str = "data/colors.csv";
const DEFAULT_RES_DIR: &str = "res";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    EmptyValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::EmptyValue { flag } => write!(f, "{flag} requires a non-empty value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyValue { flag });
    }
    Ok(value)
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--data <csv>] [--res-dir <dir>] [--progress <json>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --data {DEFAULT_DATA_PATH}");
    eprintln!("  --res-dir {DEFAULT_RES_DIR}");
    eprintln!("  --progress {}", default_progress_path().display());
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  VOCAB_DATA, VOCAB_RES_DIR, VOCAB_PROGRESS");
}

fn parse_args(args: &mut impl Iterator<Item = String>) -> Result<StudyConfig, ArgsError> {
    let mut data_path = std::env::var("VOCAB_DATA")
        .ok()
        .map_or_else(|| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from);
    let mut res_dir = std::env::var("VOCAB_RES_DIR")
        .ok()
        .unwrap_or_else(|| DEFAULT_RES_DIR.to_string());
    let mut progress_path = std::env::var("VOCAB_PROGRESS").ok().map(PathBuf::from);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                data_path = PathBuf::from(require_value(args, "--data")?);
            }
            "--res-dir" => {
                res_dir = require_value(args, "--res-dir")?;
            }
            "--progress" => {
                progress_path = Some(PathBuf::from(require_value(args, "--progress")?));
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(StudyConfig {
        data_path,
        res_dir,
        progress_path,
    })
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match parse_args(&mut args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            std::process::exit(2);
        }
    };

    let progress_display = config.progress_path.as_ref().map_or_else(
        || default_progress_path().display().to_string(),
        |path| path.display().to_string(),
    );
    info!(
        "starting vocab cards: data={}, res_dir={}, progress={progress_display}",
        config.data_path.display(),
        config.res_dir,
    );

    let context = AppContext::new(config, Clock::local_clock());

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Vocab Cards")
            .with_inner_size(LogicalSize::new(520.0, 780.0))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}
