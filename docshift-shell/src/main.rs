//! Standalone binary for the docshift terminal shell.
//! Usage:
//!   docshift-shell [dir] [--config <file>] [--log-file <file>]

mod cli;
mod shell;

use docshift_babel::Converter;
use docshift_config::Loader;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;

fn main() {
    let matches = cli::build_cli().get_matches();

    if let Some(path) = matches.get_one::<String>("log-file") {
        match File::create(path) {
            Ok(file) => init_file_logging(file),
            Err(err) => fail(format!("{path}: {err}")),
        }
    }

    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    let config = loader.build().unwrap_or_else(|e| fail(e));

    let start_dir = matches
        .get_one::<String>("dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let converter = Converter::new(config.into());

    if let Err(err) = shell::shell::run_shell(start_dir, converter) {
        fail(err);
    }
}

/// The terminal belongs to the UI, so logs only go to an explicit file.
fn init_file_logging(file: File) {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
}

fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}
