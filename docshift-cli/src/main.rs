//! Command-line interface for docshift
//! Converts a single document between plain text, DOCX, PDF and Markdown.
//!
//! Usage:
//!   docshift convert `<path>` --to `<pdf|txt|docx>` [--output `<path>`] [--no-universal]
//!   docshift formats                                   - List the supported conversions
//!
//! Global flags: `--config <file>`, `-v` (repeatable), `-q`.

mod cli;

use clap::ArgMatches;
use docshift_babel::{ConversionRequest, Converter, DocumentKind, Route, Strategy};
use docshift_config::{DocshiftConfig, Loader};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

fn main() {
    let matches = cli::build_cli().get_matches();

    init_logging(log_level(&matches));

    match matches.subcommand() {
        Some(("convert", sub)) => {
            let config = load_config(&matches, sub.get_flag("no-universal"));
            handle_convert_command(sub, config);
        }
        Some(("formats", _)) => handle_formats_command(),
        _ => unreachable!("a subcommand is required"),
    }
}

/// Map `-q` / `-v` to a level filter. Warnings are shown by default.
fn log_level(matches: &ArgMatches) -> LevelFilter {
    if matches.get_flag("quiet") {
        return LevelFilter::ERROR;
    }
    match matches.get_count("verbose") {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Logs go to stderr so stdout only carries results.
fn init_logging(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(matches: &ArgMatches, no_universal: bool) -> DocshiftConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if no_universal {
        loader = loader
            .set_override("universal.enabled", false)
            .unwrap_or_else(|e| fail(e));
    }
    loader.build().unwrap_or_else(|e| fail(e))
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches, config: DocshiftConfig) {
    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let target: DocumentKind = matches
        .get_one::<String>("to")
        .expect("--to is a required argument")
        .parse()
        .unwrap_or_else(|e| fail(e));

    let mut request = ConversionRequest::for_source(path, target);
    if let Some(output) = matches.get_one::<String>("output") {
        request = request.with_destination(PathBuf::from(output));
    }

    let converter = Converter::new(config.into());
    let outcome = converter.convert(&request).unwrap_or_else(|e| fail(e));

    if outcome.strategy == Strategy::Universal {
        tracing::info!("converted with {}", converter_name(&converter));
    }
    println!("{}", outcome.destination.display());
}

fn converter_name(converter: &Converter) -> &str {
    converter.universal().map(|u| u.name()).unwrap_or("built-in")
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Supported conversions:\n");
    for route in Route::ALL {
        println!(
            "  {:<12} {} to {}",
            route.to_string(),
            route.source().label(),
            route.target().label()
        );
    }
}

fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}
