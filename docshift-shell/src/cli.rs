// Command definition, shared with build.rs for shell completions.

use clap::{Arg, Command, ValueHint};

pub fn build_cli() -> Command {
    Command::new("docshift-shell")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive terminal front end for converting documents")
        .arg(
            Arg::new("dir")
                .help("Directory to start browsing in (default: current directory)")
                .index(1)
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_hint(ValueHint::FilePath)
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_hint(ValueHint::FilePath)
                .help("Write logs to this file (the terminal is reserved for the UI)"),
        )
}
