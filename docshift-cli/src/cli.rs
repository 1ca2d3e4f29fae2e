// Command definition, shared with build.rs for shell completions. Only clap may be
// referenced from this file.

use clap::{Arg, ArgAction, Command, ValueHint};

pub fn build_cli() -> Command {
    Command::new("docshift")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert documents between plain text, DOCX, PDF and Markdown")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_hint(ValueHint::FilePath)
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Log more (repeat for debug and trace output)"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .global(true)
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Only log errors"),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert one file")
                .arg(
                    Arg::new("path")
                        .help("Source file (.txt, .docx, .pdf or .md)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .short('t')
                        .required(true)
                        .value_parser(["pdf", "txt", "docx"])
                        .help("Target format"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath)
                        .help("Destination path (default: the source path with the target extension)"),
                )
                .arg(
                    Arg::new("no-universal")
                        .long("no-universal")
                        .action(ArgAction::SetTrue)
                        .help("Never hand the conversion to pandoc"),
                ),
        )
        .subcommand(Command::new("formats").about("List the supported conversions"))
}
