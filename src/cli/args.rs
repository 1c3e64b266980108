//! Command-line argument declaration for the demo command

use crate::{
    core::{ArgumentParser, OptionKind},
    error::{ParserError, Result},
};
use std::ffi::OsString;

/// Name shown in help output
pub const COMMAND_NAME: &str = "argparse-demo";

/// Resolved arguments of the demo command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    /// Print help and exit
    pub help: bool,
    /// Log a summary of resolved values
    pub verbose: bool,
    /// Enable debug output
    pub debug: bool,
    /// File to write the listing to instead of stdout
    pub output: Option<String>,
    /// Separator placed between listing entries
    pub separator: Option<String>,
    /// First positional input
    pub source: Option<String>,
    /// Second positional input
    pub destination: Option<String>,
}

impl Args {
    /// Collect resolved values from a parser that has run `build_parser`'s rules
    pub fn from_parser(parser: &ArgumentParser) -> Self {
        Self {
            help: parser.boolean_option("help"),
            verbose: parser.boolean_option("verbose"),
            debug: parser.boolean_option("debug"),
            output: parser.string_option("output").map(str::to_string),
            separator: parser.string_option("separator").map(str::to_string),
            source: parser.input("source").map(str::to_string),
            destination: parser.input("destination").map(str::to_string),
        }
    }
}

/// Declare the demo command's options and inputs
pub fn build_parser() -> Result<ArgumentParser> {
    let mut parser = ArgumentParser::new(
        COMMAND_NAME,
        "Print the values resolved from the given arguments",
    );

    parser.register_input("source", "First positional value")?;
    parser.register_input("destination", "Second positional value")?;

    parser.register_option("help", OptionKind::Boolean, ["h", "help"], "Show this help")?;
    parser.register_option(
        "verbose",
        OptionKind::Boolean,
        ["v", "verbose"],
        "Log a summary of resolved values",
    )?;
    parser.register_option("debug", OptionKind::Boolean, ["d", "debug"], "Enable debug output")?;
    parser.register_option(
        "output",
        OptionKind::String,
        ["o", "output"],
        "Write the listing to a file",
    )?;
    parser.register_option(
        "separator",
        OptionKind::String,
        ["s", "separator"],
        "Separator between entries (default: newline)",
    )?;

    Ok(parser)
}

/// Decode raw process arguments, rejecting the first one that is not UTF-8
pub fn collect_arguments<I>(raw: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    raw.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| ParserError::invalid_encoding(arg.to_string_lossy()))
        })
        .collect()
}

/// Whether `--debug` is set, resolved on a throwaway copy of the parser so
/// logging can be configured before the real parse runs
pub fn debug_requested(parser: &ArgumentParser, arguments: &[String]) -> bool {
    let mut dry_run = parser.clone();
    dry_run.parse_arguments(arguments).is_ok() && dry_run.boolean_option("debug")
}

/// Parse command line arguments, excluding the program name
pub fn parse_args<I, S>(parser: &mut ArgumentParser, arguments: I) -> Result<Args>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parser.parse_arguments(arguments)?;
    Ok(Args::from_parser(parser))
}
