#![allow(clippy::cargo_common_metadata)]
use anyhow::{Context, Result};
use argument_parser::{ArgumentParser, ParserError, cli, setup_logging};
use std::process::ExitCode;

/// Exit code for invalid command line usage
const USAGE_ERROR: u8 = 2;

fn main() -> Result<ExitCode> {
    // Declare the command's options and inputs
    let mut parser = cli::build_parser().context("Failed to declare arguments")?;

    let arguments = match cli::collect_arguments(std::env::args_os().skip(1)) {
        Ok(arguments) => arguments,
        Err(e) => return Ok(usage_error(&parser, &e)),
    };

    // Setup logging based on debug flag
    setup_logging(cli::debug_requested(&parser, &arguments))?;

    // Parse command line arguments
    let args = match cli::parse_args(&mut parser, &arguments) {
        Ok(args) => args,
        Err(e) if e.is_parse_error() => return Ok(usage_error(&parser, &e)),
        Err(e) => return Err(e).context("Failed to parse arguments"),
    };

    // Execute the command
    cli::execute_command(&parser, &args, &mut std::io::stdout().lock())?;
    Ok(ExitCode::SUCCESS)
}

/// Report a parse error followed by the help text
fn usage_error(parser: &ArgumentParser, error: &ParserError) -> ExitCode {
    eprintln!("error: {}\n", error);
    eprint!("{}", parser.help_info());
    ExitCode::from(USAGE_ERROR)
}
