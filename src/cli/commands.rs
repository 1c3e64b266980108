//! Command implementations for the CLI

use crate::{
    cli::Args,
    core::{ArgumentParser, OptionKind},
};
use anyhow::Context;
use std::io::Write;
use tracing::{debug, info, instrument};

/// Placeholder for values that were not supplied
const UNSET: &str = "<unset>";

/// Execute the demo command, writing to `out` unless an output file was given
#[instrument(skip_all)]
pub fn execute_command(
    parser: &ArgumentParser,
    args: &Args,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if args.help {
        out
            .write_all(parser.help_info().as_bytes())
            .context("Failed to write help")?;
        return Ok(());
    }

    let entries = resolved_entries(parser);
    for entry in &entries {
        debug!("Resolved {}", entry);
    }
    if args.verbose {
        info!(
            "Resolved {} option(s) and {} input(s)",
            parser.options().len(),
            parser.inputs().len()
        );
    }

    let separator = args.separator.as_deref().unwrap_or("\n");
    let listing = format!("{}\n", entries.join(separator));

    match &args.output {
        Some(path) => {
            std::fs::write(path, listing)
                .with_context(|| format!("Failed to write listing to {}", path))?;
            info!("Listing written to {}", path);
        }
        None => out
            .write_all(listing.as_bytes())
            .context("Failed to write listing")?,
    }

    Ok(())
}

/// One `name=value` entry per option, then per input, in registration order
pub fn resolved_entries(parser: &ArgumentParser) -> Vec<String> {
    let options = parser.options().iter().map(|option| {
        let value = match option.kind {
            OptionKind::Boolean => parser.boolean_option(&option.name).to_string(),
            OptionKind::String => parser
                .string_option(&option.name)
                .unwrap_or(UNSET)
                .to_string(),
        };
        format!("{}={}", option.name, value)
    });

    let inputs = parser.inputs().iter().enumerate().map(|(slot, input)| {
        let value = parser.parsed().input(slot).unwrap_or(UNSET);
        format!("{}={}", input.name, value)
    });

    options.chain(inputs).collect()
}
