//! # Argument Parser
//!
//! A declarative command-line argument parser. Register options and
//! positional inputs, parse an argument list against them, then query the
//! resolved values by name. Help text is generated from the registered rules
//! on demand, so a help option can simply print it.
//!
//! ## Features
//!
//! - Boolean and string options with short and long variants
//! - Positional inputs filled in registration order
//! - Failed parses leave earlier results untouched
//! - Generated, column-aligned help text
//!
//! ## Example
//!
//! ```
//! use argument_parser::core::{ArgumentParser, OptionKind};
//!
//! let mut parser = ArgumentParser::new("cp", "Copy files");
//! parser.register_option("verbose", OptionKind::Boolean, ["v", "verbose"], "Talk more")?;
//! parser.register_input("path", "File to copy")?;
//!
//! parser.parse_arguments(["--verbose", "/tmp/x"])?;
//! assert!(parser.boolean_option("verbose"));
//! assert_eq!(parser.input("path"), Some("/tmp/x"));
//! # Ok::<(), argument_parser::error::ParserError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub use crate::core::{ArgumentParser, OptionKind};
pub use crate::error::{ParserError, Result};

use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> anyhow::Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
