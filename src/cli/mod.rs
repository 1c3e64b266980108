//! Command-line interface module
//!
//! Declares the demo command with the library's own parser and executes it.

pub mod args;
pub mod commands;

pub use args::{Args, build_parser, collect_arguments, debug_requested, parse_args};
pub use commands::execute_command;
