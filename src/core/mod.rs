//! Core functionality for argument parsing
//!
//! Contains the rule model, the parsing algorithm, the parsed state,
//! and help text generation.

pub mod help;
pub mod parser;
pub mod rules;
pub mod state;

pub use help::HelpFormatter;
pub use parser::ArgumentParser;
pub use rules::{InputRule, OptionKind, OptionRule};
pub use state::{OptionValue, ParsedState};
