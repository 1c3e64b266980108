//! Configuration management for the argument parser
//!
//! Centralizes parsing policy and help layout options and provides validation.

use crate::error::ParserError;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// What to do with positional tokens once every input is filled
    pub extra_inputs: ExtraInputPolicy,
    /// Treat a bare `--` as the end of options
    pub end_of_options: bool,
    /// Help text layout
    pub help: HelpConfig,
}

/// Policy for positional tokens beyond the registered inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtraInputPolicy {
    /// Fail the parse with an unexpected input error
    #[default]
    Reject,
    /// Drop the token and keep parsing
    Ignore,
}

/// Help text layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpConfig {
    /// Spaces before each input or option row
    pub indent: usize,
    /// Minimum spaces between the left column and descriptions
    pub column_gap: usize,
    /// Placeholder shown after string option variants
    pub value_placeholder: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            extra_inputs: ExtraInputPolicy::default(),
            end_of_options: true,
            help: HelpConfig::default(),
        }
    }
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            column_gap: 4,
            value_placeholder: "value".to_string(),
        }
    }
}

impl ParserConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ParserError> {
        if self.help.value_placeholder.trim().is_empty() {
            return Err(ParserError::config("value placeholder must not be empty"));
        }

        if self.help.column_gap == 0 {
            return Err(ParserError::config("column gap must be at least 1"));
        }

        Ok(())
    }

    /// Builder-style override of the extra input policy
    pub fn with_extra_inputs(mut self, policy: ExtraInputPolicy) -> Self {
        self.extra_inputs = policy;
        self
    }
}
