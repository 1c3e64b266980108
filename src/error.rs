//! Error types for the argument parser
//!
//! Registration and parsing failures share one error type. Every variant
//! renders a message suitable for showing to the user as-is.

use thiserror::Error;

/// Main error type for the argument parser
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    /// A dash-prefixed token matched no registered variant
    #[error("Unknown option: {token}")]
    UnknownOption { token: String },

    /// A string option was the last token, leaving no value to consume
    #[error("Missing value for option: {option}")]
    MissingOptionValue { option: String },

    /// More positional tokens were supplied than inputs were registered
    #[error("Unexpected input: {token}")]
    UnexpectedInput { token: String },

    /// A raw argument could not be decoded as UTF-8
    #[error("Argument is not valid UTF-8: {token}")]
    InvalidEncoding { token: String },

    /// Malformed option or input registration
    #[error("Invalid rule: {message}")]
    InvalidRule { message: String },

    /// A variant token is already claimed by another option
    #[error("Variant '{variant}' is already registered for option '{existing}'")]
    VariantConflict { variant: String, existing: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ParserError {
    /// Create a new unknown option error
    pub fn unknown_option(token: impl Into<String>) -> Self {
        Self::UnknownOption {
            token: token.into(),
        }
    }

    /// Create a new missing option value error
    pub fn missing_option_value(option: impl Into<String>) -> Self {
        Self::MissingOptionValue {
            option: option.into(),
        }
    }

    /// Create a new unexpected input error
    pub fn unexpected_input(token: impl Into<String>) -> Self {
        Self::UnexpectedInput {
            token: token.into(),
        }
    }

    /// Create a new invalid encoding error from the lossy form of the argument
    pub fn invalid_encoding(token: impl Into<String>) -> Self {
        Self::InvalidEncoding {
            token: token.into(),
        }
    }

    /// Create a new invalid rule error
    pub fn invalid_rule(message: impl Into<String>) -> Self {
        Self::InvalidRule {
            message: message.into(),
        }
    }

    /// Create a new variant conflict error
    pub fn variant_conflict(variant: impl Into<String>, existing: impl Into<String>) -> Self {
        Self::VariantConflict {
            variant: variant.into(),
            existing: existing.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error came from parsing arguments rather than registration
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownOption { .. }
                | Self::MissingOptionValue { .. }
                | Self::UnexpectedInput { .. }
                | Self::InvalidEncoding { .. }
        )
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ParserError>;
