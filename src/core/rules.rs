//! Option and input rules registered with the parser

use crate::error::{ParserError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Bare variant tokens: no leading dash, no whitespace
static VARIANT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^-\s]\S*$").expect("variant pattern is valid"));

/// How an option resolves on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Either present or not. Defaults to false
    Boolean,
    /// Takes the following token as its value. Defaults to absent
    String,
}

impl OptionKind {
    /// Number of tokens an occurrence of this option consumes, itself included
    pub fn arity(self) -> usize {
        match self {
            Self::Boolean => 1,
            Self::String => 2,
        }
    }
}

/// A registered option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRule {
    /// Name used to retrieve the value after parsing
    pub name: String,
    /// Resolution kind
    pub kind: OptionKind,
    /// Accepted tokens without dash prefixes, e.g. `o` and `output`
    pub variants: Vec<String>,
    /// Text for the help info
    pub description: String,
}

impl OptionRule {
    /// Build and validate an option rule
    pub fn new<I, S>(
        name: impl Into<String>,
        kind: OptionKind,
        variants: I,
        description: impl Into<String>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(ParserError::invalid_rule("option name must not be empty"));
        }

        let mut unique: Vec<String> = Vec::new();
        for variant in variants.into_iter().map(Into::into) {
            validate_variant(&name, &variant)?;
            if !unique.contains(&variant) {
                unique.push(variant);
            }
        }

        if unique.is_empty() {
            return Err(ParserError::invalid_rule(format!(
                "option '{}' needs at least one variant",
                name
            )));
        }

        Ok(Self {
            name,
            kind,
            variants: unique,
            description: description.into(),
        })
    }

    /// Whether `token` (already stripped of dashes) names this option
    pub fn matches(&self, token: &str) -> bool {
        self.variants.iter().any(|v| v == token)
    }

    /// Variants with their dash prefixes, e.g. `-o, --output`
    pub fn display_variants(&self) -> String {
        self.variants
            .iter()
            .map(|v| dashed(v))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A registered positional input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRule {
    /// Name used to retrieve the value after parsing
    pub name: String,
    /// Text for the help info
    pub description: String,
}

impl InputRule {
    /// Build and validate an input rule
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ParserError::invalid_rule("input name must not be empty"));
        }
        Ok(Self {
            name,
            description: description.into(),
        })
    }
}

/// Single-character variants get one dash, longer ones two
pub fn dashed(variant: &str) -> String {
    if variant.chars().count() == 1 {
        format!("-{}", variant)
    } else {
        format!("--{}", variant)
    }
}

fn validate_variant(option: &str, variant: &str) -> Result<()> {
    if VARIANT_PATTERN.is_match(variant) {
        return Ok(());
    }
    Err(ParserError::invalid_rule(format!(
        "invalid variant '{}' for option '{}': variants must be non-empty, \
         without leading dashes or whitespace",
        variant, option
    )))
}
