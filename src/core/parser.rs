//! Declarative argument parsing
//!
//! Options and inputs are registered up front, a flat argument list is
//! parsed against them, and resolved values are queried by name afterwards.

use crate::{
    config::{ExtraInputPolicy, ParserConfig},
    core::{
        help::HelpFormatter,
        rules::{InputRule, OptionKind, OptionRule},
        state::{OptionValue, ParsedState},
    },
    error::{ParserError, Result},
};
use tracing::{debug, instrument};

/// Marker that ends option parsing when enabled in the config
const END_OF_OPTIONS: &str = "--";

/// Argument parser holding registered rules and the last parse result
#[derive(Debug, Clone)]
pub struct ArgumentParser {
    name: String,
    description: String,
    config: ParserConfig,
    options: Vec<OptionRule>,
    inputs: Vec<InputRule>,
    state: ParsedState,
    parsed: bool,
}

impl ArgumentParser {
    /// Create a parser with the default configuration
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            config: ParserConfig::default(),
            options: Vec::new(),
            inputs: Vec::new(),
            state: ParsedState::default(),
            parsed: false,
        }
    }

    /// Create a parser with a custom configuration
    pub fn with_config(
        name: impl Into<String>,
        description: impl Into<String>,
        config: ParserConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(name, description)
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Registered options in registration order
    pub fn options(&self) -> &[OptionRule] {
        &self.options
    }

    /// Registered inputs in positional order
    pub fn inputs(&self) -> &[InputRule] {
        &self.inputs
    }

    /// Values from the last successful parse
    pub fn parsed(&self) -> &ParsedState {
        &self.state
    }

    /// Whether a parse has succeeded on this parser
    pub fn has_parsed(&self) -> bool {
        self.parsed
    }

    /// Register an option, replacing any option previously registered under `name`.
    ///
    /// Variants are given without dashes, e.g. `["o", "output"]`. A variant
    /// already claimed by a different option is rejected.
    pub fn register_option<I, S>(
        &mut self,
        name: impl Into<String>,
        kind: OptionKind,
        variants: I,
        description: impl Into<String>,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rule = OptionRule::new(name, kind, variants, description)?;

        for variant in &rule.variants {
            if let Some(existing) = self
                .options
                .iter()
                .find(|o| o.name != rule.name && o.matches(variant))
            {
                return Err(ParserError::variant_conflict(
                    variant.as_str(),
                    existing.name.as_str(),
                ));
            }
        }

        match self.options.iter_mut().find(|o| o.name == rule.name) {
            Some(slot) => {
                debug!("Replacing option '{}'", rule.name);
                *slot = rule;
            }
            None => {
                debug!("Registered option '{}' ({:?})", rule.name, rule.kind);
                self.options.push(rule);
            }
        }
        Ok(())
    }

    /// Register a positional input. Inputs are filled in registration order.
    ///
    /// Registering a name twice adds a second slot.
    pub fn register_input(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<()> {
        let rule = InputRule::new(name, description)?;
        debug!("Registered input '{}' at position {}", rule.name, self.inputs.len());
        self.inputs.push(rule);
        Ok(())
    }

    /// Parse arguments, excluding the program name.
    ///
    /// On failure the previously parsed values are kept.
    #[instrument(skip_all, fields(command = %self.name))]
    pub fn parse_arguments<I, S>(&mut self, arguments: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let arguments: Vec<S> = arguments.into_iter().collect();
        let mut state = ParsedState::with_slots(self.inputs.len());
        let mut options_ended = false;
        let mut index = 0;

        while index < arguments.len() {
            let token = arguments[index].as_ref();

            if !options_ended && self.config.end_of_options && token == END_OF_OPTIONS {
                debug!("End of options at position {}", index);
                options_ended = true;
                index += 1;
                continue;
            }

            if !options_ended && token.starts_with('-') {
                let rule = self.find_option(token)?;
                match rule.kind {
                    OptionKind::Boolean => {
                        debug!("Option '{}' present", rule.name);
                        state.set_option(&rule.name, OptionValue::Present);
                    }
                    OptionKind::String => {
                        let value: &str = arguments
                            .get(index + 1)
                            .map(|next| next.as_ref())
                            .ok_or_else(|| ParserError::missing_option_value(rule.name.as_str()))?;
                        debug!("Option '{}' = '{}'", rule.name, value);
                        state.set_option(&rule.name, OptionValue::Text(value.to_string()));
                    }
                }
                index += rule.kind.arity();
                continue;
            }

            self.assign_input(&mut state, token)?;
            index += 1;
        }

        debug!(
            "Parsed {} token(s), filled {} of {} input(s)",
            arguments.len(),
            state.filled_inputs(),
            self.inputs.len()
        );

        self.state = state;
        self.parsed = true;
        Ok(())
    }

    /// Value of a string option, if it was supplied
    pub fn string_option(&self, name: &str) -> Option<&str> {
        if !self.has_option(name, OptionKind::String) {
            return None;
        }
        match self.state.option(name) {
            Some(OptionValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// Whether a boolean option was present
    pub fn boolean_option(&self, name: &str) -> bool {
        self.has_option(name, OptionKind::Boolean)
            && matches!(self.state.option(name), Some(OptionValue::Present))
    }

    /// Value of a named input, if it was supplied
    pub fn input(&self, name: &str) -> Option<&str> {
        let slot = self.inputs.iter().position(|input| input.name == name)?;
        self.state.input(slot)
    }

    /// Help text describing the command, its inputs and its options
    pub fn help_info(&self) -> String {
        HelpFormatter::new(&self.config.help).render(
            &self.name,
            &self.description,
            &self.inputs,
            &self.options,
        )
    }

    fn find_option(&self, token: &str) -> Result<&OptionRule> {
        let bare = token
            .strip_prefix("--")
            .or_else(|| token.strip_prefix('-'))
            .unwrap_or(token);

        self.options
            .iter()
            .find(|rule| rule.matches(bare))
            .ok_or_else(|| ParserError::unknown_option(token))
    }

    fn assign_input(&self, state: &mut ParsedState, token: &str) -> Result<()> {
        if state.fill_next_input(token) {
            return Ok(());
        }
        match self.config.extra_inputs {
            ExtraInputPolicy::Reject => Err(ParserError::unexpected_input(token)),
            ExtraInputPolicy::Ignore => {
                debug!("Ignoring extra input '{}'", token);
                Ok(())
            }
        }
    }

    fn has_option(&self, name: &str, kind: OptionKind) -> bool {
        self.options
            .iter()
            .any(|rule| rule.name == name && rule.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verbose_parser() -> ArgumentParser {
        let mut parser = ArgumentParser::new("tool", "Does things");
        parser
            .register_option("verbose", OptionKind::Boolean, ["v", "verbose"], "Talk more")
            .unwrap();
        parser.register_input("path", "Target path").unwrap();
        parser
    }

    fn output_parser() -> ArgumentParser {
        let mut parser = verbose_parser();
        parser
            .register_option("output", OptionKind::String, ["o", "output"], "Output file")
            .unwrap();
        parser
    }

    #[test]
    fn test_boolean_option_and_input() {
        let mut parser = verbose_parser();
        parser.parse_arguments(["--verbose", "/tmp/x"]).unwrap();

        assert!(parser.boolean_option("verbose"));
        assert_eq!(parser.input("path"), Some("/tmp/x"));
        assert!(parser.has_parsed());
    }

    #[test]
    fn test_short_variant() {
        let mut parser = verbose_parser();
        parser.parse_arguments(["-v"]).unwrap();
        assert!(parser.boolean_option("verbose"));
        assert_eq!(parser.input("path"), None);
    }

    #[test]
    fn test_defaults_when_absent() {
        let mut parser = output_parser();
        parser.parse_arguments(["/tmp/x"]).unwrap();

        assert!(!parser.boolean_option("verbose"));
        assert_eq!(parser.string_option("output"), None);
    }

    #[test]
    fn test_queries_before_parse() {
        let parser = output_parser();
        assert!(!parser.has_parsed());
        assert!(!parser.boolean_option("verbose"));
        assert_eq!(parser.string_option("output"), None);
        assert_eq!(parser.input("path"), None);
    }

    #[test]
    fn test_string_option_captures_next_token() {
        let mut parser = output_parser();
        parser
            .parse_arguments(["-o", "-weird-value", "in.txt"])
            .unwrap();

        assert_eq!(parser.string_option("output"), Some("-weird-value"));
        assert_eq!(parser.input("path"), Some("in.txt"));
    }

    #[test]
    fn test_missing_option_value_keeps_state() {
        let mut parser = output_parser();
        parser.parse_arguments(["-v", "first"]).unwrap();

        let err = parser.parse_arguments(["-o"]).unwrap_err();
        assert_eq!(err, ParserError::missing_option_value("output"));

        assert!(parser.boolean_option("verbose"));
        assert_eq!(parser.input("path"), Some("first"));
    }

    #[test]
    fn test_unknown_option() {
        let mut parser = verbose_parser();
        let err = parser.parse_arguments(["--bogus"]).unwrap_err();
        assert_eq!(err, ParserError::unknown_option("--bogus"));
        assert!(!parser.has_parsed());
        assert_eq!(parser.parsed(), &ParsedState::default());
    }

    #[test]
    fn test_lone_dash_is_unknown() {
        let mut parser = verbose_parser();
        assert!(matches!(
            parser.parse_arguments(["-"]),
            Err(ParserError::UnknownOption { .. })
        ));
    }

    #[test]
    fn test_wrong_dash_count_still_matches() {
        // Prefix length is not tied to variant length.
        let mut parser = verbose_parser();
        parser.parse_arguments(["-verbose", "--v"]).unwrap();
        assert!(parser.boolean_option("verbose"));
    }

    #[test]
    fn test_extra_input_rejected_by_default() {
        let mut parser = verbose_parser();
        let err = parser.parse_arguments(["a", "b"]).unwrap_err();
        assert_eq!(err, ParserError::unexpected_input("b"));
    }

    #[test]
    fn test_extra_input_ignored_by_policy() {
        let config = ParserConfig::default().with_extra_inputs(ExtraInputPolicy::Ignore);
        let mut parser = ArgumentParser::with_config("tool", "", config).unwrap();
        parser.register_input("path", "").unwrap();

        parser.parse_arguments(["a", "b", "c"]).unwrap();
        assert_eq!(parser.input("path"), Some("a"));
    }

    #[test]
    fn test_inputs_assigned_in_registration_order() {
        let mut parser = output_parser();
        parser.register_input("second", "").unwrap();

        parser
            .parse_arguments(["one", "-o", "out", "-v", "two"])
            .unwrap();
        assert_eq!(parser.input("path"), Some("one"));
        assert_eq!(parser.input("second"), Some("two"));
        assert_eq!(parser.string_option("output"), Some("out"));
    }

    #[test]
    fn test_end_of_options_marker() {
        let mut parser = verbose_parser();
        parser.parse_arguments(["--", "-v"]).unwrap();
        assert!(!parser.boolean_option("verbose"));
        assert_eq!(parser.input("path"), Some("-v"));
    }

    #[test]
    fn test_end_of_options_disabled() {
        let config = ParserConfig {
            end_of_options: false,
            ..ParserConfig::default()
        };
        let mut parser = ArgumentParser::with_config("tool", "", config).unwrap();
        assert_eq!(
            parser.parse_arguments(["--"]).unwrap_err(),
            ParserError::unknown_option("--")
        );
    }

    #[test]
    fn test_reregister_replaces_rule() {
        let mut parser = verbose_parser();
        parser
            .register_option("verbose", OptionKind::String, ["level"], "Verbosity")
            .unwrap();

        assert_eq!(parser.options().len(), 1);
        assert!(matches!(
            parser.parse_arguments(["-v"]),
            Err(ParserError::UnknownOption { .. })
        ));

        parser.parse_arguments(["--level", "3"]).unwrap();
        assert_eq!(parser.string_option("verbose"), Some("3"));
        assert!(!parser.boolean_option("verbose"));
    }

    #[test]
    fn test_reregister_after_parse_changes_query_kind() {
        let mut parser = verbose_parser();
        parser.parse_arguments(["-v"]).unwrap();
        parser
            .register_option("verbose", OptionKind::String, ["v"], "")
            .unwrap();
        assert!(!parser.boolean_option("verbose"));
        assert_eq!(parser.string_option("verbose"), None);
    }

    #[test]
    fn test_variant_conflict_rejected() {
        let mut parser = verbose_parser();
        let err = parser
            .register_option("version", OptionKind::Boolean, ["V", "v"], "")
            .unwrap_err();
        assert_eq!(err, ParserError::variant_conflict("v", "verbose"));
        assert_eq!(parser.options().len(), 1);
    }

    #[test]
    fn test_queries_for_unregistered_names() {
        let mut parser = output_parser();
        parser.parse_arguments(["-v", "-o", "x"]).unwrap();
        assert!(!parser.boolean_option("output"));
        assert_eq!(parser.string_option("verbose"), None);
        assert_eq!(parser.string_option("missing"), None);
        assert_eq!(parser.input("missing"), None);
    }

    #[test]
    fn test_repeated_parse_is_stable() {
        let mut parser = output_parser();
        let args = ["-o", "out", "in"];

        parser.parse_arguments(args).unwrap();
        let first = parser.parsed().clone();
        parser.parse_arguments(args).unwrap();
        assert_eq!(parser.parsed(), &first);
    }

    #[test]
    fn test_new_parse_replaces_old_values() {
        let mut parser = output_parser();
        parser.parse_arguments(["-v", "-o", "out", "in"]).unwrap();
        parser.parse_arguments(Vec::<String>::new()).unwrap();

        assert!(!parser.boolean_option("verbose"));
        assert_eq!(parser.string_option("output"), None);
        assert_eq!(parser.input("path"), None);
    }

    #[test]
    fn test_duplicate_input_names_get_two_slots() {
        let mut parser = ArgumentParser::new("tool", "");
        parser.register_input("file", "").unwrap();
        parser.register_input("file", "").unwrap();

        parser.parse_arguments(["a", "b"]).unwrap();
        assert_eq!(parser.inputs().len(), 2);
        assert_eq!(parser.input("file"), Some("a"));
        assert_eq!(parser.parsed().input(1), Some("b"));
    }

    #[test]
    fn test_help_before_parse() {
        let parser = output_parser();
        let help = parser.help_info();

        assert!(help.contains("tool"));
        assert!(help.contains("Does things"));
        assert!(help.contains("Target path"));
        assert!(help.contains("-v, --verbose"));
        assert!(help.contains("Talk more"));
        assert!(help.contains("-o, --output <value>"));
        assert!(help.contains("Output file"));
    }

    #[test]
    fn test_with_config_validates() {
        let mut config = ParserConfig::default();
        config.help.value_placeholder.clear();
        assert!(matches!(
            ArgumentParser::with_config("tool", "", config),
            Err(ParserError::Config { .. })
        ));
    }
}
