//! Help text generation
//!
//! Renders command metadata and registered rules in registration order.
//! Inputs and options share one description column.

use crate::{
    config::HelpConfig,
    core::rules::{InputRule, OptionKind, OptionRule},
};

/// Formats help info from registered metadata
#[derive(Debug)]
pub struct HelpFormatter<'a> {
    config: &'a HelpConfig,
}

impl<'a> HelpFormatter<'a> {
    pub fn new(config: &'a HelpConfig) -> Self {
        Self { config }
    }

    /// Render the complete help text
    pub fn render(
        &self,
        name: &str,
        description: &str,
        inputs: &[InputRule],
        options: &[OptionRule],
    ) -> String {
        let mut out = if description.is_empty() {
            format!("{}\n", name)
        } else {
            format!("{} - {}\n", name, description)
        };

        out.push('\n');
        out.push_str(&self.usage(name, inputs, options));
        out.push('\n');

        let input_rows: Vec<(String, &str)> = inputs
            .iter()
            .map(|input| (input.name.clone(), input.description.as_str()))
            .collect();
        let option_rows: Vec<(String, &str)> = options
            .iter()
            .map(|option| (self.option_label(option), option.description.as_str()))
            .collect();

        let width = input_rows
            .iter()
            .chain(option_rows.iter())
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);

        self.section(&mut out, "Inputs", &input_rows, width);
        self.section(&mut out, "Options", &option_rows, width);

        out
    }

    /// Usage line, e.g. `Usage: cp [options] <source> <destination>`
    pub fn usage(&self, name: &str, inputs: &[InputRule], options: &[OptionRule]) -> String {
        let mut usage = format!("Usage: {}", name);
        if !options.is_empty() {
            usage.push_str(" [options]");
        }
        for input in inputs {
            usage.push_str(&format!(" <{}>", input.name));
        }
        usage
    }

    fn option_label(&self, option: &OptionRule) -> String {
        match option.kind {
            OptionKind::Boolean => option.display_variants(),
            OptionKind::String => format!(
                "{} <{}>",
                option.display_variants(),
                self.config.value_placeholder
            ),
        }
    }

    fn section(&self, out: &mut String, title: &str, rows: &[(String, &str)], width: usize) {
        if rows.is_empty() {
            return;
        }

        out.push_str(&format!("\n{}:\n", title));
        for (label, description) in rows {
            let line = format!(
                "{:indent$}{:<width$}{:gap$}{}",
                "",
                label,
                "",
                description,
                indent = self.config.indent,
                width = width,
                gap = self.config.column_gap,
            );
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
}
