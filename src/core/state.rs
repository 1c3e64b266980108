//! Values resolved by a parse

use std::collections::HashMap;

/// Resolved value of a single option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// A boolean option was present
    Present,
    /// A string option captured this value
    Text(String),
}

/// Values produced by one successful parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedState {
    options: HashMap<String, OptionValue>,
    inputs: Vec<Option<String>>,
}

impl ParsedState {
    /// Empty state with one unfilled slot per registered input
    pub fn with_slots(slots: usize) -> Self {
        Self {
            options: HashMap::new(),
            inputs: vec![None; slots],
        }
    }

    /// Record an option value. A later occurrence replaces an earlier one
    pub fn set_option(&mut self, name: &str, value: OptionValue) {
        self.options.insert(name.to_string(), value);
    }

    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    /// Fill the first empty slot. Returns false when every slot is taken
    pub fn fill_next_input(&mut self, value: &str) -> bool {
        match self.inputs.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(value.to_string());
                true
            }
            None => false,
        }
    }

    pub fn input(&self, slot: usize) -> Option<&str> {
        self.inputs.get(slot).and_then(|v| v.as_deref())
    }

    /// Number of filled input slots
    pub fn filled_inputs(&self) -> usize {
        self.inputs.iter().filter(|slot| slot.is_some()).count()
    }
}
