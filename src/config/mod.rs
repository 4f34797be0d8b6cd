//! Editable configuration fields.
//!
//! Backends describe their parameters as an ordered list of labeled, typed
//! fields; a frontend presents the list for editing and hands it back to
//! be parsed and validated into a candidate parameter set. Validation
//! happens before anything is committed, so a failed edit never disturbs
//! the session's parameters.
//!
//! The three field kinds mirror what puzzle configuration dialogs need:
//! free text, an on/off toggle, and a fixed choice list.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered list of editable fields.
///
/// Config dialogs are small; the inline capacity covers them without
/// allocation.
pub type FieldList = SmallVec<[ConfigField; 8]>;

/// The value carried by one editable field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigValue {
    /// Free text (numbers included; the backend parses).
    Text(String),
    /// An on/off toggle.
    Toggle(bool),
    /// One selection from a fixed list of options.
    Choice {
        /// The selectable option labels.
        options: Vec<String>,
        /// Index of the selected option.
        selected: usize,
    },
}

/// One labeled, typed editable field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigField {
    /// Human-readable label, also used in error reports.
    pub label: String,
    /// The field's current value.
    pub value: ConfigValue,
}

impl ConfigField {
    /// Create a text field.
    pub fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: ConfigValue::Text(value.into()),
        }
    }

    /// Create a toggle field.
    pub fn toggle(label: impl Into<String>, on: bool) -> Self {
        Self {
            label: label.into(),
            value: ConfigValue::Toggle(on),
        }
    }

    /// Create a choice field.
    pub fn choice(label: impl Into<String>, options: Vec<String>, selected: usize) -> Self {
        assert!(
            selected < options.len(),
            "choice selection {selected} out of range ({} options)",
            options.len()
        );
        Self {
            label: label.into(),
            value: ConfigValue::Choice { options, selected },
        }
    }

    /// The text content, if this is a text field.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            ConfigValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The toggle state, if this is a toggle field.
    #[must_use]
    pub fn as_toggle(&self) -> Option<bool> {
        match &self.value {
            ConfigValue::Toggle(on) => Some(*on),
            _ => None,
        }
    }

    /// The selected option index, if this is a choice field.
    #[must_use]
    pub fn as_choice(&self) -> Option<usize> {
        match &self.value {
            ConfigValue::Choice { selected, .. } => Some(*selected),
            _ => None,
        }
    }
}
