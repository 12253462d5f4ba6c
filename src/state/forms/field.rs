//! Form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of fields on the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Subject,
        FieldName::Message,
    ];

    /// The field identifier as it appears in form data
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Subject => "subject",
            FieldName::Message => "message",
        }
    }

    /// Position of the field in the form
    pub fn index(&self) -> usize {
        match self {
            FieldName::Name => 0,
            FieldName::Email => 1,
            FieldName::Subject => 2,
            FieldName::Message => 3,
        }
    }

    /// Field at a form position, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    pub value: String,
    pub required: bool,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new, empty text field
    pub fn text(name: FieldName, label: &str, required: bool, is_multiline: bool) -> Self {
        Self::text_with_value(name, label, String::new(), required, is_multiline)
    }

    /// Create a new text field with initial value
    pub fn text_with_value(
        name: FieldName,
        label: &str,
        value: String,
        required: bool,
        is_multiline: bool,
    ) -> Self {
        Self {
            name,
            label: label.to_string(),
            value,
            required,
            is_multiline,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        self.value.clone()
    }

    /// Label shown on the field border, with a marker for required fields
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }
}
