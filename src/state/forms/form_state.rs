//! Contact form state and focus navigation

use super::field::{FieldName, FormField};
use std::collections::HashMap;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The portfolio contact form: four text fields followed by the submit button row
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
    pub active_field_index: usize,
}

impl ContactForm {
    /// Index of the submit button row
    pub const SUBMIT_ROW: usize = 4;

    pub fn new() -> Self {
        Self {
            name: FormField::text(FieldName::Name, "Name", true, false),
            email: FormField::text(FieldName::Email, "Email", true, false),
            subject: FormField::text(FieldName::Subject, "Subject", true, false),
            message: FormField::text(FieldName::Message, "Message", true, true),
            active_field_index: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Subject => &self.subject,
            FieldName::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Subject => &mut self.subject,
            FieldName::Message => &mut self.message,
        }
    }

    /// The focused text field, or `None` when the submit row is focused
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }

    /// Snapshot of the current values keyed by field
    pub fn values(&self) -> HashMap<FieldName, String> {
        FieldName::ALL
            .iter()
            .map(|name| (*name, self.field(*name).as_text().to_string()))
            .collect()
    }

    /// Clear every value and return focus to the first field
    pub fn reset(&mut self) {
        for name in FieldName::ALL {
            self.field_mut(name).clear();
        }
        self.active_field_index = 0;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5 // name, email, subject, message, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FieldName::from_index(index).map(|name| self.field(name))
    }
}
