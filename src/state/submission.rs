//! Submission state machine types

use super::forms::FieldName;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Sending,
}

/// Result of a submit request
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Validation failed; field annotations describe why
    Rejected,
    /// A submission is already in flight
    AlreadySending,
    /// Validation passed and the simulated send has started
    Sending,
    /// The simulated send completed
    Sent(ContactMessage),
}

/// The submit control: its label and whether it accepts presses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    original_label: String,
    busy_label: String,
    pub enabled: bool,
}

impl SubmitButton {
    pub fn new(label: &str, busy_label: &str) -> Self {
        Self {
            label: label.to_string(),
            original_label: label.to_string(),
            busy_label: busy_label.to_string(),
            enabled: true,
        }
    }

    /// Disable the control and show the busy label
    pub fn set_busy(&mut self) {
        self.label = self.busy_label.clone();
        self.enabled = false;
    }

    /// Re-enable the control with its original label
    pub fn restore(&mut self) {
        self.label = self.original_label.clone();
        self.enabled = true;
    }

    pub fn is_busy(&self) -> bool {
        !self.enabled
    }
}

/// A message accepted by the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Build a message from a validated value snapshot
    pub fn from_values(values: &HashMap<FieldName, String>) -> Self {
        let get = |name: FieldName| values.get(&name).cloned().unwrap_or_default();
        Self {
            id: Uuid::new_v4(),
            name: get(FieldName::Name),
            email: get(FieldName::Email),
            subject: get(FieldName::Subject),
            message: get(FieldName::Message),
            submitted_at: Utc::now(),
        }
    }
}
