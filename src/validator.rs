//! Contact form validation and submission
//!
//! [`FormValidator`] owns the form values, the per-field error annotations
//! and the submit control. The terminal adapter calls into it on focus
//! changes (blur), edits (input) and submit requests.

use crate::config::FolioConfig;
use crate::state::{
    check_field, is_valid_email, ContactForm, ContactMessage, FieldError, FieldName, Notification,
    NotificationKind, SubmissionOutcome, SubmissionState, SubmitButton, ValidationError,
};
use crate::submit::SubmissionDelay;
use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

pub struct FormValidator {
    form: ContactForm,
    /// At most one annotation per field; presence doubles as the invalid mark
    errors: BTreeMap<FieldName, FieldError>,
    state: SubmissionState,
    button: SubmitButton,
    /// Message accepted by `begin_submit`, delivered by `finish_submit`
    pending: Option<ContactMessage>,
    notification: Option<Notification>,
    success_message: String,
    notification_duration: Duration,
}

impl FormValidator {
    pub fn new(config: &FolioConfig) -> Self {
        Self {
            form: ContactForm::new(),
            errors: BTreeMap::new(),
            state: SubmissionState::Idle,
            button: SubmitButton::new(config.submit_label(), config.busy_label()),
            pending: None,
            notification: None,
            success_message: config.success_message().to_string(),
            notification_duration: config.notification_duration(),
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Mutable access for focus navigation; edits go through the input methods
    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn error(&self, name: FieldName) -> Option<&FieldError> {
        self.errors.get(&name)
    }

    /// Whether the field currently carries the invalid mark
    pub fn is_invalid(&self, name: FieldName) -> bool {
        self.errors.contains_key(&name)
    }

    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Validate one field's current value, annotating or clearing it
    pub fn validate_field(&mut self, name: FieldName) -> Result<(), FieldError> {
        match check_field(self.form.field(name)) {
            Ok(()) => {
                self.clear_field_error(name);
                Ok(())
            }
            Err(kind) => {
                tracing::debug!(field = %name, "Field failed validation: {kind}");
                let error = FieldError::new(name, kind);
                self.show_field_error(error.clone());
                Err(error)
            }
        }
    }

    /// Validate a whole value snapshot, annotating every failing field.
    ///
    /// A key missing from `values` counts as empty. The email pattern is
    /// checked against the raw (untrimmed) value.
    pub fn validate_form(&mut self, values: &HashMap<FieldName, String>) -> bool {
        let mut is_valid = true;

        for name in FieldName::ALL {
            let value = values.get(&name).map(String::as_str).unwrap_or("");
            if self.form.field(name).required && value.trim().is_empty() {
                self.show_field_error(FieldError::new(
                    name,
                    ValidationError::MissingRequiredValue,
                ));
                is_valid = false;
            }
        }

        if let Some(email) = values.get(&FieldName::Email) {
            if !email.is_empty() && !is_valid_email(email) {
                self.show_field_error(FieldError::new(
                    FieldName::Email,
                    ValidationError::InvalidEmailFormat,
                ));
                is_valid = false;
            }
        }

        tracing::debug!(is_valid, errors = self.errors.len(), "Validated form");
        is_valid
    }

    /// Drop the field's annotation without validating
    pub fn clear_field_error(&mut self, name: FieldName) {
        self.errors.remove(&name);
    }

    /// Append a character to a field (an input event)
    pub fn input_char(&mut self, name: FieldName, c: char) {
        self.form.field_mut(name).push_char(c);
        self.clear_field_error(name);
    }

    /// Remove the last character of a field (an input event)
    pub fn backspace(&mut self, name: FieldName) {
        self.form.field_mut(name).pop_char();
        self.clear_field_error(name);
    }

    /// Replace a field's value (an input event)
    pub fn set_value(&mut self, name: FieldName, value: impl Into<String>) {
        self.form.field_mut(name).set_text(value.into());
        self.clear_field_error(name);
    }

    /// Validate and, on success, disable the control and start sending.
    ///
    /// Pair with [`finish_submit`](Self::finish_submit) once the delay has
    /// elapsed.
    pub fn begin_submit(&mut self) -> SubmissionOutcome {
        if self.state == SubmissionState::Sending {
            tracing::debug!("Submit ignored, already sending");
            return SubmissionOutcome::AlreadySending;
        }

        self.state = SubmissionState::Validating;
        let values = self.form.values();

        if !self.validate_form(&values) || !self.errors.is_empty() {
            self.state = SubmissionState::Idle;
            tracing::debug!(errors = self.errors.len(), "Submission rejected");
            return SubmissionOutcome::Rejected;
        }

        self.state = SubmissionState::Sending;
        self.button.set_busy();
        self.pending = Some(ContactMessage::from_values(&values));
        tracing::debug!("Sending message");
        SubmissionOutcome::Sending
    }

    /// Complete an in-flight submission: restore the control, reset the
    /// form and raise the success notification.
    ///
    /// Returns `None` when nothing was being sent.
    pub fn finish_submit(&mut self) -> Option<ContactMessage> {
        if self.state != SubmissionState::Sending {
            return None;
        }

        let message = self.pending.take()?;
        self.notify(self.success_message.clone(), NotificationKind::Success);
        self.form.reset();
        self.button.restore();
        self.state = SubmissionState::Idle;

        match serde_json::to_string(&message) {
            Ok(json) => tracing::debug!(id = %message.id, "Message sent: {json}"),
            Err(err) => tracing::warn!(id = %message.id, "Message sent, not serializable: {err}"),
        }
        Some(message)
    }

    /// Run a full submission, awaiting the injected delay.
    ///
    /// The terminal adapter cannot hold `&mut self` across the delay while
    /// it keeps drawing, so it composes [`begin_submit`](Self::begin_submit)
    /// and [`finish_submit`](Self::finish_submit) around a spawned task
    /// instead; this is the single-call form of the same sequence.
    #[allow(dead_code)]
    pub async fn submit(&mut self, delay: &dyn SubmissionDelay) -> SubmissionOutcome {
        match self.begin_submit() {
            SubmissionOutcome::Sending => {
                delay.wait().await;
                match self.finish_submit() {
                    Some(message) => SubmissionOutcome::Sent(message),
                    None => SubmissionOutcome::Rejected,
                }
            }
            outcome => outcome,
        }
    }

    /// Show a notification, replacing any current one
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.notification = Some(Notification::new(
            message,
            kind,
            self.notification_duration,
        ));
    }

    /// Drop the notification once its display time has passed
    pub fn expire_notification(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_dismissed(now))
        {
            self.notification = None;
        }
    }

    fn show_field_error(&mut self, error: FieldError) {
        self.errors.insert(error.field_name, error);
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new(&FolioConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::MockSubmissionDelay;
    use pretty_assertions::assert_eq;

    fn values(pairs: &[(FieldName, &str)]) -> HashMap<FieldName, String> {
        pairs
            .iter()
            .map(|(name, value)| (*name, value.to_string()))
            .collect()
    }

    fn fill(validator: &mut FormValidator, pairs: &[(FieldName, &str)]) {
        for (name, value) in pairs {
            validator.set_value(*name, *value);
        }
    }

    const ALICE: &[(FieldName, &str)] = &[
        (FieldName::Name, "Alice"),
        (FieldName::Email, "alice@example.com"),
        (FieldName::Subject, "Hi"),
        (FieldName::Message, "Hello"),
    ];

    fn immediate_delay() -> MockSubmissionDelay {
        let mut delay = MockSubmissionDelay::new();
        delay.expect_wait().times(1).returning(|| ());
        delay
    }

    mod validate_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_required_empty_fields_are_missing() {
            let mut validator = FormValidator::default();
            for name in FieldName::ALL {
                let err = validator.validate_field(name).unwrap_err();
                assert_eq!(err.kind, ValidationError::MissingRequiredValue);
                assert_eq!(err.message, "This field is required");
            }
            assert_eq!(validator.error_count(), 4);
        }

        #[test]
        fn test_whitespace_only_is_missing() {
            let mut validator = FormValidator::default();
            validator.set_value(FieldName::Subject, "   ");
            let err = validator.validate_field(FieldName::Subject).unwrap_err();
            assert_eq!(err.kind, ValidationError::MissingRequiredValue);
            assert!(validator.is_invalid(FieldName::Subject));
        }

        #[test]
        fn test_non_email_non_empty_passes() {
            let mut validator = FormValidator::default();
            validator.set_value(FieldName::Message, "not-an-email @ all");
            assert!(validator.validate_field(FieldName::Message).is_ok());
            assert!(!validator.is_invalid(FieldName::Message));
        }

        #[test]
        fn test_email_cases() {
            let cases = [
                ("a@b.co", None),
                ("a@b", Some(ValidationError::InvalidEmailFormat)),
                ("ab.com", Some(ValidationError::InvalidEmailFormat)),
                ("a @b.com", Some(ValidationError::InvalidEmailFormat)),
                ("", Some(ValidationError::MissingRequiredValue)),
            ];
            for (value, expected) in cases {
                let mut validator = FormValidator::default();
                validator.set_value(FieldName::Email, value);
                let result = validator.validate_field(FieldName::Email).err().map(|e| e.kind);
                assert_eq!(result, expected, "value {value:?}");
                assert_eq!(
                    validator.error_count(),
                    usize::from(expected.is_some()),
                    "value {value:?}"
                );
            }
        }

        #[test]
        fn test_is_idempotent() {
            let mut validator = FormValidator::default();
            validator.set_value(FieldName::Email, "a@b");
            let first = validator.validate_field(FieldName::Email);
            let second = validator.validate_field(FieldName::Email);

            assert_eq!(first, second);
            assert_eq!(validator.error_count(), 1);
        }

        #[test]
        fn test_new_error_replaces_old() {
            let mut validator = FormValidator::default();
            let _ = validator.validate_field(FieldName::Email);
            assert_eq!(
                validator.error(FieldName::Email).unwrap().kind,
                ValidationError::MissingRequiredValue
            );

            validator.form_mut().email.set_text("a@b".to_string());
            let _ = validator.validate_field(FieldName::Email);

            assert_eq!(validator.error_count(), 1);
            assert_eq!(
                validator.error(FieldName::Email).unwrap().kind,
                ValidationError::InvalidEmailFormat
            );
        }

        #[test]
        fn test_passing_clears_existing_error() {
            let mut validator = FormValidator::default();
            let _ = validator.validate_field(FieldName::Name);
            assert!(validator.is_invalid(FieldName::Name));

            validator.form_mut().name.set_text("Alice".to_string());
            assert!(validator.validate_field(FieldName::Name).is_ok());
            assert!(!validator.is_invalid(FieldName::Name));
            assert!(validator.error(FieldName::Name).is_none());
        }

        #[test]
        fn test_failure_leaves_other_fields_alone() {
            let mut validator = FormValidator::default();
            let _ = validator.validate_field(FieldName::Name);
            let _ = validator.validate_field(FieldName::Subject);
            assert_eq!(validator.error_count(), 2);

            validator.form_mut().subject.set_text("Hi".to_string());
            let _ = validator.validate_field(FieldName::Subject);
            assert!(validator.is_invalid(FieldName::Name));
            assert_eq!(validator.error_count(), 1);
        }
    }

    mod validate_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_all_valid_returns_true() {
            let mut validator = FormValidator::default();
            assert!(validator.validate_form(&values(ALICE)));
            assert_eq!(validator.error_count(), 0);
        }

        #[test]
        fn test_annotates_every_failing_field() {
            let mut validator = FormValidator::default();
            let data = values(&[(FieldName::Name, "Alice")]);
            assert!(!validator.validate_form(&data));

            let failing: Vec<FieldName> = validator.errors().map(|e| e.field_name).collect();
            assert_eq!(
                failing,
                vec![FieldName::Email, FieldName::Subject, FieldName::Message]
            );
        }

        #[test]
        fn test_invalid_email_only() {
            let mut validator = FormValidator::default();
            let data = values(&[
                (FieldName::Name, "Alice"),
                (FieldName::Email, "not-an-email"),
                (FieldName::Subject, "Hi"),
                (FieldName::Message, "Hello"),
            ]);
            assert!(!validator.validate_form(&data));
            assert_eq!(validator.error_count(), 1);
            assert_eq!(
                validator.error(FieldName::Email).unwrap().kind,
                ValidationError::InvalidEmailFormat
            );
        }

        #[test]
        fn test_empty_email_reports_missing_only() {
            let mut validator = FormValidator::default();
            let mut data = values(ALICE);
            data.insert(FieldName::Email, String::new());
            assert!(!validator.validate_form(&data));
            assert_eq!(
                validator.error(FieldName::Email).unwrap().kind,
                ValidationError::MissingRequiredValue
            );
        }

        #[test]
        fn test_whitespace_email_keeps_single_annotation() {
            let mut validator = FormValidator::default();
            let mut data = values(ALICE);
            data.insert(FieldName::Email, "   ".to_string());
            assert!(!validator.validate_form(&data));
            assert_eq!(validator.error_count(), 1);
            assert!(validator.is_invalid(FieldName::Email));
        }

        #[test]
        fn test_repeated_runs_do_not_duplicate() {
            let mut validator = FormValidator::default();
            let data = HashMap::new();
            validator.validate_form(&data);
            validator.validate_form(&data);
            assert_eq!(validator.error_count(), 4);
        }
    }

    mod clear_field_error {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_clears_without_validating() {
            let mut validator = FormValidator::default();
            let _ = validator.validate_field(FieldName::Name);
            validator.clear_field_error(FieldName::Name);
            assert!(!validator.is_invalid(FieldName::Name));
            // The value is still empty, but no annotation is shown until the next blur
            assert_eq!(validator.form().name.as_text(), "");
        }

        #[test]
        fn test_clear_on_clean_field_is_noop() {
            let mut validator = FormValidator::default();
            validator.clear_field_error(FieldName::Email);
            assert_eq!(validator.error_count(), 0);
        }

        #[test]
        fn test_input_clears_even_if_still_invalid() {
            let mut validator = FormValidator::default();
            validator.set_value(FieldName::Email, "a@b");
            let _ = validator.validate_field(FieldName::Email);
            assert!(validator.is_invalid(FieldName::Email));

            validator.input_char(FieldName::Email, 'x');
            assert!(!validator.is_invalid(FieldName::Email));
            assert_eq!(validator.form().email.as_text(), "a@bx");
        }

        #[test]
        fn test_backspace_clears_error() {
            let mut validator = FormValidator::default();
            validator.set_value(FieldName::Name, "A");
            validator.validate_form(&HashMap::new());
            assert!(validator.is_invalid(FieldName::Name));

            validator.backspace(FieldName::Name);
            assert!(!validator.is_invalid(FieldName::Name));
            assert!(validator.is_invalid(FieldName::Email));
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_submission_end_to_end() {
            let mut validator = FormValidator::default();
            fill(&mut validator, ALICE);

            assert_eq!(validator.begin_submit(), SubmissionOutcome::Sending);
            assert_eq!(validator.state(), SubmissionState::Sending);
            assert!(!validator.button().enabled);
            assert_eq!(validator.button().label, "Sending...");
            assert!(validator.notification().is_none());

            let message = validator.finish_submit().unwrap();
            assert_eq!(message.name, "Alice");
            assert_eq!(message.email, "alice@example.com");
            assert_eq!(message.subject, "Hi");
            assert_eq!(message.message, "Hello");

            assert_eq!(validator.state(), SubmissionState::Idle);
            assert!(validator.button().enabled);
            assert_eq!(validator.button().label, "Send Message");
            for name in FieldName::ALL {
                assert_eq!(validator.form().field(name).as_text(), "");
            }

            let notification = validator.notification().unwrap();
            assert_eq!(notification.kind, NotificationKind::Success);
            assert_eq!(
                notification.message,
                "Message sent successfully! I'll get back to you soon."
            );

            let gone = notification.shown_at + Duration::from_millis(3300);
            validator.expire_notification(gone - Duration::from_millis(400));
            assert!(validator.notification().is_some());
            validator.expire_notification(gone);
            assert!(validator.notification().is_none());
        }

        #[test]
        fn test_submit_awaits_injected_delay() {
            let mut validator = FormValidator::default();
            fill(&mut validator, ALICE);
            let delay = immediate_delay();

            let outcome = tokio_test::block_on(validator.submit(&delay));

            match outcome {
                SubmissionOutcome::Sent(message) => assert_eq!(message.name, "Alice"),
                other => panic!("expected Sent, got {other:?}"),
            }
            assert_eq!(validator.state(), SubmissionState::Idle);
            assert!(validator.notification().is_some());
        }

        #[test]
        fn test_invalid_email_is_rejected_without_touching_control() {
            let mut validator = FormValidator::default();
            fill(&mut validator, ALICE);
            validator.set_value(FieldName::Email, "not-an-email");

            let mut delay = MockSubmissionDelay::new();
            delay.expect_wait().never();

            let outcome = tokio_test::block_on(validator.submit(&delay));

            assert_eq!(outcome, SubmissionOutcome::Rejected);
            assert_eq!(validator.state(), SubmissionState::Idle);
            assert_eq!(validator.error_count(), 1);
            assert!(validator.is_invalid(FieldName::Email));
            assert!(validator.button().enabled);
            assert_eq!(validator.button().label, "Send Message");
            assert!(validator.notification().is_none());
            assert_eq!(validator.form().name.as_text(), "Alice");
        }

        #[test]
        fn test_empty_form_is_rejected() {
            let mut validator = FormValidator::default();
            assert_eq!(validator.begin_submit(), SubmissionOutcome::Rejected);
            assert_eq!(validator.error_count(), 4);
            assert!(validator.finish_submit().is_none());
        }

        #[test]
        fn test_second_submit_while_sending_is_ignored() {
            let mut validator = FormValidator::default();
            fill(&mut validator, ALICE);

            assert_eq!(validator.begin_submit(), SubmissionOutcome::Sending);
            assert_eq!(validator.begin_submit(), SubmissionOutcome::AlreadySending);
            assert_eq!(validator.state(), SubmissionState::Sending);

            assert!(validator.finish_submit().is_some());
            assert!(validator.finish_submit().is_none());
        }

        #[test]
        fn test_finish_without_begin_is_noop() {
            let mut validator = FormValidator::default();
            fill(&mut validator, ALICE);
            assert!(validator.finish_submit().is_none());
            assert_eq!(validator.form().name.as_text(), "Alice");
            assert!(validator.notification().is_none());
        }

        #[test]
        fn test_configured_labels_and_message() {
            let config = FolioConfig {
                submit_label: Some("Send".to_string()),
                busy_label: Some("Wait".to_string()),
                success_message: Some("Thanks!".to_string()),
                ..Default::default()
            };
            let mut validator = FormValidator::new(&config);
            fill(&mut validator, ALICE);

            validator.begin_submit();
            assert_eq!(validator.button().label, "Wait");
            validator.finish_submit();
            assert_eq!(validator.button().label, "Send");
            assert_eq!(validator.notification().unwrap().message, "Thanks!");
        }
    }
}
