//! Application state and core logic

use crate::config::FolioConfig;
use crate::state::{
    ContactForm, FieldName, Form, NotificationKind, SubmissionOutcome, SubmissionState,
};
use crate::submit::{SubmissionDelay, TimerDelay};
use crate::validator::FormValidator;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Events delivered back to the UI loop from background tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The simulated send delay has elapsed
    SubmissionDelivered,
}

/// Main application struct
pub struct App {
    /// Form values, annotations and submit state
    pub validator: FormValidator,
    /// Simulated network latency
    delay: Arc<dyn SubmissionDelay>,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Whether the app should quit
    quit: bool,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &FolioConfig) -> Self {
        let delay = TimerDelay::new(config.submit_delay());
        tracing::debug!("Submit delay {:?}", delay.duration());
        Self::with_delay(config, Arc::new(delay))
    }

    pub fn with_delay(config: &FolioConfig, delay: Arc<dyn SubmissionDelay>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            validator: FormValidator::new(config),
            delay,
            events_tx,
            events_rx,
            quit: false,
            status_message: None,
        }
    }

    /// Tell the user their config file was ignored
    pub fn report_config_error(&mut self, err: &anyhow::Error) {
        self.validator
            .notify(format!("Config ignored: {err}"), NotificationKind::Error);
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether something on screen is moving and needs fast redraws
    pub fn is_animating(&self) -> bool {
        self.validator.notification().is_some()
            || self.validator.state() == SubmissionState::Sending
    }

    /// Advance time-based state
    pub fn tick(&mut self, now: Instant) {
        self.validator.expire_notification(now);
    }

    /// Drain events posted by background tasks
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SubmissionDelivered => {
                if self.validator.finish_submit().is_some() {
                    self.status_message = None;
                }
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let form = self.validator.form();
        let active = form.active_field_name();
        let on_submit_row = form.is_submit_row_active();

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Char('s') if key.modifiers.intersects(crate::platform::SUBMIT_MODIFIERS) => {
                self.submit();
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.move_focus(true),
            KeyCode::BackTab => self.move_focus(false),
            KeyCode::Down if !self.validator.form().is_active_field_multiline() => {
                self.move_focus(true)
            }
            KeyCode::Up if !self.validator.form().is_active_field_multiline() => {
                self.move_focus(false)
            }
            KeyCode::Enter if on_submit_row => self.submit(),
            KeyCode::Enter => {
                if self.validator.form().is_active_field_multiline() {
                    if let Some(name) = active {
                        self.validator.input_char(name, '\n');
                    }
                } else {
                    self.move_focus(true);
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(name) = active {
                    self.validator.input_char(name, c);
                }
            }
            KeyCode::Backspace => {
                if let Some(name) = active {
                    self.validator.backspace(name);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Move focus, validating the field being left
    fn move_focus(&mut self, forward: bool) {
        if let Some(name) = self.validator.form().active_field_name() {
            self.blur(name);
        }

        let form = self.validator.form_mut();
        if forward {
            form.next_field();
        } else {
            form.prev_field();
        }
    }

    fn blur(&mut self, name: FieldName) {
        if let Err(err) = self.validator.validate_field(name) {
            tracing::debug!(field = %name, kind = ?err.kind, "Blur validation failed");
        }
    }

    /// Start a submission; the delay runs on a background task
    fn submit(&mut self) {
        match self.validator.begin_submit() {
            SubmissionOutcome::Sending => {
                let delay = Arc::clone(&self.delay);
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    delay.wait().await;
                    if tx.send(AppEvent::SubmissionDelivered).is_err() {
                        tracing::debug!("UI loop gone before submission completed");
                    }
                });
                self.status_message = None;
            }
            SubmissionOutcome::Rejected => {
                let count = self.validator.error_count();
                self.status_message = Some(format!(
                    "Please fix {count} field{}",
                    if count == 1 { "" } else { "s" }
                ));
                self.focus_first_error();
            }
            SubmissionOutcome::AlreadySending | SubmissionOutcome::Sent(_) => {}
        }
    }

    fn focus_first_error(&mut self) {
        let first = self.validator.errors().next().map(|e| e.field_name);
        if let Some(first) = first {
            self.validator.form_mut().set_active_field(first.index());
        }
    }

    /// Index of the focused row, including the submit row
    pub fn active_row(&self) -> usize {
        self.validator.form().active_field()
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_row() == ContactForm::SUBMIT_ROW
    }
}
