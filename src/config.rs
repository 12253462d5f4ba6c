//! Configuration handling for the TUI

use crate::submit::DEFAULT_SUBMIT_DELAY;
use anyhow::Result;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the simulated send delay (milliseconds)
const SUBMIT_DELAY_ENV: &str = "FOLIO_SUBMIT_DELAY_MS";

const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3000;
const DEFAULT_SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
const DEFAULT_SUBMIT_LABEL: &str = "Send Message";
const DEFAULT_BUSY_LABEL: &str = "Sending...";

/// User configuration for the TUI
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FolioConfig {
    /// Simulated network latency for a submission
    pub submit_delay_ms: Option<u64>,
    /// How long the success notification stays on screen
    pub notification_duration_ms: Option<u64>,
    /// Text of the success notification
    pub success_message: Option<String>,
    /// Submit button label
    pub submit_label: Option<String>,
    /// Submit button label while sending
    pub busy_label: Option<String>,
}

impl FolioConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "folio", "folio-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FolioConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration, falling back to defaults on error, then apply
    /// environment overrides. The load error is handed back for display.
    pub fn load_or_default() -> (Self, Option<anyhow::Error>) {
        let (config, error) = match Self::load() {
            Ok(config) => (config, None),
            Err(err) => {
                tracing::warn!("Failed to load config, using defaults: {err:#}");
                (Self::default(), Some(err))
            }
        };
        let env = std::env::var(SUBMIT_DELAY_ENV).ok();
        (config.with_env_overrides(env.as_deref()), error)
    }

    /// Apply an override for the submit delay, ignoring unparsable values
    pub fn with_env_overrides(mut self, submit_delay: Option<&str>) -> Self {
        if let Some(raw) = submit_delay {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.submit_delay_ms = Some(ms),
                Err(_) => tracing::warn!("Ignoring invalid {SUBMIT_DELAY_ENV}={raw:?}"),
            }
        }
        self
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SUBMIT_DELAY)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(
            self.notification_duration_ms
                .unwrap_or(DEFAULT_NOTIFICATION_DURATION_MS),
        )
    }

    pub fn success_message(&self) -> &str {
        self.success_message
            .as_deref()
            .unwrap_or(DEFAULT_SUCCESS_MESSAGE)
    }

    pub fn submit_label(&self) -> &str {
        self.submit_label.as_deref().unwrap_or(DEFAULT_SUBMIT_LABEL)
    }

    pub fn busy_label(&self) -> &str {
        self.busy_label.as_deref().unwrap_or(DEFAULT_BUSY_LABEL)
    }
}
