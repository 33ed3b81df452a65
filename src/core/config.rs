//! Deployment configuration
//!
//! Loaded once at startup from the environment (after `.env`), immutable
//! afterwards.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDateTime;

pub const DEFAULT_REQUIRED_PERMISSION: &str = "alexa::alerts:reminders:skill:readwrite";
pub const DEFAULT_TIME_ZONE_ID: &str = "America/Chicago";
pub const DEFAULT_REMINDER_TIME: &str = "2018-12-30T17:50:00";
pub const DEFAULT_REMINDER_LOCALE: &str = "en-US";
pub const DEFAULT_REMINDER_TEXT: &str = "This is your reminder";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

const TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

#[derive(Debug, Clone)]
pub struct Config {
    /// Scopes the reminder action needs; also the consent card's list
    pub required_permissions: Vec<String>,
    pub time_zone_id: String,
    /// Scheduled time of every created reminder, local to `time_zone_id`
    pub reminder_time: NaiveDateTime,
    pub reminder_locale: String,
    pub reminder_text: String,
    pub api_timeout_secs: u64,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required_permissions = lookup("REQUIRED_PERMISSIONS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| vec![DEFAULT_REQUIRED_PERMISSION.to_string()]);

        let reminder_time_raw =
            lookup("REMINDER_SCHEDULED_TIME").unwrap_or_else(|| DEFAULT_REMINDER_TIME.to_string());
        let reminder_time = parse_reminder_time(&reminder_time_raw)?;

        let api_timeout_secs = match lookup("REMINDER_API_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid REMINDER_API_TIMEOUT_SECS: {raw}"))?,
            None => DEFAULT_API_TIMEOUT_SECS,
        };

        let config = Config {
            required_permissions,
            time_zone_id: lookup("TIME_ZONE_ID")
                .unwrap_or_else(|| DEFAULT_TIME_ZONE_ID.to_string()),
            reminder_time,
            reminder_locale: lookup("REMINDER_LOCALE")
                .unwrap_or_else(|| DEFAULT_REMINDER_LOCALE.to_string()),
            reminder_text: lookup("REMINDER_TEXT")
                .unwrap_or_else(|| DEFAULT_REMINDER_TEXT.to_string()),
            api_timeout_secs,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.required_permissions.is_empty() {
            return Err(anyhow!("REQUIRED_PERMISSIONS must name at least one scope"));
        }
        if self.time_zone_id.trim().is_empty() {
            return Err(anyhow!("TIME_ZONE_ID must not be empty"));
        }
        if self.reminder_text.trim().is_empty() {
            return Err(anyhow!("REMINDER_TEXT must not be empty"));
        }
        if self.api_timeout_secs == 0 {
            return Err(anyhow!("REMINDER_API_TIMEOUT_SECS must be positive"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            required_permissions: vec![DEFAULT_REQUIRED_PERMISSION.to_string()],
            time_zone_id: DEFAULT_TIME_ZONE_ID.to_string(),
            reminder_time: NaiveDateTime::parse_from_str(DEFAULT_REMINDER_TIME, "%Y-%m-%dT%H:%M:%S")
                .unwrap_or_default(),
            reminder_locale: DEFAULT_REMINDER_LOCALE.to_string(),
            reminder_text: DEFAULT_REMINDER_TEXT.to_string(),
            api_timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            log_level: "info".to_string(),
        }
    }
}

fn parse_reminder_time(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| anyhow!("Invalid REMINDER_SCHEDULED_TIME: {raw}"))
}
