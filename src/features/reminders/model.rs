//! Reminders API payloads
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp layout the reminders API accepts (local time, no offset)
pub const SCHEDULED_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerType {
    ScheduledAbsolute,
    ScheduledRelative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    #[serde(rename = "type")]
    pub trigger_type: TriggerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_in_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone_id: Option<String>,
}

impl Trigger {
    pub fn absolute(at: NaiveDateTime, time_zone_id: impl Into<String>) -> Self {
        Self {
            trigger_type: TriggerType::ScheduledAbsolute,
            scheduled_time: Some(at.format(SCHEDULED_TIME_FORMAT).to_string()),
            offset_in_seconds: None,
            time_zone_id: Some(time_zone_id.into()),
        }
    }

    pub fn relative(offset_in_seconds: u64) -> Self {
        Self {
            trigger_type: TriggerType::ScheduledRelative,
            scheduled_time: None,
            offset_in_seconds: Some(offset_in_seconds),
            time_zone_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpokenText {
    pub locale: String,
    pub ssml: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpokenInfo {
    pub content: Vec<SpokenText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertInfo {
    pub spoken_info: SpokenInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PushNotificationStatus {
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushNotification {
    pub status: PushNotificationStatus,
}

/// Body of `POST /v1/alerts/reminders`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRequest {
    pub request_time: String,
    pub trigger: Trigger,
    pub alert_info: AlertInfo,
    pub push_notification: PushNotification,
}

impl ReminderRequest {
    pub fn push_enabled(&self) -> bool {
        self.push_notification.status == PushNotificationStatus::Enabled
    }
}

/// Success body of the create call
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderCreated {
    pub alert_token: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Error body returned by the reminders API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
