//! Reminder orchestration
//!
//! Builds the reminder payload and performs exactly one downstream create call.
//! Outcomes are classified, never presented: turning a failure into speech is
//! the caller's job.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation replacing the database-backed scheduler

use chrono::NaiveDateTime;
use log::{error, info};
use std::sync::Arc;

use super::client::{ApiCredentials, ReminderService, ServiceError};
use super::model::{
    AlertInfo, PushNotification, PushNotificationStatus, ReminderRequest, SpokenInfo, SpokenText,
    Trigger, SCHEDULED_TIME_FORMAT,
};
use crate::core::config::Config;
use crate::core::error::{ErrorKind, SkillError};
use crate::core::request::IncomingRequest;
use crate::core::response::to_ssml;

/// Result of one create attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceOutcome {
    Success {
        reminder_id: String,
    },
    Failure {
        kind: ErrorKind,
        status: Option<u16>,
        message: String,
    },
}

impl ServiceOutcome {
    fn from_error(err: &ServiceError) -> Self {
        ServiceOutcome::Failure {
            kind: ErrorKind::DownstreamServiceError,
            status: err.status(),
            message: err.to_string(),
        }
    }

    pub fn into_result(self) -> Result<String, SkillError> {
        match self {
            ServiceOutcome::Success { reminder_id } => Ok(reminder_id),
            ServiceOutcome::Failure {
                status, message, ..
            } => Err(SkillError::DownstreamService { status, message }),
        }
    }
}

/// Deployment-fixed parts of every reminder
#[derive(Debug, Clone)]
pub struct ReminderTemplate {
    pub scheduled_time: NaiveDateTime,
    pub time_zone_id: String,
    pub locale: String,
    pub text: String,
}

impl ReminderTemplate {
    pub fn from_config(config: &Config) -> Self {
        Self {
            scheduled_time: config.reminder_time,
            time_zone_id: config.time_zone_id.clone(),
            locale: config.reminder_locale.clone(),
            text: config.reminder_text.clone(),
        }
    }

    /// The schedule is fixed per deployment; slot values are not consulted.
    pub fn build_request(&self) -> ReminderRequest {
        ReminderRequest {
            request_time: self.scheduled_time.format(SCHEDULED_TIME_FORMAT).to_string(),
            trigger: Trigger::absolute(self.scheduled_time, self.time_zone_id.clone()),
            alert_info: AlertInfo {
                spoken_info: SpokenInfo {
                    content: vec![SpokenText {
                        locale: self.locale.clone(),
                        ssml: to_ssml(&self.text),
                        text: self.text.clone(),
                    }],
                },
            },
            push_notification: PushNotification {
                status: PushNotificationStatus::Enabled,
            },
        }
    }
}

#[derive(Clone)]
pub struct ReminderOrchestrator {
    service: Arc<dyn ReminderService>,
    template: ReminderTemplate,
}

impl ReminderOrchestrator {
    pub fn new(service: Arc<dyn ReminderService>, template: ReminderTemplate) -> Self {
        Self { service, template }
    }

    /// Create the reminder. Only call after the permission gate granted.
    pub async fn create_reminder(&self, request: &IncomingRequest) -> ServiceOutcome {
        let credentials = match credentials_for(request) {
            Some(c) => c,
            None => {
                let err = ServiceError::MissingCredentials;
                error!("[{}] ❌ Cannot create reminder: {err}", request.request_id);
                return ServiceOutcome::from_error(&err);
            }
        };

        let payload = self.template.build_request();
        match self.service.create_reminder(&credentials, &payload).await {
            Ok(created) => {
                info!(
                    "[{}] ⏰ Reminder {} created for {} ({})",
                    request.request_id,
                    created.alert_token,
                    payload.request_time,
                    self.template.time_zone_id
                );
                ServiceOutcome::Success {
                    reminder_id: created.alert_token,
                }
            }
            Err(e) => {
                error!("[{}] ❌ Reminder service failed: {e}", request.request_id);
                ServiceOutcome::from_error(&e)
            }
        }
    }
}

fn credentials_for(request: &IncomingRequest) -> Option<ApiCredentials> {
    let endpoint = request.context.api_endpoint.clone()?;
    let access_token = request.context.api_access_token.clone()?;
    Some(ApiCredentials {
        endpoint,
        access_token,
    })
}
