//! Reminders API client
//!
//! The access token and endpoint travel with each request envelope; this client
//! only carries them to the API and never refreshes or stores them.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use async_trait::async_trait;
use log::{debug, warn};
use std::time::Duration;
use thiserror::Error;

use super::model::{ApiErrorBody, ReminderCreated, ReminderRequest};

pub const REMINDERS_PATH: &str = "/v1/alerts/reminders";

/// Endpoint and bearer token for one request's API calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub endpoint: String,
    pub access_token: String,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request context carries no API endpoint or access token")]
    MissingCredentials,

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("{}", rejected_message(*status, code.as_deref(), message))]
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("unreadable response: {0}")]
    InvalidResponse(String),
}

fn rejected_message(status: u16, code: Option<&str>, message: &str) -> String {
    match code {
        Some(code) => format!("HTTP {status} {code}: {message}"),
        None => format!("HTTP {status}: {message}"),
    }
}

impl ServiceError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Downstream reminder creation
#[async_trait]
pub trait ReminderService: Send + Sync {
    async fn create_reminder(
        &self,
        credentials: &ApiCredentials,
        request: &ReminderRequest,
    ) -> Result<ReminderCreated, ServiceError>;
}

/// HTTP implementation over the reminders REST API
#[derive(Clone)]
pub struct HttpReminderClient {
    client: reqwest::Client,
}

impl HttpReminderClient {
    pub fn new(timeout_secs: u64) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("remindify/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ReminderService for HttpReminderClient {
    async fn create_reminder(
        &self,
        credentials: &ApiCredentials,
        request: &ReminderRequest,
    ) -> Result<ReminderCreated, ServiceError> {
        let url = format!("{}{}", credentials.endpoint.trim_end_matches('/'), REMINDERS_PATH);
        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&credentials.access_token)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ServiceError::Transport("request timed out".to_string())
                } else if e.is_connect() {
                    ServiceError::Transport("could not connect to the reminders API".to_string())
                } else {
                    ServiceError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let parsed: ApiErrorBody = serde_json::from_str(&body).unwrap_or_default();
            warn!("Reminders API returned HTTP {status}: {body}");
            return Err(ServiceError::Rejected {
                status: status.as_u16(),
                code: parsed.code,
                message: parsed
                    .message
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string()),
            });
        }

        response
            .json::<ReminderCreated>()
            .await
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reminders::model::{
        AlertInfo, PushNotification, PushNotificationStatus, SpokenInfo, SpokenText, Trigger,
    };
    use wiremock::matchers::{bearer_token, body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_request() -> ReminderRequest {
        ReminderRequest {
            request_time: "2018-12-30T17:50:00.000".to_string(),
            trigger: Trigger::relative(60),
            alert_info: AlertInfo {
                spoken_info: SpokenInfo {
                    content: vec![SpokenText {
                        locale: "en-US".to_string(),
                        ssml: "<speak>This is your reminder</speak>".to_string(),
                        text: "This is your reminder".to_string(),
                    }],
                },
            },
            push_notification: PushNotification {
                status: PushNotificationStatus::Enabled,
            },
        }
    }

    fn credentials(endpoint: &str) -> ApiCredentials {
        ApiCredentials {
            endpoint: endpoint.to_string(),
            access_token: "token-123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_reminder_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(REMINDERS_PATH))
            .and(bearer_token("token-123"))
            .and(body_partial_json(serde_json::json!({
                "trigger": {"type": "SCHEDULED_RELATIVE"},
                "pushNotification": {"status": "ENABLED"}
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"alertToken": "alert-1", "status": "ON"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpReminderClient::new(5).unwrap();
        let created = client
            .create_reminder(&credentials(&server.uri()), &sample_request())
            .await
            .unwrap();
        assert_eq!(created.alert_token, "alert-1");
    }

    #[tokio::test]
    async fn test_create_reminder_rejected_with_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(REMINDERS_PATH))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "code": "MAX_REMINDERS_EXCEEDED",
                "message": "Customer has reached the max number of reminders"
            })))
            .mount(&server)
            .await;

        let client = HttpReminderClient::new(5).unwrap();
        let err = client
            .create_reminder(&credentials(&server.uri()), &sample_request())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(403));
        match err {
            ServiceError::Rejected { code, message, .. } => {
                assert_eq!(code.as_deref(), Some("MAX_REMINDERS_EXCEEDED"));
                assert!(message.contains("max number"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_create_reminder_rejected_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = HttpReminderClient::new(5).unwrap();
        // Trailing slash on the endpoint must not double up
        let endpoint = format!("{}/", server.uri());
        let err = client
            .create_reminder(&credentials(&endpoint), &sample_request())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[tokio::test]
    async fn test_create_reminder_unreadable_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = HttpReminderClient::new(5).unwrap();
        let err = client
            .create_reminder(&credentials(&server.uri()), &sample_request())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidResponse(_)));
    }
}
