//! Fakes shared by handler tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::context::HandlerContext;
use crate::core::config::{Config, DEFAULT_REQUIRED_PERMISSION};
use crate::core::request::{IncomingRequest, RequestContext};
use crate::features::reminders::{
    ApiCredentials, ReminderCreated, ReminderRequest, ReminderService, ServiceError,
};

/// Reminder service fake: counts calls, keeps payloads, optionally fails
#[derive(Default)]
pub struct FakeReminderService {
    pub calls: AtomicUsize,
    pub payloads: Mutex<Vec<ReminderRequest>>,
    pub fail_with: Option<u16>,
}

impl FakeReminderService {
    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReminderService for FakeReminderService {
    async fn create_reminder(
        &self,
        _credentials: &ApiCredentials,
        request: &ReminderRequest,
    ) -> Result<ReminderCreated, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.payloads.lock().unwrap().push(request.clone());
        match self.fail_with {
            Some(status) => Err(ServiceError::Rejected {
                status,
                code: Some("INTERNAL_SERVER_ERROR".to_string()),
                message: "boom".to_string(),
            }),
            None => Ok(ReminderCreated {
                alert_token: "alert-1".to_string(),
                status: Some("ON".to_string()),
            }),
        }
    }
}

pub fn test_context() -> HandlerContext {
    context_with(Arc::new(FakeReminderService::default()))
}

pub fn context_with(service: Arc<FakeReminderService>) -> HandlerContext {
    HandlerContext::from_config(&Config::default(), service)
}

/// Intent request carrying a consent token, the reminders scope and API access
pub fn consented(intent: &str) -> IncomingRequest {
    IncomingRequest::intent(intent).with_context(RequestContext {
        granted_scopes: [DEFAULT_REQUIRED_PERMISSION.to_string()].into_iter().collect(),
        consent_token: Some("consent-token".to_string()),
        api_endpoint: Some("https://api.amazonalexa.com".to_string()),
        api_access_token: Some("access-token".to_string()),
    })
}
