//! # Dispatcher
//!
//! Per-request control flow: route, run the handler, and turn any failure into
//! a spoken apology. This is the only recovery point; nothing beneath it may
//! surface an error to the host.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Typed fallback replacing the catch-all exception handler

use log::{debug, error, info, warn};
use std::sync::Arc;
use uuid::Uuid;

use crate::core::config::Config;
use crate::core::error::SkillError;
use crate::core::request::IncomingRequest;
use crate::core::response::Response;
use crate::features::reminders::ReminderService;
use crate::intents::{default_registry, HandlerContext, HandlerRegistry};

pub const APOLOGY_SPEECH: &str = "Sorry, there was some problem. Please try again!!";

/// Stateless request dispatcher, safe to share across concurrent requests
#[derive(Clone)]
pub struct Dispatcher {
    registry: HandlerRegistry,
    context: Arc<HandlerContext>,
}

impl Dispatcher {
    pub fn new(registry: HandlerRegistry, context: HandlerContext) -> Self {
        Self {
            registry,
            context: Arc::new(context),
        }
    }

    /// Dispatcher with the skill's handlers around the given reminder service
    pub fn from_config(config: &Config, service: Arc<dyn ReminderService>) -> Self {
        Self::new(default_registry(), HandlerContext::from_config(config, service))
    }

    /// Handle one request. Always yields a response.
    ///
    /// `request_id` prefixes every log line for the request; one is minted
    /// when the host sent none.
    pub async fn dispatch(&self, request: &IncomingRequest) -> Response {
        if request.request_id.is_empty() {
            let mut traced = request.clone();
            traced.request_id = Uuid::new_v4().to_string();
            return self.dispatch_traced(&traced).await;
        }
        self.dispatch_traced(request).await
    }

    async fn dispatch_traced(&self, request: &IncomingRequest) -> Response {
        let request_id = &request.request_id;
        info!(
            "[{request_id}] 📥 Request received | Type: {} | Intent: {}",
            request.request_type(),
            request.intent_name().unwrap_or("-")
        );

        match self.registry.dispatch(&self.context, request).await {
            Ok(response) => {
                debug!("[{request_id}] 📤 Responding");
                response
            }
            Err(e) => self.fallback(request_id, e),
        }
    }

    /// Decode a raw envelope and handle it; undecodable input gets the apology
    pub async fn dispatch_json(&self, raw: &str) -> Response {
        match IncomingRequest::from_json(raw) {
            Ok(request) => self.dispatch(&request).await,
            Err(e) => self.fallback(&Uuid::new_v4().to_string(), e),
        }
    }

    fn fallback(&self, request_id: &str, err: SkillError) -> Response {
        match &err {
            SkillError::NoHandlerMatched { .. } => {
                warn!("[{request_id}] 🧭 Routing defect: {err}");
            }
            SkillError::MalformedRequest(_) => {
                warn!("[{request_id}] 📦 Rejected envelope: {err}");
            }
            SkillError::DownstreamService { .. } => {
                error!("[{request_id}] ❌ Downstream failure: {err}");
            }
            SkillError::EmptyResponse { .. } => {
                error!("[{request_id}] 🐛 Handler defect: {err}");
            }
            // Handlers answer denials themselves; reaching here is a defect
            SkillError::PermissionDenied { .. } => {
                error!("[{request_id}] 🐛 Unhandled permission denial: {err}");
            }
        }
        info!("[{request_id}] 🩹 Fallback ({}) → apology", err.kind());
        Response::reprompting(APOLOGY_SPEECH)
    }
}
