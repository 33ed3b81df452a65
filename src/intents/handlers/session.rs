//! Session lifecycle handlers
//!
//! Handles: LaunchRequest, SessionEndedRequest
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use async_trait::async_trait;
use log::info;

use crate::core::error::SkillError;
use crate::core::request::{IncomingRequest, RequestKind, LAUNCH_REQUEST, SESSION_ENDED_REQUEST};
use crate::core::response::{Card, Response, ResponseDraft};
use crate::intents::context::HandlerContext;
use crate::intents::handler::RequestHandler;

pub const WELCOME_SPEECH: &str = "Welcome to the Alexa Skills Kit, you can say notify me.";

/// Greets the user when the skill is opened without an intent
pub struct LaunchHandler;

#[async_trait]
impl RequestHandler for LaunchHandler {
    fn name(&self) -> &'static str {
        "launch"
    }

    fn can_handle(&self, request: &IncomingRequest) -> bool {
        request.is_request_type(LAUNCH_REQUEST)
    }

    async fn handle(
        &self,
        _ctx: &HandlerContext,
        _request: &IncomingRequest,
    ) -> Result<Response, SkillError> {
        ResponseDraft::new()
            .speak(WELCOME_SPEECH)
            .with_card(Card::simple("Welcome", WELCOME_SPEECH))
            .end_session(false)
            .finalize_for(self.name())
    }
}

/// Acknowledges the end of a session; the host ignores any output here
pub struct SessionEndedHandler;

#[async_trait]
impl RequestHandler for SessionEndedHandler {
    fn name(&self) -> &'static str {
        "session_ended"
    }

    fn can_handle(&self, request: &IncomingRequest) -> bool {
        request.is_request_type(SESSION_ENDED_REQUEST)
    }

    async fn handle(
        &self,
        _ctx: &HandlerContext,
        request: &IncomingRequest,
    ) -> Result<Response, SkillError> {
        if let RequestKind::SessionEnded { reason } = &request.kind {
            info!(
                "[{}] 👋 Session ended: {}",
                request.request_id,
                reason.as_deref().unwrap_or("unspecified")
            );
        }
        Ok(Response::session_ended())
    }
}
