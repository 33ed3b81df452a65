//! Built-in intent handlers
//!
//! Handles: AMAZON.CancelIntent, AMAZON.StopIntent, AMAZON.FallbackIntent
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use async_trait::async_trait;

use crate::core::error::SkillError;
use crate::core::request::IncomingRequest;
use crate::core::response::{Card, Response, ResponseDraft};
use crate::intents::context::HandlerContext;
use crate::intents::handler::RequestHandler;

pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const FALLBACK_INTENT: &str = "AMAZON.FallbackIntent";

pub const GOODBYE_SPEECH: &str = "Goodbye!";
pub const FALLBACK_SPEECH: &str = "The remindify skill can't help you with that.  You can say hello!!";
pub const FALLBACK_REPROMPT: &str = "You can say notify me to create a reminder.";

/// Single handler for both Cancel and Stop
pub struct CancelAndStopHandler;

#[async_trait]
impl RequestHandler for CancelAndStopHandler {
    fn name(&self) -> &'static str {
        "cancel_and_stop"
    }

    fn can_handle(&self, request: &IncomingRequest) -> bool {
        request.is_intent_name(CANCEL_INTENT) || request.is_intent_name(STOP_INTENT)
    }

    async fn handle(
        &self,
        _ctx: &HandlerContext,
        _request: &IncomingRequest,
    ) -> Result<Response, SkillError> {
        ResponseDraft::new()
            .speak(GOODBYE_SPEECH)
            .with_card(Card::simple("Remindify", GOODBYE_SPEECH))
            .finalize_for(self.name())
    }
}

/// Utterances the model could not map to any skill intent
pub struct FallbackIntentHandler;

#[async_trait]
impl RequestHandler for FallbackIntentHandler {
    fn name(&self) -> &'static str {
        "fallback_intent"
    }

    fn can_handle(&self, request: &IncomingRequest) -> bool {
        request.is_intent_name(FALLBACK_INTENT)
    }

    async fn handle(
        &self,
        _ctx: &HandlerContext,
        _request: &IncomingRequest,
    ) -> Result<Response, SkillError> {
        ResponseDraft::new()
            .speak(FALLBACK_SPEECH)
            .ask(FALLBACK_REPROMPT)
            .finalize_for(self.name())
    }
}
