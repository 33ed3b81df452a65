//! Reminder intent handler
//!
//! Handles: NotifyMeIntent
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Permission-gated reminder creation

use async_trait::async_trait;
use log::{debug, info};

use crate::core::error::SkillError;
use crate::core::request::IncomingRequest;
use crate::core::response::{Card, Response, ResponseDraft};
use crate::features::permissions::PermissionDecision;
use crate::intents::context::HandlerContext;
use crate::intents::handler::RequestHandler;

pub const NOTIFY_ME_INTENT: &str = "NotifyMeIntent";

pub const CONSENT_SPEECH: &str = "Please give permissions to set reminders using the alexa app.";
pub const CREATED_SPEECH: &str = "reminder created";

/// Creates a reminder once the user has granted the reminders scope
pub struct NotifyMeHandler;

#[async_trait]
impl RequestHandler for NotifyMeHandler {
    fn name(&self) -> &'static str {
        "notify_me"
    }

    fn can_handle(&self, request: &IncomingRequest) -> bool {
        request.is_intent_name(NOTIFY_ME_INTENT)
    }

    async fn handle(
        &self,
        ctx: &HandlerContext,
        request: &IncomingRequest,
    ) -> Result<Response, SkillError> {
        debug!("[{}] 🔐 Checking reminder permissions", request.request_id);

        if let PermissionDecision::Denied { missing_scopes } =
            ctx.permission_gate.check(&request.context)
        {
            let denied = SkillError::PermissionDenied {
                missing_scopes: missing_scopes.into_iter().collect(),
            };
            info!("[{}] 🚫 {denied}, asking for consent", request.request_id);

            // The card names the configured scopes, not only the missing ones
            return ResponseDraft::new()
                .speak(CONSENT_SPEECH)
                .with_card(Card::ask_for_permissions(
                    ctx.permission_gate.required_scopes().iter().cloned(),
                ))
                .finalize_for(self.name());
        }

        debug!("[{}] ⏰ Permissions granted, creating reminder", request.request_id);
        let reminder_id = ctx.reminders.create_reminder(request).await.into_result()?;
        debug!("[{}] ✅ Reminder id: {reminder_id}", request.request_id);

        ResponseDraft::new()
            .speak(CREATED_SPEECH)
            .with_card(Card::simple("Notify Me", CREATED_SPEECH))
            .end_session(true)
            .finalize_for(self.name())
    }
}
