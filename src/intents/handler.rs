//! Request handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Predicate-based handlers replacing name-keyed dispatch

use async_trait::async_trait;

use super::context::HandlerContext;
use crate::core::error::SkillError;
use crate::core::request::IncomingRequest;
use crate::core::response::Response;

/// A predicate paired with the action it guards
///
/// `can_handle` must be a pure function of the request. The registry asks
/// handlers in registration order and runs the first that accepts.
///
/// # Example
///
/// ```ignore
/// pub struct LaunchHandler;
///
/// #[async_trait]
/// impl RequestHandler for LaunchHandler {
///     fn name(&self) -> &'static str {
///         "launch"
///     }
///
///     fn can_handle(&self, request: &IncomingRequest) -> bool {
///         request.is_request_type(LAUNCH_REQUEST)
///     }
///
///     async fn handle(
///         &self,
///         _ctx: &HandlerContext,
///         _request: &IncomingRequest,
///     ) -> Result<Response, SkillError> {
///         ResponseDraft::new().speak("Welcome").finalize_for(self.name())
///     }
/// }
/// ```
#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Short name used in logs and error reports
    fn name(&self) -> &'static str;

    fn can_handle(&self, request: &IncomingRequest) -> bool;

    async fn handle(
        &self,
        ctx: &HandlerContext,
        request: &IncomingRequest,
    ) -> Result<Response, SkillError>;
}
