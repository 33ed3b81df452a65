//! Ordered handler registry
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: First-match registry built once through [`RegistryBuilder`]

use log::debug;
use std::sync::Arc;

use super::context::HandlerContext;
use super::handler::RequestHandler;
use crate::core::error::SkillError;
use crate::core::request::IncomingRequest;
use crate::core::response::Response;

/// Collects handlers in order, then freezes them into a [`HandlerRegistry`]
///
/// # Example
///
/// ```ignore
/// let registry = HandlerRegistry::builder()
///     .register(Arc::new(LaunchHandler))
///     .register(Arc::new(CancelAndStopHandler))
///     .build();
///
/// let response = registry.dispatch(&ctx, &request).await?;
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    handlers: Vec<Arc<dyn RequestHandler>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler; earlier registrations win ties
    pub fn register(mut self, handler: Arc<dyn RequestHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn build(self) -> HandlerRegistry {
        HandlerRegistry {
            handlers: self.handlers.into(),
        }
    }
}

/// Immutable, ordered list of handlers
///
/// Holds no interior mutability, so one instance can serve concurrent requests.
#[derive(Clone)]
pub struct HandlerRegistry {
    handlers: Arc<[Arc<dyn RequestHandler>]>,
}

impl HandlerRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// First handler whose predicate accepts the request
    pub fn resolve(
        &self,
        request: &IncomingRequest,
    ) -> Result<&Arc<dyn RequestHandler>, SkillError> {
        self.handlers
            .iter()
            .find(|handler| handler.can_handle(request))
            .ok_or_else(|| SkillError::NoHandlerMatched {
                request_type: describe(request),
            })
    }

    /// Resolve and run the handler for a request
    pub async fn dispatch(
        &self,
        ctx: &HandlerContext,
        request: &IncomingRequest,
    ) -> Result<Response, SkillError> {
        let handler = self.resolve(request)?;
        debug!("[{}] 🎯 Routed to handler: {}", request.request_id, handler.name());
        handler.handle(ctx, request).await
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handler names in registration order
    pub fn handler_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.iter().map(|h| h.name())
    }
}

fn describe(request: &IncomingRequest) -> String {
    match request.intent_name() {
        Some(intent) => format!("{}({intent})", request.request_type()),
        None => request.request_type().to_string(),
    }
}
