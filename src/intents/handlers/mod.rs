//! Per-request handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

pub mod builtin;
pub mod notify;
pub mod session;

use std::sync::Arc;

use super::handler::RequestHandler;
use super::registry::HandlerRegistry;

/// Create all skill handlers in routing order
pub fn create_all_handlers() -> Vec<Arc<dyn RequestHandler>> {
    vec![
        Arc::new(session::LaunchHandler),
        Arc::new(notify::NotifyMeHandler),
        Arc::new(builtin::CancelAndStopHandler),
        Arc::new(builtin::FallbackIntentHandler),
        Arc::new(session::SessionEndedHandler),
    ]
}

/// Registry holding every skill handler
pub fn default_registry() -> HandlerRegistry {
    create_all_handlers()
        .into_iter()
        .fold(HandlerRegistry::builder(), |builder, handler| builder.register(handler))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_order() {
        let names: Vec<_> = default_registry().handler_names().collect();
        assert_eq!(
            names,
            vec!["launch", "notify_me", "cancel_and_stop", "fallback_intent", "session_ended"]
        );
    }
}
