// Core layer - request/response types, configuration, errors
pub mod core;

// Features layer - permission gate and reminders
pub mod features;

// Application layer
pub mod dispatcher;
pub mod intents;

// Re-export commonly used items
pub use crate::core::{Card, Config, IncomingRequest, Response, ResponseDraft, SkillError};
pub use dispatcher::Dispatcher;

pub use features::{PermissionDecision, PermissionGate, ReminderOrchestrator, ServiceOutcome};
pub use features::reminders::{HttpReminderClient, ReminderService};
pub use intents::{HandlerContext, HandlerRegistry, RequestHandler};
