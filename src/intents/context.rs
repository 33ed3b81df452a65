//! Shared context for request handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use std::sync::Arc;

use crate::core::config::Config;
use crate::features::permissions::PermissionGate;
use crate::features::reminders::{ReminderOrchestrator, ReminderService, ReminderTemplate};

/// Read-only collaborators every handler can reach
///
/// Built once at startup; nothing in here changes per request.
#[derive(Clone)]
pub struct HandlerContext {
    pub permission_gate: PermissionGate,
    pub reminders: ReminderOrchestrator,
}

impl HandlerContext {
    pub fn new(permission_gate: PermissionGate, reminders: ReminderOrchestrator) -> Self {
        Self {
            permission_gate,
            reminders,
        }
    }

    /// Wire the gate and orchestrator from configuration around a service
    pub fn from_config(config: &Config, service: Arc<dyn ReminderService>) -> Self {
        Self {
            permission_gate: PermissionGate::new(config.required_permissions.clone()),
            reminders: ReminderOrchestrator::new(service, ReminderTemplate::from_config(config)),
        }
    }
}
