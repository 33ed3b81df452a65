//! # Features
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

pub mod permissions;
pub mod reminders;

pub use permissions::{PermissionDecision, PermissionGate};
pub use reminders::{ReminderOrchestrator, ReminderService, ServiceOutcome};
