//! # Reminders Feature
//!
//! Permission-gated reminder creation through the downstream reminders API.
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Reminders API client and orchestrator

pub mod client;
pub mod model;
pub mod orchestrator;

pub use client::{ApiCredentials, HttpReminderClient, ReminderService, ServiceError};
pub use model::{ReminderCreated, ReminderRequest, Trigger, TriggerType};
pub use orchestrator::{ReminderOrchestrator, ReminderTemplate, ServiceOutcome};
