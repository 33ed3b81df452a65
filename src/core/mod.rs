//! # Core Module
//!
//! Request and response types, configuration, and the error taxonomy.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod config;
pub mod error;
pub mod request;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use error::{ErrorKind, SkillError};
pub use request::{IncomingRequest, RequestContext, RequestKind, Slot};
pub use response::{to_ssml, Card, Response, ResponseDraft};
