//! Skill error taxonomy
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Typed errors replacing the catch-anything exception handler

use std::fmt;
use thiserror::Error;

/// Coarse classification of a [`SkillError`], used for logging and outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NoHandlerMatched,
    PermissionDenied,
    DownstreamServiceError,
    EmptyResponse,
    MalformedRequest,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NoHandlerMatched => "NoHandlerMatched",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::DownstreamServiceError => "DownstreamServiceError",
            ErrorKind::EmptyResponse => "EmptyResponse",
            ErrorKind::MalformedRequest => "MalformedRequest",
        };
        f.write_str(name)
    }
}

/// Every failure a request can hit between routing and responding
#[derive(Debug, Error)]
pub enum SkillError {
    /// Registry composition defect: nothing claimed the request
    #[error("no handler matched request type {request_type}")]
    NoHandlerMatched { request_type: String },

    /// The user has not granted the scopes an action needs
    #[error("missing permissions: {}", missing_scopes.join(", "))]
    PermissionDenied { missing_scopes: Vec<String> },

    /// The reminder service rejected or failed the call
    #[error("reminder service failed{}: {message}", status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    DownstreamService { status: Option<u16>, message: String },

    /// A handler finalized a response without ever speaking
    #[error("handler {handler} produced a response without speech")]
    EmptyResponse { handler: &'static str },

    /// The request envelope could not be decoded
    #[error("malformed request envelope: {0}")]
    MalformedRequest(String),
}

impl SkillError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SkillError::NoHandlerMatched { .. } => ErrorKind::NoHandlerMatched,
            SkillError::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            SkillError::DownstreamService { .. } => ErrorKind::DownstreamServiceError,
            SkillError::EmptyResponse { .. } => ErrorKind::EmptyResponse,
            SkillError::MalformedRequest(_) => ErrorKind::MalformedRequest,
        }
    }
}

impl From<serde_json::Error> for SkillError {
    fn from(err: serde_json::Error) -> Self {
        SkillError::MalformedRequest(err.to_string())
    }
}
