//! # Feature: Permission Gate
//!
//! Decides whether a consent-gated action may run for a request. Decisions are
//! derived fresh from each request's context and never cached, since users can
//! grant or revoke scopes between sessions.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use std::collections::BTreeSet;

use crate::core::request::RequestContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionDecision {
    Granted,
    Denied { missing_scopes: BTreeSet<String> },
}

impl PermissionDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionDecision::Granted)
    }
}

/// Checks requests against a fixed set of required scopes
#[derive(Debug, Clone)]
pub struct PermissionGate {
    required_scopes: Vec<String>,
}

impl PermissionGate {
    pub fn new(required_scopes: Vec<String>) -> Self {
        Self { required_scopes }
    }

    /// Scopes in configuration order, as a consent card should list them
    pub fn required_scopes(&self) -> &[String] {
        &self.required_scopes
    }

    pub fn check(&self, context: &RequestContext) -> PermissionDecision {
        check(context, &self.required_scopes)
    }
}

/// Without a consent token every required scope counts as missing.
pub fn check(context: &RequestContext, required_scopes: &[String]) -> PermissionDecision {
    let missing_scopes: BTreeSet<String> = if context.consent_token.is_none() {
        required_scopes.iter().cloned().collect()
    } else {
        required_scopes
            .iter()
            .filter(|scope| !context.granted_scopes.contains(scope.as_str()))
            .cloned()
            .collect()
    };

    if context.consent_token.is_none() || !missing_scopes.is_empty() {
        PermissionDecision::Denied { missing_scopes }
    } else {
        PermissionDecision::Granted
    }
}
