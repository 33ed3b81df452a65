//! Incoming request model and envelope decoding
//!
//! The host delivers one JSON envelope per invocation. It is decoded once into
//! an [`IncomingRequest`], which handlers inspect but never mutate.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};

use super::error::SkillError;

pub const LAUNCH_REQUEST: &str = "LaunchRequest";
pub const INTENT_REQUEST: &str = "IntentRequest";
pub const SESSION_ENDED_REQUEST: &str = "SessionEndedRequest";

/// Scope status value meaning the user granted it
const SCOPE_GRANTED: &str = "GRANTED";

/// A recognized slot value attached to an intent
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// What the user asked for
#[derive(Debug, Clone, PartialEq)]
pub enum RequestKind {
    Launch,
    Intent {
        name: String,
        slots: HashMap<String, Slot>,
    },
    SessionEnded {
        reason: Option<String>,
    },
    /// A request type this skill has no model for
    Other {
        request_type: String,
    },
}

/// Permission and service-access state attached to a request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestContext {
    /// Scopes whose status is `GRANTED`. Hosts must send the `scopes` map;
    /// a consent token alone grants nothing.
    pub granted_scopes: BTreeSet<String>,
    pub consent_token: Option<String>,
    pub api_endpoint: Option<String>,
    pub api_access_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncomingRequest {
    pub request_id: String,
    pub locale: Option<String>,
    pub kind: RequestKind,
    pub context: RequestContext,
}

impl IncomingRequest {
    pub fn new(kind: RequestKind) -> Self {
        Self {
            request_id: String::new(),
            locale: None,
            kind,
            context: RequestContext::default(),
        }
    }

    pub fn launch() -> Self {
        Self::new(RequestKind::Launch)
    }

    pub fn intent(name: impl Into<String>) -> Self {
        Self::new(RequestKind::Intent {
            name: name.into(),
            slots: HashMap::new(),
        })
    }

    pub fn session_ended(reason: Option<String>) -> Self {
        Self::new(RequestKind::SessionEnded { reason })
    }

    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.context = context;
        self
    }

    /// Wire name of the request type, e.g. `IntentRequest`
    pub fn request_type(&self) -> &str {
        match &self.kind {
            RequestKind::Launch => LAUNCH_REQUEST,
            RequestKind::Intent { .. } => INTENT_REQUEST,
            RequestKind::SessionEnded { .. } => SESSION_ENDED_REQUEST,
            RequestKind::Other { request_type } => request_type,
        }
    }

    pub fn is_request_type(&self, request_type: &str) -> bool {
        self.request_type() == request_type
    }

    pub fn intent_name(&self) -> Option<&str> {
        match &self.kind {
            RequestKind::Intent { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_intent_name(&self, name: &str) -> bool {
        self.intent_name() == Some(name)
    }

    pub fn slot_value(&self, slot: &str) -> Option<&str> {
        match &self.kind {
            RequestKind::Intent { slots, .. } => slots.get(slot)?.value.as_deref(),
            _ => None,
        }
    }

    /// Decode a host request envelope
    pub fn from_json(raw: &str) -> Result<Self, SkillError> {
        let envelope: RequestEnvelope = serde_json::from_str(raw)?;
        Ok(envelope.into())
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct RequestEnvelope {
    #[serde(default)]
    session: Option<WireSession>,
    #[serde(default)]
    context: Option<WireContext>,
    request: WireRequest,
}

#[derive(Debug, Deserialize)]
struct WireSession {
    #[serde(default)]
    user: Option<WireUser>,
}

#[derive(Debug, Deserialize)]
struct WireContext {
    #[serde(rename = "System")]
    system: Option<WireSystem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSystem {
    #[serde(default)]
    api_endpoint: Option<String>,
    #[serde(default)]
    api_access_token: Option<String>,
    #[serde(default)]
    user: Option<WireUser>,
}

#[derive(Debug, Deserialize)]
struct WireUser {
    #[serde(default)]
    permissions: Option<WirePermissions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePermissions {
    #[serde(default)]
    consent_token: Option<String>,
    #[serde(default)]
    scopes: HashMap<String, WireScope>,
}

#[derive(Debug, Deserialize)]
struct WireScope {
    status: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest {
    #[serde(rename = "type")]
    request_type: String,
    #[serde(default)]
    request_id: String,
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    intent: Option<WireIntent>,
    #[serde(default)]
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireIntent {
    name: String,
    #[serde(default)]
    slots: HashMap<String, Slot>,
}

impl From<RequestEnvelope> for IncomingRequest {
    fn from(envelope: RequestEnvelope) -> Self {
        let system = envelope.context.and_then(|c| c.system);
        let (api_endpoint, api_access_token, system_user) = match system {
            Some(s) => (s.api_endpoint, s.api_access_token, s.user),
            None => (None, None, None),
        };

        // Older envelopes only carry permissions on the session user
        let permissions = system_user
            .and_then(|u| u.permissions)
            .or_else(|| envelope.session.and_then(|s| s.user).and_then(|u| u.permissions));

        let (consent_token, granted_scopes) = match permissions {
            Some(p) => {
                let granted = p
                    .scopes
                    .into_iter()
                    .filter(|(_, scope)| scope.status == SCOPE_GRANTED)
                    .map(|(name, _)| name)
                    .collect();
                (p.consent_token.filter(|t| !t.is_empty()), granted)
            }
            None => (None, BTreeSet::new()),
        };

        let request = envelope.request;
        let kind = match request.request_type.as_str() {
            LAUNCH_REQUEST => RequestKind::Launch,
            SESSION_ENDED_REQUEST => RequestKind::SessionEnded {
                reason: request.reason,
            },
            INTENT_REQUEST => match request.intent {
                Some(intent) => RequestKind::Intent {
                    name: intent.name,
                    slots: intent.slots,
                },
                None => RequestKind::Other {
                    request_type: request.request_type,
                },
            },
            _ => RequestKind::Other {
                request_type: request.request_type,
            },
        };

        IncomingRequest {
            request_id: request.request_id,
            locale: request.locale,
            kind,
            context: RequestContext {
                granted_scopes,
                consent_token,
                api_endpoint,
                api_access_token,
            },
        }
    }
}
