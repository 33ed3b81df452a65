//! Response building and host envelope rendering
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Draft/finalize builder, SSML rendering and card limits

use serde::Serialize;

use super::error::SkillError;

/// Host limit on simple card content
pub const CARD_CONTENT_LIMIT: usize = 8000;
/// Envelope version the host expects
pub const RESPONSE_VERSION: &str = "1.0";

/// Visual card shown in the companion app
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple { title: String, content: String },
    AskForPermissionsConsent { permissions: Vec<String> },
}

impl Card {
    pub fn simple(title: impl Into<String>, content: &str) -> Self {
        Card::Simple {
            title: title.into(),
            content: truncate_card_content(content),
        }
    }

    /// Consent card naming exactly the given scopes
    pub fn ask_for_permissions<I, S>(scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Card::AskForPermissionsConsent {
            permissions: scopes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Mutable accumulator for a handler's response
///
/// Every setter consumes and returns the draft; repeated calls overwrite.
#[derive(Debug, Clone, Default)]
pub struct ResponseDraft {
    speech: Option<String>,
    reprompt: Option<String>,
    card: Option<Card>,
    should_end_session: Option<bool>,
}

impl ResponseDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speak(mut self, text: impl Into<String>) -> Self {
        self.speech = Some(text.into());
        self
    }

    /// Set a reprompt; waiting for an answer keeps the session open
    pub fn ask(mut self, reprompt: impl Into<String>) -> Self {
        self.reprompt = Some(reprompt.into());
        self.should_end_session = Some(false);
        self
    }

    pub fn with_card(mut self, card: Card) -> Self {
        self.card = Some(card);
        self
    }

    pub fn end_session(mut self, end: bool) -> Self {
        self.should_end_session = Some(end);
        self
    }

    /// Freeze the draft. Fails if nothing was spoken.
    pub fn finalize(self) -> Result<Response, SkillError> {
        self.finalize_for("unknown")
    }

    /// Like [`finalize`](Self::finalize), naming the handler in the error
    pub fn finalize_for(self, handler: &'static str) -> Result<Response, SkillError> {
        let speech = match self.speech {
            Some(s) if !s.trim().is_empty() => s,
            _ => return Err(SkillError::EmptyResponse { handler }),
        };

        Ok(Response {
            speech: Some(speech),
            reprompt: self.reprompt,
            card: self.card,
            should_end_session: self.should_end_session,
        })
    }
}

/// Immutable response handed back to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    speech: Option<String>,
    reprompt: Option<String>,
    card: Option<Card>,
    should_end_session: Option<bool>,
}

impl Response {
    /// Acknowledgement for a session that already ended.
    ///
    /// The host discards output at this point, so this is the only response
    /// allowed to carry no speech.
    pub fn session_ended() -> Self {
        Self {
            speech: None,
            reprompt: None,
            card: None,
            should_end_session: None,
        }
    }

    /// Speech repeated as the reprompt, keeping the session open.
    ///
    /// Infallible, for recovery paths that cannot go through `finalize`.
    pub fn reprompting(text: &'static str) -> Self {
        Self {
            speech: Some(text.to_string()),
            reprompt: Some(text.to_string()),
            card: None,
            should_end_session: Some(false),
        }
    }

    pub fn speech(&self) -> Option<&str> {
        self.speech.as_deref()
    }

    pub fn reprompt(&self) -> Option<&str> {
        self.reprompt.as_deref()
    }

    pub fn card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    pub fn should_end_session(&self) -> Option<bool> {
        self.should_end_session
    }

    pub fn envelope(&self) -> ResponseEnvelope {
        ResponseEnvelope {
            version: RESPONSE_VERSION,
            response: WireResponse {
                output_speech: self.speech.as_deref().map(OutputSpeech::ssml),
                card: self.card.clone(),
                reprompt: self.reprompt.as_deref().map(|text| Reprompt {
                    output_speech: OutputSpeech::ssml(text),
                }),
                should_end_session: self.should_end_session,
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.envelope())
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ResponseEnvelope {
    version: &'static str,
    response: WireResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    should_end_session: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Reprompt {
    output_speech: OutputSpeech,
}

#[derive(Debug, Serialize)]
struct OutputSpeech {
    #[serde(rename = "type")]
    speech_type: &'static str,
    ssml: String,
}

impl OutputSpeech {
    fn ssml(text: &str) -> Self {
        Self {
            speech_type: "SSML",
            ssml: to_ssml(text),
        }
    }
}

/// Wrap text in `<speak>` unless it already is SSML, escaping markup characters
pub fn to_ssml(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.starts_with("<speak>") && trimmed.ends_with("</speak>") {
        return trimmed.to_string();
    }
    format!("<speak>{}</speak>", escape_xml(trimmed))
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Truncate card text to the host limit, adding ellipsis if needed
pub fn truncate_card_content(text: &str) -> String {
    if text.len() <= CARD_CONTENT_LIMIT {
        text.to_string()
    } else {
        // Find a safe UTF-8 boundary
        let mut end = CARD_CONTENT_LIMIT - 3;
        while !text.is_char_boundary(end) && end > 0 {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}
