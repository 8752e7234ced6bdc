//! Typed wire protocol between a generation run and its hosting frame.
//!
//! Exactly two outbound message kinds and one inbound message kind, each
//! with a fixed payload shape. Outbound messages travel in a
//! `{ "id": <tag>, "data": <payload> }` envelope; the inbound feature
//! request is the bare string `gen_getFeatures`, not an envelope.

use gencade_core::FeatureMap;
use serde::{Deserialize, Serialize};

/// Message id for feature reporting, outbound and inbound.
pub const FEATURES_ID: &str = "gen_getFeatures";

/// Message id for render completion.
pub const RENDER_DONE_ID: &str = "gen_renderDone";

/// Envelope emitted when serialization fails; delivery stays best-effort
/// rather than panicking the run.
const FALLBACK_ENVELOPE: &str = r#"{"id":"gen_getFeatures","data":{}}"#;

/// Outbound messages to the hosting frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "id", content = "data")]
pub enum HostMessage {
    /// The current feature set; sent on `set_features` and as the reply to
    /// an inbound feature request.
    #[serde(rename = "gen_getFeatures")]
    Features(FeatureMap),

    /// Render completion; the payload is always `true`.
    #[serde(rename = "gen_renderDone")]
    RenderDone(bool),
}

impl HostMessage {
    /// Encodes the wire envelope.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| FALLBACK_ENVELOPE.to_string())
    }
}

/// Inbound requests from the hosting frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// "Give me the current feature set."
    GetFeatures,
}

impl FrameRequest {
    /// Parses an inbound payload. Anything other than the literal feature
    /// request is ignored.
    pub fn parse(payload: &str) -> Option<Self> {
        (payload == FEATURES_ID).then_some(Self::GetFeatures)
    }
}
