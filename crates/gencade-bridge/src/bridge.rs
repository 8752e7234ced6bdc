//! Bridge state and inbound message handling.

use gencade_core::FeatureMap;

use crate::protocol::{FrameRequest, HostMessage};

/// Outbound transport capability.
///
/// Delivery is fire-and-forget: no acknowledgement, no retry. Losing a
/// message is invisible to the run; local state is stored either way.
pub trait MessageSink {
    /// Delivers one message toward the hosting frame.
    fn post(&mut self, message: HostMessage);
}

/// Sink for runs with no listening host. Messages are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl MessageSink for NullSink {
    fn post(&mut self, _message: HostMessage) {}
}

/// Relays features and completion between the consumer and the host.
///
/// Owns the feature map and the render-done flag; it relays, never
/// computes, their content.
#[derive(Debug)]
pub struct HostBridge<S: MessageSink> {
    sink: S,
    features: FeatureMap,
    render_done: bool,
}

impl<S: MessageSink> HostBridge<S> {
    /// Creates a bridge with no features set and the render incomplete.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            features: FeatureMap::new(),
            render_done: false,
        }
    }

    /// Stores the feature map (last write wins) and immediately notifies
    /// the host.
    pub fn set_features(&mut self, features: FeatureMap) {
        self.features = features;
        self.sink.post(HostMessage::Features(self.features.clone()));
    }

    /// Marks the render complete and notifies the host.
    ///
    /// The flag is monotonic within a run; duplicate calls notify again
    /// without ever clearing it.
    pub fn render_done(&mut self) {
        self.render_done = true;
        self.sink.post(HostMessage::RenderDone(true));
    }

    /// Handles an inbound payload, returning the reply for the transport
    /// to deliver back to the originating context.
    ///
    /// A feature request arriving before any `set_features`, or at any
    /// point after `render_done`, is answered immediately from whatever
    /// map is currently stored (empty if never set). Payloads that are not
    /// a feature request are ignored.
    pub fn handle_message(&self, payload: &str) -> Option<HostMessage> {
        match FrameRequest::parse(payload)? {
            FrameRequest::GetFeatures => Some(HostMessage::Features(self.features.clone())),
        }
    }

    /// The currently stored feature map.
    pub fn features(&self) -> &FeatureMap {
        &self.features
    }

    /// Whether the consumer has signalled completion.
    pub fn is_render_done(&self) -> bool {
        self.render_done
    }

    /// The outbound sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
