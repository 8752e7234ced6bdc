//! The per-run context object.
//!
//! One context owns everything a generation run touches: the hash, the
//! derived stream, and the bridge. It is created at run start, lives until
//! the host tears the run down, and is never reused across two hash
//! values. There are no process-wide globals.

use gencade_core::{EntropySource, FeatureMap, GenHash, GenStream};

use crate::bridge::{HostBridge, MessageSink};
use crate::protocol::HostMessage;

/// A single generation run: one hash, one stream, one bridge.
#[derive(Debug)]
pub struct GenRun<S: MessageSink> {
    stream: GenStream,
    bridge: HostBridge<S>,
}

impl<S: MessageSink> GenRun<S> {
    /// Acquires a hash (accepting the candidate only if well-formed,
    /// minting otherwise) and builds the run around it.
    ///
    /// The hash is fixed from here on; nothing in the run ever re-mints,
    /// so repeated draws and resets are idempotent with respect to
    /// identity.
    pub fn acquire(candidate: Option<&str>, entropy: &mut dyn EntropySource, sink: S) -> Self {
        Self::from_hash(GenHash::acquire(candidate, entropy), sink)
    }

    /// Builds the run for a hash the host already holds.
    pub fn from_hash(hash: GenHash, sink: S) -> Self {
        Self {
            stream: GenStream::from_hash(hash),
            bridge: HostBridge::new(sink),
        }
    }

    /// The hash identifying this run. Reading it back is the only way to
    /// observe whether an acquired candidate was accepted or replaced.
    pub fn hash(&self) -> &GenHash {
        self.stream.hash()
    }

    /// The CRC-32 checksum mixed into the stream seed.
    pub fn checksum(&self) -> u32 {
        self.stream.checksum()
    }

    /// Draws the next float in `[0, 1)`.
    pub fn random(&mut self) -> f64 {
        self.stream.next()
    }

    /// Draws an integer in `[ceil(min), floor(max))`.
    pub fn rand_int(&mut self, min: f64, max: f64) -> i64 {
        self.stream.rand_int(min, max)
    }

    /// Draws a float in `[min, max)`.
    pub fn rand_float(&mut self, min: f64, max: f64) -> f64 {
        self.stream.rand_float(min, max)
    }

    /// Draws a uniform element of `items`, or `None` if it is empty.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.stream.choice(items)
    }

    /// Replays the stream from position zero for a deterministic re-render
    /// (e.g. on viewport resize) without changing the run's identity.
    pub fn reset(&mut self) {
        self.stream.reset();
    }

    /// Stores the feature map and notifies the host.
    pub fn set_features(&mut self, features: FeatureMap) {
        self.bridge.set_features(features);
    }

    /// Signals render completion to the host.
    pub fn render_done(&mut self) {
        self.bridge.render_done();
    }

    /// Handles an inbound payload from the hosting frame; see
    /// [`HostBridge::handle_message`].
    pub fn handle_message(&self, payload: &str) -> Option<HostMessage> {
        self.bridge.handle_message(payload)
    }

    /// The currently stored feature map.
    pub fn features(&self) -> &FeatureMap {
        self.bridge.features()
    }

    /// Whether the consumer has signalled completion.
    pub fn is_render_done(&self) -> bool {
        self.bridge.is_render_done()
    }

    /// The outbound sink.
    pub fn sink(&self) -> &S {
        self.bridge.sink()
    }
}
