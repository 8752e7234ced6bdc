//! Gencade Host Bridge
//!
//! Cross-context messaging between a generation run and the frame hosting
//! it, plus the per-run context object that ties the deterministic stream
//! and the bridge together.
//!
//! The wire contract is deliberately tiny: two outbound message kinds
//! (the feature set, render completion) and one inbound request (the
//! literal string `gen_getFeatures`). Outbound delivery is fire-and-forget
//! through a [`MessageSink`] capability; a host that is not listening
//! loses the notification and nothing else.
//!
//! # Example
//!
//! ```
//! use gencade_bridge::{HostBridge, NullSink};
//! use gencade_core::FeatureMap;
//!
//! let mut bridge = HostBridge::new(NullSink);
//! bridge.set_features(FeatureMap::new().with("palette", "dusk"));
//!
//! let reply = bridge.handle_message("gen_getFeatures").unwrap();
//! assert_eq!(
//!     reply.to_json(),
//!     r#"{"id":"gen_getFeatures","data":{"palette":"dusk"}}"#,
//! );
//! ```
//!
//! # Modules
//!
//! - [`protocol`]: typed wire messages and their ids
//! - [`bridge`]: bridge state, sinks, and inbound message handling
//! - [`run`]: the per-run context object

pub mod bridge;
pub mod protocol;
pub mod run;

// Re-export commonly used types at the crate root
pub use bridge::{HostBridge, MessageSink, NullSink};
pub use protocol::{FrameRequest, HostMessage, FEATURES_ID, RENDER_DONE_ID};
pub use run::GenRun;
