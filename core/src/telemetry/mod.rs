//! telemetry/mod.rs
//! Per-call encode reports and caller-owned counters.
//!
//! The codec never holds counters itself: `Codec::encode_with_report`
//! returns an immutable `EncodeReport`, and callers that want totals fold
//! reports into their own `CodecCounters`.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
