//! tagcodec-core
//!
//! Adaptive multi-algorithm compression codec for opaque stored values.
//! Every non-empty value is written as one tag byte followed by the bytes of
//! whichever registered algorithm produced the best acceptable result, so a
//! decoder needs no external metadata.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod types;
pub mod utils;

pub mod compression;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{
        tag_ids, Algorithm, Codec, CompressionError, CompressionTag, ConfigurationError, Registry,
        StoreCodec,
    };
    pub use crate::config::{CodecConfig, Thresholds};
    pub use crate::telemetry::{CodecCounters, EncodeReport};
    pub use crate::types::{CodecError, Result};
}
