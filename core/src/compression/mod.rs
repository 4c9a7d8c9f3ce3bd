//! compression/mod.rs
//! Adaptive multi-algorithm compression with self-describing frames.
//!
//! - `registry` holds the ordered algorithm table and resolves built-in tags.
//! - `codec` picks the best acceptable candidate on encode and dispatches on
//!   the leading tag byte on decode.
//! - `codecs` contains one module per built-in algorithm.

pub mod constants;
pub mod types;
pub mod registry;
pub mod codecs;
pub mod codec;

pub use constants::*;
pub use types::*;
pub use registry::*;
pub use codec::*;
