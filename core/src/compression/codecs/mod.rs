//! compression/codecs/mod.rs
//! Built-in algorithms. Each module exposes one-shot `compress`/`decompress`
//! transforms and the `Algorithm` entry binding them to a tag.

pub mod identity;
pub mod deflate;
pub mod gzip;
#[cfg(feature = "brotli")]
pub mod brotli;
pub mod lz4;
pub mod snappy;
pub mod zstd;
