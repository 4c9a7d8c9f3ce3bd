//! compression/types.rs
//! Tag enum, algorithm descriptor and compression-level errors.
use std::fmt;

use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::compression::constants::tag_ids;
use crate::utils::enum_name_or_hex;

/// Built-in algorithm tags.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum CompressionTag {
    Identity     = tag_ids::IDENTITY,
    Deflate      = tag_ids::DEFLATE,
    Gzip         = tag_ids::GZIP,
    Brotli       = tag_ids::BROTLI,
    Lz4Frame     = tag_ids::LZ4_FRAME,
    Lz4Block     = tag_ids::LZ4_BLOCK,
    SnappyFramed = tag_ids::SNAPPY_FRAMED,
    Zstd         = tag_ids::ZSTD,
}

impl CompressionTag {
    /// Accept only tags that name a built-in algorithm.
    pub fn verify(raw: u8) -> Result<Self, ConfigurationError> {
        Self::try_from_primitive(raw).map_err(|_| ConfigurationError::UnknownAlgorithm { tag: raw })
    }

    pub fn name(self) -> &'static str {
        match self {
            CompressionTag::Identity => "identity",
            CompressionTag::Deflate => "deflate",
            CompressionTag::Gzip => "gzip",
            CompressionTag::Brotli => "brotli",
            CompressionTag::Lz4Frame => "lz4-frame",
            CompressionTag::Lz4Block => "lz4-block",
            CompressionTag::SnappyFramed => "snappy-framed",
            CompressionTag::Zstd => "zstd",
        }
    }
}

impl fmt::Display for CompressionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised inside a single algorithm's transform.
#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("codec {codec} process failed: {msg}")]
    CodecProcessFailed { codec: &'static str, msg: String },

    #[error("codec {codec}: checksum mismatch (expected {expected:#010x}, got {actual:#010x})")]
    ChecksumMismatch { codec: &'static str, expected: u32, actual: u32 },
}

/// Errors detected while building a registry or codec configuration.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("registry must contain at least one algorithm")]
    Empty,

    #[error("duplicate algorithm tag: {}", enum_name_or_hex::<CompressionTag>(*tag))]
    DuplicateTag { tag: u8 },

    #[error("registry has no identity algorithm (tag 0x00)")]
    MissingIdentity,

    #[error("identity algorithm must be first in the registry, found at position {position}")]
    IdentityNotFirst { position: usize },

    #[error("no built-in algorithm for tag {}", enum_name_or_hex::<CompressionTag>(*tag))]
    UnknownAlgorithm { tag: u8 },

    #[error("max compression ratio must be finite and > 0, got {ratio}")]
    InvalidRatio { ratio: f64 },

    #[error("invalid codec configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CompressionError {
    pub(crate) fn process(codec: &'static str, err: impl fmt::Display) -> Self {
        CompressionError::CodecProcessFailed { codec, msg: err.to_string() }
    }
}

/// One-shot transform over an in-memory payload.
pub type TransformFn = fn(&[u8]) -> Result<Vec<u8>, CompressionError>;

/// A compression algorithm: a tag plus its two transforms.
///
/// Plain data rather than a trait object, so the registry is a flat table
/// that is trivially `Send + Sync`.
#[derive(Clone, Copy)]
pub struct Algorithm {
    pub tag: u8,
    pub name: &'static str,
    pub compress: TransformFn,
    pub decompress: TransformFn,
}

impl Algorithm {
    pub const fn new(
        tag: u8,
        name: &'static str,
        compress: TransformFn,
        decompress: TransformFn,
    ) -> Self {
        Self { tag, name, compress, decompress }
    }

    pub fn is_identity(&self) -> bool {
        self.tag == tag_ids::IDENTITY
    }
}

impl fmt::Debug for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Algorithm")
            .field("tag", &self.tag)
            .field("name", &self.name)
            .finish()
    }
}
