use crate::compression::{CompressionError, CompressionTag, ConfigurationError};
use crate::utils::enum_name_or_hex;

/// Unified codec error.
/// - `Configuration`: registry or thresholds rejected at construction; fatal at startup.
/// - `Compression`: a transform failed on these bytes; retrying cannot help.
/// - `UnknownTag`: a frame names an algorithm this registry does not carry.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("compression error: {0}")]
    Compression(#[from] CompressionError),

    #[error("unknown frame tag: {}", enum_name_or_hex::<CompressionTag>(*tag))]
    UnknownTag { tag: u8 },
}

pub type Result<T> = std::result::Result<T, CodecError>;
