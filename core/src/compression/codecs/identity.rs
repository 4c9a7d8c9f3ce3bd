//! codecs/identity.rs
//! Pass-through codec. Always present, always the fallback.
use crate::compression::constants::tag_ids;
use crate::compression::types::{Algorithm, CompressionError};

pub fn compress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    Ok(input.to_vec())
}

pub fn decompress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    Ok(input.to_vec())
}

pub const fn algorithm() -> Algorithm {
    Algorithm::new(tag_ids::IDENTITY, "identity", compress, decompress)
}
