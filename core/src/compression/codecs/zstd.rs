//! codecs/zstd.rs
//! Zstd single frame with the content checksum enabled, so corrupted frames
//! fail on decode instead of yielding wrong bytes.
use std::io::Write;

use zstd::stream::Encoder;

use crate::compression::constants::{tag_ids, DEFAULT_LEVEL_ZSTD};
use crate::compression::types::{Algorithm, CompressionError};

const CODEC: &str = "zstd";

pub fn compress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut enc = Encoder::new(Vec::with_capacity(input.len() / 2), DEFAULT_LEVEL_ZSTD)
        .map_err(|e| CompressionError::process(CODEC, e))?;
    enc.include_checksum(true)
        .map_err(|e| CompressionError::process(CODEC, e))?;
    enc.write_all(input)
        .map_err(|e| CompressionError::process(CODEC, e))?;
    enc.finish()
        .map_err(|e| CompressionError::process(CODEC, e))
}

pub fn decompress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    zstd::stream::decode_all(input)
        .map_err(|e| CompressionError::process(CODEC, e))
}

pub const fn algorithm() -> Algorithm {
    Algorithm::new(tag_ids::ZSTD, CODEC, compress, decompress)
}
