//! codecs/snappy.rs
//! Snappy framing format (`snap`), CRC32C per chunk.
use std::io::{Read, Write};

use snap::read::FrameDecoder;
use snap::write::FrameEncoder;

use crate::compression::constants::tag_ids;
use crate::compression::types::{Algorithm, CompressionError};

const CODEC: &str = "snappy-framed";

pub fn compress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut out = Vec::with_capacity(input.len() / 2);
    {
        let mut enc = FrameEncoder::new(&mut out);
        enc.write_all(input)
            .map_err(|e| CompressionError::process(CODEC, e))?;
        enc.flush()
            .map_err(|e| CompressionError::process(CODEC, e))?;
    }
    Ok(out)
}

pub fn decompress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut dec = FrameDecoder::new(input);
    let mut out = Vec::with_capacity(input.len() * 2);
    dec.read_to_end(&mut out)
        .map_err(|e| CompressionError::process(CODEC, e))?;
    Ok(out)
}

pub const fn algorithm() -> Algorithm {
    Algorithm::new(tag_ids::SNAPPY_FRAMED, CODEC, compress, decompress)
}
