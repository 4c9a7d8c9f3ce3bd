//! codecs/gzip.rs
//! Single gzip member via flate2; CRC32 + ISIZE trailer checked on decode.
use std::io::{Read, Write};

use flate2::{Compression, read::GzDecoder, write::GzEncoder};

use crate::compression::constants::{tag_ids, DEFAULT_LEVEL_DEFLATE};
use crate::compression::types::{Algorithm, CompressionError};

const CODEC: &str = "gzip";

pub fn compress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut enc = GzEncoder::new(
        Vec::with_capacity(input.len() / 2),
        Compression::new(DEFAULT_LEVEL_DEFLATE),
    );
    enc.write_all(input)
        .map_err(|e| CompressionError::process(CODEC, e))?;
    enc.finish()
        .map_err(|e| CompressionError::process(CODEC, e))
}

pub fn decompress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut dec = GzDecoder::new(input);
    let mut out = Vec::with_capacity(input.len() * 2);
    dec.read_to_end(&mut out)
        .map_err(|e| CompressionError::process(CODEC, e))?;
    Ok(out)
}

pub const fn algorithm() -> Algorithm {
    Algorithm::new(tag_ids::GZIP, CODEC, compress, decompress)
}
