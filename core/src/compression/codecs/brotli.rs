//! codecs/brotli.rs
//! Brotli via the `brotli` crate. Only compiled with the `brotli` feature.
use brotli::enc::BrotliEncoderParams;

use crate::compression::constants::{tag_ids, DEFAULT_LGWIN_BROTLI, DEFAULT_QUALITY_BROTLI};
use crate::compression::types::{Algorithm, CompressionError};

const CODEC: &str = "brotli";

pub fn compress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let params = BrotliEncoderParams {
        quality: DEFAULT_QUALITY_BROTLI,
        lgwin: DEFAULT_LGWIN_BROTLI,
        ..Default::default()
    };
    let mut src = input;
    let mut out = Vec::with_capacity(input.len() / 2);
    brotli::BrotliCompress(&mut src, &mut out, &params)
        .map_err(|e| CompressionError::process(CODEC, e))?;
    Ok(out)
}

pub fn decompress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut src = input;
    let mut out = Vec::with_capacity(input.len() * 2);
    brotli::BrotliDecompress(&mut src, &mut out)
        .map_err(|e| CompressionError::process(CODEC, e))?;
    Ok(out)
}

pub const fn algorithm() -> Algorithm {
    Algorithm::new(tag_ids::BROTLI, CODEC, compress, decompress)
}
