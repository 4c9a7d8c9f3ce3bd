//! codecs/lz4.rs
//! LZ4 in two flavours:
//! - frame: standard LZ4 frame format with content checksum (`lz4_flex::frame`).
//! - block: size-prepended raw block followed by a CRC32 of the original bytes.
use std::io::{Read, Write};

use lz4_flex::block::{compress_prepend_size, decompress_size_prepended};
use lz4_flex::frame::{FrameDecoder, FrameEncoder, FrameInfo};

use crate::compression::constants::tag_ids;
use crate::compression::types::{Algorithm, CompressionError};
use crate::utils::{compute_checksum, split_checksum, verify_checksum};

const FRAME_CODEC: &str = "lz4-frame";
const BLOCK_CODEC: &str = "lz4-block";

pub fn compress_frame(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let info = FrameInfo::new().content_checksum(true);
    let mut enc = FrameEncoder::with_frame_info(info, Vec::with_capacity(input.len() / 2));
    enc.write_all(input)
        .map_err(|e| CompressionError::process(FRAME_CODEC, e))?;
    enc.finish()
        .map_err(|e| CompressionError::process(FRAME_CODEC, e))
}

pub fn decompress_frame(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut dec = FrameDecoder::new(input);
    let mut out = Vec::with_capacity(input.len() * 2);
    dec.read_to_end(&mut out)
        .map_err(|e| CompressionError::process(FRAME_CODEC, e))?;
    Ok(out)
}

pub fn compress_block(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut out = compress_prepend_size(input);
    // Append CRC32 of original input
    out.extend_from_slice(&compute_checksum(input).to_le_bytes());
    Ok(out)
}

pub fn decompress_block(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let (compressed, expected_crc) = split_checksum(input, BLOCK_CODEC)?;
    let decompressed = decompress_size_prepended(compressed)
        .map_err(|e| CompressionError::process(BLOCK_CODEC, e))?;
    verify_checksum(expected_crc, compute_checksum(&decompressed), BLOCK_CODEC)?;
    Ok(decompressed)
}

pub const fn frame_algorithm() -> Algorithm {
    Algorithm::new(tag_ids::LZ4_FRAME, FRAME_CODEC, compress_frame, decompress_frame)
}

pub const fn block_algorithm() -> Algorithm {
    Algorithm::new(tag_ids::LZ4_BLOCK, BLOCK_CODEC, compress_block, decompress_block)
}
