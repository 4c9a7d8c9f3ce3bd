use std::fmt;

use num_enum::TryFromPrimitive;

use crate::compression::types::CompressionError;

/// Trailer length of the CRC32 appended by checksummed codecs.
pub const CHECKSUM_LEN: usize = 4;

pub fn compute_checksum(data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Split `input` into its body and little-endian CRC32 trailer.
pub fn split_checksum<'a>(input: &'a [u8], codec: &'static str) -> Result<(&'a [u8], u32), CompressionError> {
    if input.len() < CHECKSUM_LEN {
        return Err(CompressionError::CodecProcessFailed {
            codec,
            msg: "missing checksum".into(),
        });
    }
    let (body, trailer) = input.split_at(input.len() - CHECKSUM_LEN);
    let mut crc = [0u8; CHECKSUM_LEN];
    crc.copy_from_slice(trailer);
    Ok((body, u32::from_le_bytes(crc)))
}

pub fn verify_checksum(expected: u32, actual: u32, codec: &'static str) -> Result<(), CompressionError> {
    if expected != actual {
        return Err(CompressionError::ChecksumMismatch { codec, expected, actual });
    }
    Ok(())
}

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:02x}", raw),
    }
}
