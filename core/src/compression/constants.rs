//! compression/constants.rs
//! Stable one-byte tags and default tuning knobs.

/// Stable tag ids (u8) written as the first byte of every non-empty frame.
///
/// Tags are part of the stored data format: never renumber or reuse one
/// while frames carrying it may still be read.
pub mod tag_ids {
    pub const IDENTITY: u8      = 0x00;
    pub const DEFLATE: u8       = 0x01;
    pub const GZIP: u8          = 0x02;
    pub const BROTLI: u8        = 0x03;
    pub const LZ4_FRAME: u8     = 0x04;
    pub const LZ4_BLOCK: u8     = 0x05;
    pub const SNAPPY_FRAMED: u8 = 0x06;
    pub const ZSTD: u8          = 0x07;
}

/// Payloads shorter than this are only stored through the identity algorithm.
pub const DEFAULT_MIN_PAYLOAD_BYTES: usize = 128;
/// A compressed candidate must be strictly below `original * ratio` to win.
pub const DEFAULT_MAX_COMPRESSION_RATIO: f64 = 0.8;

/// Default compression levels (balanced).
pub const DEFAULT_LEVEL_DEFLATE: u32 = 6;
pub const DEFAULT_LEVEL_ZSTD: i32 = 3;
pub const DEFAULT_QUALITY_BROTLI: i32 = 5;
pub const DEFAULT_LGWIN_BROTLI: i32 = 22;

/// Length of the frame tag prefix.
pub const TAG_LEN: usize = 1;
