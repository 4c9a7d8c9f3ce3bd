//! compression/registry.rs
//! Ordered, immutable algorithm table plus built-in tag resolution.
use crate::compression::codecs::{deflate, gzip, identity, lz4, snappy, zstd};
use crate::compression::constants::tag_ids;
use crate::compression::types::{Algorithm, CompressionTag, ConfigurationError};

/// Resolve a built-in tag to its algorithm.
///
/// Tags for algorithms compiled out of this build (brotli without the
/// `brotli` feature) resolve to `UnknownAlgorithm`.
pub fn resolve(tag: u8) -> Result<Algorithm, ConfigurationError> {
    match CompressionTag::verify(tag)? {
        CompressionTag::Identity => Ok(identity::algorithm()),
        CompressionTag::Deflate => Ok(deflate::algorithm()),
        CompressionTag::Gzip => Ok(gzip::algorithm()),
        #[cfg(feature = "brotli")]
        CompressionTag::Brotli => Ok(crate::compression::codecs::brotli::algorithm()),
        #[cfg(not(feature = "brotli"))]
        CompressionTag::Brotli => Err(ConfigurationError::UnknownAlgorithm { tag }),
        CompressionTag::Lz4Frame => Ok(lz4::frame_algorithm()),
        CompressionTag::Lz4Block => Ok(lz4::block_algorithm()),
        CompressionTag::SnappyFramed => Ok(snappy::algorithm()),
        CompressionTag::Zstd => Ok(zstd::algorithm()),
    }
}

/// Tags of every built-in algorithm available in this build, in tag order.
pub fn standard_tags() -> Vec<u8> {
    (tag_ids::IDENTITY..=tag_ids::ZSTD)
        .filter(|tag| resolve(*tag).is_ok())
        .collect()
}

/// Immutable ordered set of algorithms.
///
/// Order is significant: the encoder walks it front to back and keeps the
/// earlier candidate on equal frame sizes. The identity algorithm is always
/// at position 0.
#[derive(Debug, Clone)]
pub struct Registry {
    algorithms: Vec<Algorithm>,
}

impl Registry {
    pub fn new(algorithms: Vec<Algorithm>) -> Result<Self, ConfigurationError> {
        if algorithms.is_empty() {
            return Err(ConfigurationError::Empty);
        }

        let mut seen = [false; 256];
        for alg in &algorithms {
            let slot = &mut seen[alg.tag as usize];
            if *slot {
                return Err(ConfigurationError::DuplicateTag { tag: alg.tag });
            }
            *slot = true;
        }

        match algorithms.iter().position(Algorithm::is_identity) {
            None => return Err(ConfigurationError::MissingIdentity),
            Some(0) => {}
            Some(position) => return Err(ConfigurationError::IdentityNotFirst { position }),
        }

        Ok(Self { algorithms })
    }

    /// Build from built-in tags, preserving the given order.
    pub fn from_tags(tags: &[u8]) -> Result<Self, ConfigurationError> {
        let algorithms = tags
            .iter()
            .map(|tag| resolve(*tag))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(algorithms)
    }

    /// Every built-in algorithm available in this build.
    pub fn standard() -> Self {
        let algorithms = standard_tags()
            .into_iter()
            .filter_map(|tag| resolve(tag).ok())
            .collect();
        // Built-in tags are distinct and start with identity.
        Self { algorithms }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Algorithm> {
        self.algorithms.iter()
    }

    pub fn as_slice(&self) -> &[Algorithm] {
        &self.algorithms
    }

    pub fn get(&self, tag: u8) -> Option<&Algorithm> {
        self.algorithms.iter().find(|alg| alg.tag == tag)
    }

    /// The no-op fallback. Always the first entry.
    pub fn identity(&self) -> &Algorithm {
        &self.algorithms[0]
    }

    pub fn tags(&self) -> Vec<u8> {
        self.algorithms.iter().map(|alg| alg.tag).collect()
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
