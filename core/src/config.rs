//! config.rs
//! Codec configuration surface: algorithm order and the two thresholds.
use serde::{Deserialize, Serialize};

use crate::compression::constants::{DEFAULT_MAX_COMPRESSION_RATIO, DEFAULT_MIN_PAYLOAD_BYTES};
use crate::compression::registry::{standard_tags, Registry};
use crate::compression::ConfigurationError;

/// Selection thresholds applied by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Below this many bytes only the identity algorithm is tried.
    pub min_payload_bytes: usize,
    /// A candidate's compressed body must be strictly below
    /// `original_len * max_compression_ratio` to replace the current best.
    pub max_compression_ratio: f64,
}

impl Thresholds {
    pub fn new(min_payload_bytes: usize, max_compression_ratio: f64) -> Result<Self, ConfigurationError> {
        let t = Self { min_payload_bytes, max_compression_ratio };
        t.validate()?;
        Ok(t)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let ratio = self.max_compression_ratio;
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(ConfigurationError::InvalidRatio { ratio });
        }
        Ok(())
    }

    /// Exclusive upper bound for an acceptable compressed body.
    pub fn size_limit(&self, original_len: usize) -> f64 {
        original_len as f64 * self.max_compression_ratio
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_payload_bytes: DEFAULT_MIN_PAYLOAD_BYTES,
            max_compression_ratio: DEFAULT_MAX_COMPRESSION_RATIO,
        }
    }
}

/// Serializable codec configuration, as embedded in a host's config file.
///
/// ```json
/// { "algorithms": [0, 1, 2], "min_payload_bytes": 128, "max_compression_ratio": 0.8 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Built-in tags in selection order. Must start with the identity tag (0).
    pub algorithms: Vec<u8>,
    pub min_payload_bytes: usize,
    pub max_compression_ratio: f64,
}

impl CodecConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigurationError> {
        let cfg: CodecConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            min_payload_bytes: self.min_payload_bytes,
            max_compression_ratio: self.max_compression_ratio,
        }
    }

    pub fn registry(&self) -> Result<Registry, ConfigurationError> {
        Registry::from_tags(&self.algorithms)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.thresholds().validate()?;
        self.registry().map(|_| ())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        let thresholds = Thresholds::default();
        Self {
            algorithms: standard_tags(),
            min_payload_bytes: thresholds.min_payload_bytes,
            max_compression_ratio: thresholds.max_compression_ratio,
        }
    }
}
