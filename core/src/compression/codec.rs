//! compression/codec.rs
//! Adaptive encoder and tag-dispatching decoder.
//!
//! Frame layout:
//! - empty payload  -> empty frame (no tag)
//! - non-empty      -> [tag: u8][algorithm-specific bytes]
//!
//! Both directions are pure functions of the registry and thresholds; a
//! `Codec` can be cloned and shared across threads freely.
use std::sync::Arc;
use std::time::Instant;

use bytes::{Buf, Bytes};
use tracing::{debug, warn};

use crate::compression::constants::TAG_LEN;
use crate::compression::registry::Registry;
use crate::compression::types::{Algorithm, CompressionError, ConfigurationError};
use crate::config::{CodecConfig, Thresholds};
use crate::telemetry::{CandidateReport, EncodeReport};
use crate::types::{CodecError, Result};

#[derive(Debug, Clone)]
pub struct Codec {
    registry: Arc<Registry>,
    thresholds: Thresholds,
}

impl Codec {
    pub fn new(registry: Registry, thresholds: Thresholds) -> std::result::Result<Self, ConfigurationError> {
        thresholds.validate()?;
        Ok(Self { registry: Arc::new(registry), thresholds })
    }

    pub fn from_config(cfg: &CodecConfig) -> std::result::Result<Self, ConfigurationError> {
        Self::new(cfg.registry()?, cfg.thresholds())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Encode `payload` into a tagged frame using the best acceptable algorithm.
    pub fn encode(&self, payload: &[u8]) -> Result<Vec<u8>> {
        Ok(self.select(payload, |_| {})?)
    }

    /// Same as [`Codec::encode`], also reporting every candidate that was tried.
    pub fn encode_with_report(&self, payload: &[u8]) -> Result<(Vec<u8>, EncodeReport)> {
        let started = Instant::now();
        let mut candidates = Vec::new();
        let frame = self.select(payload, |c| candidates.push(c))?;
        let report = EncodeReport {
            original_len: payload.len(),
            selected_tag: frame.first().copied(),
            frame_len: frame.len(),
            candidates,
            elapsed: started.elapsed(),
        };
        Ok((frame, report))
    }

    /// Decode a frame produced by any encoder whose tags this registry carries.
    pub fn decode(&self, frame: &[u8]) -> Result<Vec<u8>> {
        let Some((&tag, body)) = frame.split_first() else {
            return Ok(Vec::new());
        };

        let alg = self.registry.get(tag).ok_or_else(|| {
            warn!(tag, frame_len = frame.len(), "no algorithm registered for frame tag");
            CodecError::UnknownTag { tag }
        })?;

        (alg.decompress)(body).map_err(|e| {
            warn!(tag, codec = alg.name, error = %e, "frame decompression failed");
            CodecError::from(e)
        })
    }

    /// Decode from any byte source. The source is first copied into a single
    /// owned buffer, so chained or shared buffers are never read in place.
    pub fn decode_buf<B: Buf>(&self, mut frame: B) -> Result<Bytes> {
        let owned = frame.copy_to_bytes(frame.remaining());
        self.decode(&owned).map(Bytes::from)
    }

    fn candidates(&self, payload_len: usize) -> &[Algorithm] {
        let all = self.registry.as_slice();
        if payload_len >= self.thresholds.min_payload_bytes {
            all
        } else {
            &all[..1]
        }
    }

    /// Left fold over the candidates: a later frame replaces the current best
    /// only if it is strictly smaller AND its body clears the ratio bar. The
    /// seed (identity, always first) is exempt from the ratio check.
    fn select(
        &self,
        payload: &[u8],
        mut observe: impl FnMut(CandidateReport),
    ) -> std::result::Result<Vec<u8>, CompressionError> {
        if payload.is_empty() {
            return Ok(Vec::new());
        }

        let limit = self.thresholds.size_limit(payload.len());
        let mut best: Option<Vec<u8>> = None;

        for alg in self.candidates(payload.len()) {
            let frame = build_frame(alg, payload)?;
            let body_len = frame.len() - TAG_LEN;

            let accepted = match &best {
                None => true,
                Some(current) => frame.len() < current.len() && (body_len as f64) < limit,
            };
            debug!(tag = alg.tag, codec = alg.name, frame_len = frame.len(), accepted, "candidate");
            observe(CandidateReport { tag: alg.tag, frame_len: frame.len(), accepted });

            if accepted {
                best = Some(frame);
            }
        }

        // candidates() is never empty: the registry always holds identity.
        let frame = best.unwrap_or_default();
        debug!(
            tag = frame.first().copied(),
            original_len = payload.len(),
            frame_len = frame.len(),
            "selected encoding"
        );
        Ok(frame)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self {
            registry: Arc::new(Registry::standard()),
            thresholds: Thresholds::default(),
        }
    }
}

fn build_frame(alg: &Algorithm, payload: &[u8]) -> std::result::Result<Vec<u8>, CompressionError> {
    let body = (alg.compress)(payload)?;
    let mut frame = Vec::with_capacity(TAG_LEN + body.len());
    frame.push(alg.tag);
    frame.extend_from_slice(&body);
    Ok(frame)
}

/// Key/value seam used by a storage client. Keys pass through untouched;
/// values are framed. A missing value stays missing in both directions.
pub trait StoreCodec {
    fn encode_key(&self, key: Option<Bytes>) -> Bytes {
        key.unwrap_or_default()
    }

    fn decode_key(&self, key: Option<Bytes>) -> Bytes {
        key.unwrap_or_default()
    }

    fn encode_value(&self, value: Option<Bytes>) -> Result<Option<Bytes>>;

    fn decode_value(&self, value: Option<Bytes>) -> Result<Option<Bytes>>;
}

impl StoreCodec for Codec {
    fn encode_value(&self, value: Option<Bytes>) -> Result<Option<Bytes>> {
        match value {
            None => Ok(None),
            Some(v) if v.is_empty() => Ok(Some(v)),
            Some(v) => self.encode(&v).map(|f| Some(Bytes::from(f))),
        }
    }

    fn decode_value(&self, value: Option<Bytes>) -> Result<Option<Bytes>> {
        match value {
            None => Ok(None),
            Some(v) => self.decode_buf(v).map(Some),
        }
    }
}
