//! telemetry/snapshot.rs
//! Immutable description of one encode call.
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One candidate tried by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateReport {
    pub tag: u8,
    /// Full frame length, tag byte included.
    pub frame_len: usize,
    /// Whether this candidate became the current best when it was evaluated.
    pub accepted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodeReport {
    pub original_len: usize,
    /// `None` for the empty payload, which is never tagged.
    pub selected_tag: Option<u8>,
    pub frame_len: usize,
    pub candidates: Vec<CandidateReport>,
    pub elapsed: Duration,
}

impl EncodeReport {
    /// Frame size relative to the original payload (0.0 for empty payloads).
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 {
            return 0.0;
        }
        self.frame_len as f64 / self.original_len as f64
    }

    pub fn candidate(&self, tag: u8) -> Option<&CandidateReport> {
        self.candidates.iter().find(|c| c.tag == tag)
    }
}
