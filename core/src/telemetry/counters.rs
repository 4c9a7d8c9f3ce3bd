//! telemetry/counters.rs
//! Mutable counters owned by the caller, fed from encode reports and decode sizes.
use std::collections::BTreeMap;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::telemetry::snapshot::EncodeReport;

#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CodecCounters {
    pub encodes: u64,
    pub decodes: u64,
    pub bytes_in: u64,
    pub bytes_framed: u64,
    pub bytes_read: u64,
    pub bytes_decoded: u64,
    /// How often each tag won the encode selection.
    pub selected: BTreeMap<u8, u64>,
}

impl CodecCounters {
    pub fn add_encode(&mut self, report: &EncodeReport) {
        self.encodes += 1;
        self.bytes_in += report.original_len as u64;
        self.bytes_framed += report.frame_len as u64;
        if let Some(tag) = report.selected_tag {
            *self.selected.entry(tag).or_default() += 1;
        }
    }

    pub fn add_decode(&mut self, frame_len: usize, decoded_len: usize) {
        self.decodes += 1;
        self.bytes_read += frame_len as u64;
        self.bytes_decoded += decoded_len as u64;
    }

    /// Aggregate framed/original ratio over all encodes, capped at 1.0.
    pub fn ratio(&self) -> f64 {
        if self.bytes_in == 0 {
            return 0.0;
        }
        (self.bytes_framed as f64 / self.bytes_in as f64).min(1.0)
    }

    pub fn selected_count(&self, tag: u8) -> u64 {
        self.selected.get(&tag).copied().unwrap_or(0)
    }
}

impl AddAssign for CodecCounters {
    fn add_assign(&mut self, other: Self) {
        self.encodes += other.encodes;
        self.decodes += other.decodes;
        self.bytes_in += other.bytes_in;
        self.bytes_framed += other.bytes_framed;
        self.bytes_read += other.bytes_read;
        self.bytes_decoded += other.bytes_decoded;
        for (tag, n) in other.selected {
            *self.selected.entry(tag).or_default() += n;
        }
    }
}
