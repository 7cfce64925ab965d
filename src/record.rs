use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single sequencing read: a nucleotide sequence and its Phred+33 quality
/// string. The record's name is held by the owning [`RecordSet`] as the map
/// key.
///
/// `seq` and `qual` are parallel strings of equal length. The engine reads
/// them independently and does not enforce the pairing; scoring an empty
/// string is an error (see [`RecordError`]).
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
pub struct Record {
    pub seq: String,
    pub qual: String,
}

/// A set of named records. Insertion order is preserved, so filtered output
/// keeps the order of the input.
pub type RecordSet = IndexMap<String, Record>;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RecordError {
    #[error("sequence is empty, so GC content is undefined")]
    EmptySequence,

    #[error("quality string is empty, so mean quality is undefined")]
    EmptyQuality,
}

impl Record {
    pub fn new(seq: impl Into<String>, qual: impl Into<String>) -> Self {
        Record {
            seq: seq.into(),
            qual: qual.into(),
        }
    }

    /// Number of bases in the sequence.
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Sum of the Phred+33 scores over the whole quality string. A byte
    /// below `b'!'` is not a valid Phred+33 symbol and contributes a
    /// negative score rather than a panic.
    pub fn phred_quality_total(&self) -> i64 {
        self.qual.bytes().map(|b| b as i64 - 33).sum()
    }

    /// Mean Phred+33 score across the quality string.
    pub fn phred_quality_avg(&self) -> Result<f64, RecordError> {
        if self.qual.is_empty() {
            return Err(RecordError::EmptyQuality);
        }
        Ok(self.phred_quality_total() as f64 / self.qual.len() as f64)
    }

    /// Number of `G`/`C` bases. The match is case-sensitive: lowercase
    /// bases are not counted.
    pub fn gc_count(&self) -> usize {
        self.seq.bytes().filter(|&b| matches!(b, b'G' | b'C')).count()
    }

    /// GC content of the sequence, as a percentage in `[0, 100]`.
    pub fn gc_percent(&self) -> Result<f64, RecordError> {
        if self.seq.is_empty() {
            return Err(RecordError::EmptySequence);
        }
        Ok(100.0 * self.gc_count() as f64 / self.seq.len() as f64)
    }
}
