use std::collections::HashSet;

use itertools::chain;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bounds::{Bounds, RangeMode};
use crate::record::{RecordError, RecordSet};
use crate::summary::FilterStatistics;

/// Parameters for a composite filtering pass.
///
/// The defaults flag nothing: length is unbounded, GC must fall in the full
/// `[0, 100]` window, and a quality threshold of `0.0` can never fire since
/// the comparison is strict.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct FilterOpts {
    pub len: Bounds,
    pub gc: Bounds,
    pub quality_threshold: f64,
    /// Applied to both `len` and `gc` whenever they are a [`Bounds::Range`].
    pub range_mode: RangeMode,
}

impl Default for FilterOpts {
    fn default() -> Self {
        FilterOpts {
            len: Bounds::Unbounded,
            gc: Bounds::Range {
                low: 0.0,
                high: 100.0,
            },
            quality_threshold: 0.0,
            range_mode: RangeMode::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("record '{name}' cannot be scored: {source}")]
    Degenerate { name: String, source: RecordError },
}

/// Returns the names of records whose sequence length is out of bounds, in
/// input order. Infallible: a zero-length sequence is evaluated like any
/// other value.
pub fn filter_by_length(records: &RecordSet, bounds: &Bounds, mode: RangeMode) -> Vec<String> {
    records
        .iter()
        .filter(|(_, rec)| bounds.excludes(rec.len() as f64, mode))
        .map(|(name, _)| name.clone())
        .collect()
}

/// Returns the names of records whose mean Phred+33 quality is strictly
/// below `threshold`, in input order.
///
/// # Errors
///
/// Fails on the first record with an empty quality string; no partial list
/// is returned.
pub fn filter_by_quality(records: &RecordSet, threshold: f64) -> Result<Vec<String>, FilterError> {
    let mut unsuitable = Vec::new();

    for (name, rec) in records {
        let avg = rec
            .phred_quality_avg()
            .map_err(|source| FilterError::Degenerate {
                name: name.clone(),
                source,
            })?;
        if avg < threshold {
            unsuitable.push(name.clone());
        }
    }

    Ok(unsuitable)
}

/// Returns the names of records whose GC percentage is out of bounds, in
/// input order.
///
/// # Errors
///
/// Fails on the first record with an empty sequence; no partial list is
/// returned.
pub fn filter_by_gc(
    records: &RecordSet,
    bounds: &Bounds,
    mode: RangeMode,
) -> Result<Vec<String>, FilterError> {
    let mut unsuitable = Vec::new();

    for (name, rec) in records {
        let gc = rec.gc_percent().map_err(|source| FilterError::Degenerate {
            name: name.clone(),
            source,
        })?;
        if bounds.excludes(gc, mode) {
            unsuitable.push(name.clone());
        }
    }

    Ok(unsuitable)
}

/// Runs all three filters and returns a freshly allocated [`RecordSet`]
/// holding exactly the records flagged by none of them, preserving input
/// order. A record is dropped if *any* filter flags it.
///
/// # Errors
///
/// Fails if any record has an empty sequence or quality string. The whole
/// call aborts; there is no per-record isolation.
pub fn filter_all(records: &RecordSet, opts: &FilterOpts) -> Result<RecordSet, FilterError> {
    let (kept, _) = filter_all_with_statistics(records, opts)?;
    Ok(kept)
}

/// Like [`filter_all`], but also reports how many records each criterion
/// flagged. See [`FilterStatistics`] for what is counted.
pub fn filter_all_with_statistics(
    records: &RecordSet,
    opts: &FilterOpts,
) -> Result<(RecordSet, FilterStatistics), FilterError> {
    let by_length = filter_by_length(records, &opts.len, opts.range_mode);
    let by_gc = filter_by_gc(records, &opts.gc, opts.range_mode)?;
    let by_quality = filter_by_quality(records, opts.quality_threshold)?;

    debug!(
        "flagged {} by length, {} by GC, {} by quality",
        by_length.len(),
        by_gc.len(),
        by_quality.len()
    );

    let mut stats = FilterStatistics {
        total_records: records.len(),
        flagged_by_length: by_length.len(),
        flagged_by_gc: by_gc.len(),
        flagged_by_quality: by_quality.len(),
        ..FilterStatistics::default()
    };

    // a record fails overall if it fails any individual filter
    let flagged: HashSet<String> = chain!(by_length, by_gc, by_quality).collect();

    let kept: RecordSet = records
        .iter()
        .filter(|(name, _)| !flagged.contains(name.as_str()))
        .map(|(name, rec)| (name.clone(), rec.clone()))
        .collect();

    stats.flagged_distinct = flagged.len();
    stats.retained = kept.len();
    stats.proportion_retained = if records.is_empty() {
        0.0
    } else {
        kept.len() as f64 / records.len() as f64
    };

    info!(
        "Stats: {} records, {} flagged, {} retained",
        stats.total_records, stats.flagged_distinct, stats.retained
    );

    Ok((kept, stats))
}
