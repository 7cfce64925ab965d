//! Filter FASTQ-style sequencing records by sequence length, GC content,
//! and mean Phred+33 base-call quality.
//!
//! Records live in a [`RecordSet`] keyed by name; reading and writing the
//! records is left to the caller. Each filter reports the names it would
//! drop, and [`filter_all`] composes all three: a record survives only if
//! no filter flags it.
//!
//! ```
//! use readsieve::{filter_all, Bounds, FilterOpts, Record, RecordSet};
//!
//! let mut records = RecordSet::new();
//! records.insert("r1".to_string(), Record::new("GGCC", "IIII"));
//! records.insert("r2".to_string(), Record::new("ATAT", "!!!!"));
//!
//! let opts = FilterOpts {
//!     len: Bounds::Maximum(10.0),
//!     quality_threshold: 10.0,
//!     ..FilterOpts::default()
//! };
//!
//! let kept = filter_all(&records, &opts)?;
//! assert!(kept.contains_key("r1"));
//! assert!(!kept.contains_key("r2"));
//! # Ok::<(), readsieve::FilterError>(())
//! ```

#[macro_use]
extern crate log;

pub mod bounds;
pub mod filter;
pub mod record;
pub mod summary;

pub use bounds::{Bounds, ParseBoundsError, RangeMode};
pub use filter::{
    filter_all, filter_all_with_statistics, filter_by_gc, filter_by_length, filter_by_quality,
    FilterError, FilterOpts,
};
pub use record::{Record, RecordError, RecordSet};
pub use summary::FilterStatistics;
