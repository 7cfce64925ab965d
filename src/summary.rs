use serde::Serialize;
use std::fmt;

/// Counts collected during a composite filtering pass.
///
/// The per-criterion fields count what each filter flagged on its own, so a
/// record failing two criteria appears in both; `flagged_distinct` is the
/// size of their union.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct FilterStatistics {
    pub total_records: usize,
    pub flagged_by_length: usize,
    pub flagged_by_gc: usize,
    pub flagged_by_quality: usize,
    pub flagged_distinct: usize,
    pub retained: usize,
    pub proportion_retained: f64,
}

impl FilterStatistics {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn display_header() -> &'static str {
        "total\tby_length\tby_gc\tby_quality\tflagged\tretained\t%retained"
    }
}

impl fmt::Display for FilterStatistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{:.2}",
            self.total_records,
            self.flagged_by_length,
            self.flagged_by_gc,
            self.flagged_by_quality,
            self.flagged_distinct,
            self.retained,
            self.proportion_retained * 100.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FilterStatistics {
        FilterStatistics {
            total_records: 4,
            flagged_by_length: 1,
            flagged_by_gc: 2,
            flagged_by_quality: 1,
            flagged_distinct: 3,
            retained: 1,
            proportion_retained: 0.25,
        }
    }

    #[test]
    fn json_contains_counts() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"total_records\":4"));
        assert!(json.contains("\"flagged_distinct\":3"));
        assert!(json.contains("\"proportion_retained\":0.25"));
    }

    #[test]
    fn display_row_matches_header() {
        let row = sample().to_string();
        assert_eq!(row, "4\t1\t2\t1\t3\t1\t25.00");
        assert_eq!(
            row.split('\t').count(),
            FilterStatistics::display_header().split('\t').count()
        );
    }
}
