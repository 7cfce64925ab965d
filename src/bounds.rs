use indoc::formatdoc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A constraint on a per-record measurement, such as sequence length or GC
/// percentage.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Bounds {
    /// No constraint: no value is ever out of bounds.
    Unbounded,

    /// Upper bound only. A value strictly greater than the maximum is out
    /// of bounds; a value equal to it is not.
    Maximum(f64),

    /// Two-sided bounds, interpreted according to a [`RangeMode`].
    Range { low: f64, high: f64 },
}

/// How a [`Bounds::Range`] decides that a value is out of bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeMode {
    /// Flag values falling outside the closed interval `[low, high]`.
    #[default]
    Outside,

    /// Flag values which are below `low` and above `high` at the same time.
    /// Only satisfiable when `low > high`, where it flags the open gap
    /// `(high, low)`; with `low <= high` it never fires.
    Inverted,
}

impl Bounds {
    /// Whether `value` falls out of bounds under the given range mode.
    pub fn excludes(&self, value: f64, mode: RangeMode) -> bool {
        match *self {
            Bounds::Unbounded => false,
            Bounds::Maximum(max) => value > max,
            Bounds::Range { low, high } => match mode {
                RangeMode::Outside => value < low || value > high,
                RangeMode::Inverted => low > value && value > high,
            },
        }
    }
}

/// Error type for parsing a bounds string.
#[derive(Error, Debug)]
#[error("invalid bounds format: {0}")]
pub struct ParseBoundsError(String);

/// Parses a bounds string, as found in configuration files or taken over
/// from a caller's own option handling:
///
/// * `unbounded` (or `inf`) — no constraint;
/// * a single number, e.g. `150` — a maximum;
/// * `<low>,<high>`, e.g. `0,150` — a range, where `low` may be `-inf`
///   and `high` may be `inf`.
impl TryFrom<&str> for Bounds {
    type Error = ParseBoundsError;

    fn try_from(arg: &str) -> Result<Bounds, Self::Error> {
        let arg_lc = arg.to_lowercase();
        let parts: Vec<&str> = arg_lc.split(',').collect();

        match parts.as_slice() {
            [single] => match single.trim() {
                "unbounded" | "inf" => Ok(Bounds::Unbounded),
                s => {
                    let max = s.parse::<f64>().map_err(|_| {
                        ParseBoundsError(format!(
                            "invalid maximum value: '{s}' (should be a number, or `unbounded`)"
                        ))
                    })?;
                    Ok(Bounds::Maximum(max))
                }
            },
            [lo, hi] => {
                // Parse both ends, handling the unbounded cases.
                let low = match lo.trim() {
                    "-inf" => f64::NEG_INFINITY,
                    s => s.parse::<f64>().map_err(|_| {
                        ParseBoundsError(format!(
                            "invalid lower value: '{s}' (should be any number or `-inf`)"
                        ))
                    })?,
                };

                let high = match hi.trim() {
                    "inf" => f64::INFINITY,
                    s => s.parse::<f64>().map_err(|_| {
                        ParseBoundsError(format!(
                            "invalid upper value: '{s}' (should be any number or `inf`)"
                        ))
                    })?,
                };

                Ok(Bounds::Range { low, high })
            }
            _ => Err(ParseBoundsError(formatdoc! {"
                expected '<max>' or '<low>,<high>', got '{arg}', as in:
                  150
                  0,150
                  20,inf
                  unbounded
                "})),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_never_excludes() {
        assert!(!Bounds::Unbounded.excludes(f64::MAX, RangeMode::Outside));
        assert!(!Bounds::Unbounded.excludes(-1.0, RangeMode::Inverted));
    }

    #[test]
    fn maximum_is_inclusive() {
        let b = Bounds::Maximum(5.0);
        assert!(!b.excludes(5.0, RangeMode::Outside));
        assert!(b.excludes(6.0, RangeMode::Outside));
        assert!(!b.excludes(0.0, RangeMode::Outside));
    }

    #[test]
    fn range_outside() {
        let b = Bounds::Range { low: 40.0, high: 60.0 };
        assert!(b.excludes(39.9, RangeMode::Outside));
        assert!(!b.excludes(40.0, RangeMode::Outside));
        assert!(!b.excludes(60.0, RangeMode::Outside));
        assert!(b.excludes(60.1, RangeMode::Outside));
    }

    #[test]
    fn range_inverted_is_unsatisfiable_when_ordered() {
        let b = Bounds::Range { low: 0.0, high: 100.0 };
        for v in [-10.0, 0.0, 50.0, 100.0, 110.0] {
            assert!(!b.excludes(v, RangeMode::Inverted));
        }
    }

    #[test]
    fn range_inverted_flags_the_gap_when_reversed() {
        let b = Bounds::Range { low: 60.0, high: 40.0 };
        assert!(b.excludes(50.0, RangeMode::Inverted));
        assert!(!b.excludes(40.0, RangeMode::Inverted));
        assert!(!b.excludes(60.0, RangeMode::Inverted));
        assert!(!b.excludes(70.0, RangeMode::Inverted));
    }

    #[test]
    fn parse_maximum() {
        assert_eq!(Bounds::try_from("150").unwrap(), Bounds::Maximum(150.0));
        assert_eq!(Bounds::try_from(" 2.5 ").unwrap(), Bounds::Maximum(2.5));
    }

    #[test]
    fn parse_unbounded() {
        assert_eq!(Bounds::try_from("unbounded").unwrap(), Bounds::Unbounded);
        assert_eq!(Bounds::try_from("inf").unwrap(), Bounds::Unbounded);
    }

    #[test]
    fn parse_range() {
        assert_eq!(
            Bounds::try_from("0,100").unwrap(),
            Bounds::Range { low: 0.0, high: 100.0 }
        );
        assert_eq!(
            Bounds::try_from("-inf, inf").unwrap(),
            Bounds::Range {
                low: f64::NEG_INFINITY,
                high: f64::INFINITY
            }
        );
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(Bounds::try_from("abc").is_err());
        assert!(Bounds::try_from("1,2,3").is_err());
        assert!(Bounds::try_from("1,").is_err());
    }
}
