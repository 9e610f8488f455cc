//! Error types for the wend grid engine.
//!
//! Every variant is a terminal contract violation: nothing here is
//! transient or retryable, and there is no degraded mode. A search or
//! simulation either completes with a valid result or fails outright.

use crate::point::{Bounds, Point};
use std::error::Error;
use std::fmt;

/// Errors from grid construction and cell access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate lies outside the grid's declared bounds.
    OutOfBounds {
        /// The offending coordinate.
        point: Point,
        /// The grid's declared bounds.
        bounds: Bounds,
    },
    /// Attempted to construct a grid covering zero cells.
    EmptyBounds,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { point, bounds } => {
                write!(f, "coordinate {point} out of bounds {bounds}")
            }
            Self::EmptyBounds => write!(f, "grid must cover at least one cell"),
        }
    }
}

impl Error for GridError {}

/// Errors from frontier searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// No state satisfying the goal predicate exists within the
    /// explored space. Also reported when an expansion budget runs out
    /// before the goal is found.
    Unreachable {
        /// Number of states expanded before giving up.
        expanded: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable { expanded } => {
                write!(f, "goal unreachable after expanding {expanded} states")
            }
        }
    }
}

impl Error for SearchError {}

/// Errors from generational cycle detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleError {
    /// The generation cap was exhausted without observing a repeated
    /// state. The caller must raise the cap or fall back to direct
    /// simulation.
    NoCycleFound {
        /// Number of generations simulated before giving up.
        searched: u64,
    },
    /// A shifted match failed empirical verification: the state one
    /// generation after the match did not reproduce the recorded
    /// history under the hypothesised shift, so the transition rule is
    /// not translation-invariant and the shift cannot be extrapolated.
    InconsistentShift {
        /// Detected period before verification failed.
        period: u64,
        /// Shift predicted by the hypothesis.
        expected: Point,
        /// Shift actually observed, if the states matched at all.
        actual: Option<Point>,
    },
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCycleFound { searched } => {
                write!(f, "no cycle found within {searched} generations")
            }
            Self::InconsistentShift {
                period,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "shift verification failed for period {period}: expected {expected}, "
                )?;
                match actual {
                    Some(p) => write!(f, "observed {p}"),
                    None => write!(f, "states no longer match under any shift"),
                }
            }
        }
    }
}

impl Error for CycleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_out_of_bounds() {
        let e = GridError::OutOfBounds {
            point: Point::new(7, -1),
            bounds: Bounds::sized(5, 5),
        };
        assert_eq!(
            e.to_string(),
            "coordinate (7, -1) out of bounds [0, 5) x [0, 5)"
        );
    }

    #[test]
    fn display_no_cycle() {
        let e = CycleError::NoCycleFound { searched: 1000 };
        assert_eq!(e.to_string(), "no cycle found within 1000 generations");
    }

    #[test]
    fn errors_are_std_errors() {
        fn takes_error(_: &dyn Error) {}
        takes_error(&GridError::EmptyBounds);
        takes_error(&SearchError::Unreachable { expanded: 0 });
        takes_error(&CycleError::NoCycleFound { searched: 0 });
    }
}
