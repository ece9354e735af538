//! The five instrumented algorithms.
//!
//! Every entry point takes `&[T]`, clones an internal working copy (the
//! caller's slice is never mutated), and returns a [`SortOutcome`] bundling
//! the untouched original, the sorted result, and the step trace.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use bubble::bubble_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use selection::selection_sort;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SortError;
use crate::step::SortStep;

/// Closed set of algorithm keys the engine dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
        }
    }

    /// Run this algorithm over a copy of `input`.
    pub fn sort<T: Ord + Clone>(self, input: &[T]) -> SortOutcome<T> {
        match self {
            SortAlgorithm::Bubble => bubble_sort(input),
            SortAlgorithm::Selection => selection_sort(input),
            SortAlgorithm::Insertion => insertion_sort(input),
            SortAlgorithm::Merge => merge_sort(input),
            SortAlgorithm::Quick => quick_sort(input),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortError;

    fn from_str(key: &str) -> Result<Self, SortError> {
        match key {
            "bubble" => Ok(SortAlgorithm::Bubble),
            "selection" => Ok(SortAlgorithm::Selection),
            "insertion" => Ok(SortAlgorithm::Insertion),
            "merge" => Ok(SortAlgorithm::Merge),
            "quick" => Ok(SortAlgorithm::Quick),
            other => Err(SortError::UnknownAlgorithm(other.to_owned())),
        }
    }
}

/// What one sort invocation produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortOutcome<T> {
    pub algorithm: SortAlgorithm,
    pub original: Vec<T>,
    pub sorted: Vec<T>,
    pub steps: Vec<SortStep<T>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for algorithm in SortAlgorithm::ALL {
            assert_eq!(algorithm.as_str().parse(), Ok(algorithm));
        }
        assert_eq!(
            "heap".parse::<SortAlgorithm>(),
            Err(SortError::UnknownAlgorithm("heap".to_owned()))
        );
    }
}
