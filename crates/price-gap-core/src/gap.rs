//! Gap pair finder.
//!
//! Given a sequence of integers and a non-negative gap `k`, finds two
//! positions `i < j` whose values differ by exactly `k`.
//!
//! # Algorithm
//!
//! 1. Reject a negative `k` before looking at the sequence.
//! 2. Scan left to right, keeping a map from each value to the earliest
//!    index that holds it.
//! 3. At position `j`, look up `seq[j] - k` and `seq[j] + k`.
//!    A hit pairs `j` with the earliest recorded index of the partner value.
//! 4. Record `seq[j]` only after probing it, so every hit has `i < j` and
//!    `k = 0` finds the first repeated value.
//!
//! Which qualifying pair wins is decided by [`TieBreak`]. The default,
//! [`TieBreak::EarliestSecond`], returns on the first hit: smallest `j`,
//! then smallest `i` for that `j`.
//!
//! # Example
//!
//! ```rust
//! use price_gap_core::gap::{find_pair, GapPair};
//!
//! let pair = find_pair(&[4, 1, 6, 3, 8], 2).unwrap();
//! assert_eq!(pair, Some(GapPair { i: 0, j: 2 }));
//!
//! assert_eq!(find_pair(&[10, 20, 30], 100).unwrap(), None);
//! assert!(find_pair(&[1, 2, 3], -1).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Two distinct positions in a sequence, always with `i < j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GapPair {
    /// Earlier position.
    pub i: usize,
    /// Later position.
    pub j: usize,
}

impl GapPair {
    pub fn indices(self) -> (usize, usize) {
        (self.i, self.j)
    }

    /// The values at both positions, or `None` if either index is out of
    /// range for `sequence`.
    pub fn values(self, sequence: &[i64]) -> Option<(i64, i64)> {
        Some((*sequence.get(self.i)?, *sequence.get(self.j)?))
    }
}

impl fmt::Display for GapPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// Errors returned by the finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GapError {
    /// The requested gap was negative.
    #[error("invalid argument: gap must be non-negative, got {k}")]
    InvalidArgument {
        /// The rejected gap.
        k: i64,
    },
}

/// Policy deciding which pair is returned when several qualify.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Smallest `j`, then the smallest `i` for that `j`. Stops at the first hit.
    #[default]
    EarliestSecond,
    /// Smallest `(i, j)` in lexicographic order. Scans until `i = 0` or the end.
    Lexicographic,
}

impl TieBreak {
    pub fn as_str(self) -> &'static str {
        match self {
            TieBreak::EarliestSecond => "earliest_second",
            TieBreak::Lexicographic => "lexicographic",
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a tie-break policy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tie-break policy: '{0}'. Must be earliest_second or lexicographic.")]
pub struct ParseTieBreakError(String);

impl FromStr for TieBreak {
    type Err = ParseTieBreakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "earliest_second" | "earliest-second" => Ok(TieBreak::EarliestSecond),
            "lexicographic" => Ok(TieBreak::Lexicographic),
            other => Err(ParseTieBreakError(other.to_string())),
        }
    }
}

/// Find two positions whose values differ by exactly `k`, using
/// [`TieBreak::EarliestSecond`].
///
/// Returns `Ok(None)` when no pair exists (including empty and
/// single-element sequences) and `Err(GapError::InvalidArgument)` when
/// `k` is negative, regardless of the sequence.
pub fn find_pair(sequence: &[i64], k: i64) -> Result<Option<GapPair>, GapError> {
    find_pair_with(sequence, k, TieBreak::EarliestSecond)
}

/// Find two positions whose values differ by exactly `k`, resolving ties
/// with `tie_break`.
///
/// Runs in O(n) time and O(n) extra space. Lookups that would overflow
/// `i64` are skipped since no element can hold such a value.
pub fn find_pair_with(
    sequence: &[i64],
    k: i64,
    tie_break: TieBreak,
) -> Result<Option<GapPair>, GapError> {
    if k < 0 {
        return Err(GapError::InvalidArgument { k });
    }
    if sequence.len() < 2 {
        return Ok(None);
    }

    let mut first_seen: HashMap<i64, usize> = HashMap::with_capacity(sequence.len());
    let mut best: Option<GapPair> = None;

    for (j, &value) in sequence.iter().enumerate() {
        if let Some(i) = earliest_partner(&first_seen, value, k) {
            let candidate = GapPair { i, j };
            debug_assert!(is_gap_pair(sequence, candidate, k));

            match tie_break {
                TieBreak::EarliestSecond => return Ok(Some(candidate)),
                TieBreak::Lexicographic => {
                    if best.map_or(true, |b| candidate < b) {
                        best = Some(candidate);
                    }
                    // j only grows from here, so (0, j) cannot be beaten.
                    if i == 0 {
                        break;
                    }
                }
            }
        }
        first_seen.entry(value).or_insert(j);
    }

    Ok(best)
}

/// Check that `pair` is a valid answer for `sequence` and `k`: both indices
/// in range, `i < j`, and `|sequence[i] - sequence[j]| == k`.
pub fn is_gap_pair(sequence: &[i64], pair: GapPair, k: i64) -> bool {
    if pair.i >= pair.j {
        return false;
    }
    match pair.values(sequence) {
        Some((a, b)) => (i128::from(a) - i128::from(b)).abs() == i128::from(k),
        None => false,
    }
}

/// Earliest recorded index holding `value - k` or `value + k`.
fn earliest_partner(first_seen: &HashMap<i64, usize>, value: i64, k: i64) -> Option<usize> {
    [value.checked_sub(k), value.checked_add(k)]
        .into_iter()
        .flatten()
        .filter_map(|partner| first_seen.get(&partner).copied())
        .min()
}
