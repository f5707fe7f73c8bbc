//! Serializable result of a gap search.
//!
//! [`GapReport`] is the response shape shared by `pgap find --json` and
//! `POST /api/price-gap-pair`:
//!
//! ```json
//! { "indices": [0, 2], "values": [4, 6], "message": "Valid pair found" }
//! { "indices": null, "values": null, "message": "No valid pair found" }
//! ```

use serde::{Deserialize, Serialize};

use crate::gap::GapPair;

pub const FOUND_MESSAGE: &str = "Valid pair found";
pub const NOT_FOUND_MESSAGE: &str = "No valid pair found";

/// Outcome of a search, with the values at the matched positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapReport {
    /// `[i, j]` with `i < j`, or `null` when no pair exists.
    pub indices: Option<[usize; 2]>,
    /// `[sequence[i], sequence[j]]`, or `null` when no pair exists.
    pub values: Option<[i64; 2]>,
    /// Human-readable summary.
    pub message: String,
}

impl GapReport {
    /// Build a report for `outcome` against the sequence it was computed from.
    ///
    /// `outcome` must come from a search over `sequence`. In debug builds an
    /// out-of-range pair panics; in release builds it is reported as absent.
    pub fn new(sequence: &[i64], outcome: Option<GapPair>) -> Self {
        debug_assert!(
            outcome.map_or(true, |pair| pair.values(sequence).is_some()),
            "pair {:?} out of range for a sequence of length {}",
            outcome,
            sequence.len()
        );

        let matched = outcome.and_then(|pair| pair.values(sequence).map(|vals| (pair, vals)));

        match matched {
            Some((pair, (a, b))) => Self {
                indices: Some([pair.i, pair.j]),
                values: Some([a, b]),
                message: FOUND_MESSAGE.to_string(),
            },
            None => Self::not_found(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            indices: None,
            values: None,
            message: NOT_FOUND_MESSAGE.to_string(),
        }
    }

    pub fn found(&self) -> bool {
        self.indices.is_some()
    }
}
