//! Scoring of alignment statistics into edge weights.
//!
//! The score is a product of closed-form factors over the matcher's
//! [`DiffResults`]. Scores at or below the configured floor, and
//! matches rejected outright, are clamped to [`REJECTED`]; rejected
//! edges stay in the lattice (deprioritized) so a walker always has a
//! completion.

use tracing::trace;

use crate::analysis::term_model::Hash;
use crate::matching::DiffResults;

/// Tuned score floor; overridable through the tokenizer config.
pub const DEFAULT_SCORE_FLOOR: f64 = 0.01;

/// The score assigned to rejected matches.
pub const REJECTED: f64 = -1.0;

/// A scored alignment: the edge weight and how many query positions the
/// edge consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub score: f64,
    pub length: usize,
}

/// Score one alignment of an alias (or number phrase) against a query
/// tail. `prefix_len` is the full fingerprint count of the alias,
/// duplicates included.
pub fn score_match(
    diff: &DiffResults,
    prefix_len: usize,
    is_downstream: &dyn Fn(Hash) -> bool,
    score_floor: f64,
) -> Scored {
    if diff.is_empty() {
        return Scored {
            score: 0.0,
            length: 0,
        };
    }

    let length = diff.rightmost_a + 1;
    let covered = length as f64;
    let cost = diff.cost as f64;
    let matched = diff.matched.len() as f64;
    let common = diff.common_terms.len();
    let downstream = diff
        .common_terms
        .iter()
        .filter(|&&hash| is_downstream(hash))
        .count();

    // A match made entirely of downstream terms claims nothing of its
    // own unless it covers the whole alias.
    if common > 0 && common == downstream && common != prefix_len {
        return Scored {
            score: REJECTED,
            length,
        };
    }

    let match_factor = if covered > cost {
        (covered - cost) / covered
    } else {
        1.0 / (covered + cost)
    };
    let common_factor = common as f64 / matched;
    let position_factor = (matched - diff.leftmost_a as f64).max(0.0) / matched;
    let length_factor = matched;
    let downstream_word_factor = (common - downstream) as f64 / common as f64;

    let score = match_factor * common_factor * position_factor * length_factor;
    trace!(
        match_factor,
        common_factor,
        position_factor,
        length_factor,
        downstream_word_factor,
        score,
        "scored alignment"
    );

    if score <= score_floor {
        return Scored {
            score: REJECTED,
            length,
        };
    }
    Scored { score, length }
}
