//! Matchers producing alignment statistics for the scorer.

pub mod diff;

use serde::{Deserialize, Serialize};

use crate::analysis::term_model::Hash;
pub use diff::{approximate, exact_prefix, DiffResults};

/// The diff policy attached to an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatcherKind {
    /// The whole alias must be a literal prefix of the query.
    ExactPrefix,
    /// Edit-distance-style fitting alignment.
    #[default]
    Approximate,
}

impl MatcherKind {
    /// Run this matcher over a query tail and an alias's fingerprints.
    pub fn run(
        &self,
        query: &[Hash],
        prefix: &[Hash],
        is_downstream: &dyn Fn(Hash) -> bool,
        is_opaque: &dyn Fn(Hash) -> bool,
    ) -> DiffResults {
        match self {
            MatcherKind::ExactPrefix => exact_prefix(query, prefix),
            MatcherKind::Approximate => approximate(query, prefix, is_downstream, is_opaque),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MatcherKind::ExactPrefix => "exact_prefix",
            MatcherKind::Approximate => "approximate",
        }
    }
}
