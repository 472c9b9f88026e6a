//! Aliases: labelled surface phrases registered for matching.

use std::sync::Arc;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::analysis::term_model::{Hash, TermModel};
use crate::error::{Result, SemtokError};
use crate::matching::MatcherKind;

/// Input record for one alias, as read from a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasSpec {
    /// Opaque label emitted when this alias wins an edge.
    pub token: String,
    /// Lower-case whitespace-separated surface phrase.
    pub text: String,
    /// Diff policy; approximate unless overridden.
    #[serde(default)]
    pub matcher: MatcherKind,
}

impl AliasSpec {
    pub fn new<T: Into<String>, S: Into<String>>(token: T, text: S) -> Self {
        AliasSpec {
            token: token.into(),
            text: text.into(),
            matcher: MatcherKind::default(),
        }
    }

    pub fn with_matcher(mut self, matcher: MatcherKind) -> Self {
        self.matcher = matcher;
        self
    }
}

/// A domain's resolved downstream fingerprints, shared by its aliases.
///
/// A tagged set handle rather than a per-alias closure: one allocation
/// per domain at ingestion time.
#[derive(Debug, Default)]
pub struct DownstreamSet {
    hashes: AHashSet<Hash>,
}

impl DownstreamSet {
    pub fn new(hashes: AHashSet<Hash>) -> Self {
        DownstreamSet { hashes }
    }

    pub fn contains(&self, hash: Hash) -> bool {
        self.hashes.contains(&hash)
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

/// A registered alias: the fundamental indexed unit.
///
/// `terms`, `stemmed` and `hashes` always have the same non-zero
/// length. Aliases are immutable once handed to the tokenizer.
#[derive(Debug, Clone)]
pub struct Alias {
    pub token: String,
    pub text: String,
    pub terms: Vec<String>,
    pub stemmed: Vec<String>,
    pub hashes: Vec<Hash>,
    pub matcher: MatcherKind,
    downstream: Arc<DownstreamSet>,
}

impl Alias {
    /// Split, stem and fingerprint an alias spec. Empty text is a
    /// registration error.
    pub fn build(spec: &AliasSpec, model: &TermModel) -> Result<Alias> {
        let terms: Vec<String> = spec.text.split_whitespace().map(str::to_string).collect();
        if terms.is_empty() {
            return Err(SemtokError::lexicon(format!(
                "alias '{}' has empty text",
                spec.token
            )));
        }

        let stemmed: Vec<String> = terms.iter().map(|term| model.stem(term)).collect();
        let hashes: Vec<Hash> = stemmed.iter().map(|stem| model.hash_term(stem)).collect();

        Ok(Alias {
            token: spec.token.clone(),
            text: spec.text.clone(),
            terms,
            stemmed,
            hashes,
            matcher: spec.matcher,
            downstream: Arc::default(),
        })
    }

    /// Attach the owning domain's resolved downstream set.
    pub(crate) fn with_downstream(mut self, downstream: Arc<DownstreamSet>) -> Alias {
        self.downstream = downstream;
        self
    }

    /// Whether, from this alias's perspective, `hash` belongs primarily
    /// to another domain (or is numeric / opaque).
    pub fn is_downstream_term(&self, hash: Hash) -> bool {
        self.downstream.contains(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_stems_and_hashes() {
        let model = TermModel::new();
        let alias = Alias::build(&AliasSpec::new("TEA", "small unsweeten ice tea"), &model).unwrap();

        assert_eq!(alias.terms.len(), 4);
        assert_eq!(alias.stemmed.len(), 4);
        assert_eq!(
            alias.hashes,
            vec![2557986934, 1506511588, 4077993285, 1955911164]
        );
        assert_eq!(alias.matcher, MatcherKind::Approximate);
    }

    #[test]
    fn test_build_rejects_empty_text() {
        let model = TermModel::new();
        assert!(Alias::build(&AliasSpec::new("X", ""), &model).is_err());
        assert!(Alias::build(&AliasSpec::new("X", "   "), &model).is_err());
    }

    #[test]
    fn test_downstream_predicate() {
        let model = TermModel::new();
        let mut hashes = AHashSet::new();
        hashes.insert(model.stem_and_hash("red"));
        let downstream = Arc::new(DownstreamSet::new(hashes));

        let alias = Alias::build(&AliasSpec::new("CAR", "red sedan"), &model)
            .unwrap()
            .with_downstream(downstream);

        assert!(alias.is_downstream_term(model.stem_and_hash("red")));
        assert!(!alias.is_downstream_term(model.stem_and_hash("sedan")));
    }

    #[test]
    fn test_alias_spec_json() {
        let spec: AliasSpec =
            serde_json::from_str(r#"{"token": "TEA", "text": "ice tea", "matcher": "exact_prefix"}"#)
                .unwrap();
        assert_eq!(spec.matcher, MatcherKind::ExactPrefix);

        let spec: AliasSpec = serde_json::from_str(r#"{"token": "TEA", "text": "ice tea"}"#).unwrap();
        assert_eq!(spec.matcher, MatcherKind::Approximate);
    }
}
