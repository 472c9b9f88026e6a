//! The tokenizer: inverted index, scorer and lattice builder.
//!
//! Aliases are indexed by fingerprint into postings lists. For a query,
//! [`Tokenizer::generate_graph`] builds a [`Lattice`]: at every query
//! position, one weighted edge per candidate alias, one per recognized
//! number phrase, and a length-1 unknown edge when nothing else
//! matched, so a walker can always cover the whole query.

pub mod edge;
pub mod scorer;
pub mod token;

use std::cmp::Ordering;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use tracing::{debug, trace};

use crate::analysis::term_model::{Hash, TermModel};
use crate::error::{Result, SemtokError};
use crate::lexicon::Alias;
use crate::matching::DiffResults;
use crate::numbers::NumberParser;

pub use edge::{Edge, EdgeLabel, Lattice};
pub use scorer::{score_match, Scored, DEFAULT_SCORE_FLOOR, REJECTED};
pub use token::SemanticToken;

/// Tokenizer configuration.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Scores at or below this floor are clamped to [`REJECTED`].
    pub score_floor: f64,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            score_floor: DEFAULT_SCORE_FLOOR,
        }
    }
}

/// The matching engine over one ingested alias set.
#[derive(Debug)]
pub struct Tokenizer {
    term_model: Arc<TermModel>,
    number_parser: Arc<NumberParser>,
    config: TokenizerConfig,
    aliases: Vec<Alias>,
    postings: AHashMap<Hash, Vec<usize>>,
    frequencies: AHashMap<Hash, u64>,
    hash_to_text: AHashMap<Hash, String>,
}

impl Tokenizer {
    /// Create a tokenizer with the default configuration.
    pub fn new(term_model: Arc<TermModel>, number_parser: Arc<NumberParser>) -> Self {
        Self::with_config(term_model, number_parser, TokenizerConfig::default())
    }

    /// Create a tokenizer with a custom configuration.
    pub fn with_config(
        term_model: Arc<TermModel>,
        number_parser: Arc<NumberParser>,
        config: TokenizerConfig,
    ) -> Self {
        Tokenizer {
            term_model,
            number_parser,
            config,
            aliases: Vec::new(),
            postings: AHashMap::new(),
            frequencies: AHashMap::new(),
            hash_to_text: AHashMap::new(),
        }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Index one alias, assigning the next dense id. Every fingerprint
    /// occurrence gets a postings entry and a frequency bump.
    pub fn add_item(&mut self, alias: Alias) -> usize {
        let id = self.aliases.len();
        for (hash, stem) in alias.hashes.iter().zip(&alias.stemmed) {
            self.postings.entry(*hash).or_default().push(id);
            *self.frequencies.entry(*hash).or_insert(0) += 1;
            // First sight wins; stores the stem, not the surface term.
            self.hash_to_text
                .entry(*hash)
                .or_insert_with(|| stem.clone());
        }

        trace!(id, token = %alias.token, terms = alias.hashes.len(), "indexed alias");
        self.aliases.push(alias);
        id
    }

    pub fn alias(&self, id: usize) -> Option<&Alias> {
        self.aliases.get(id)
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// The postings list of `hash` (alias ids, insertion order).
    pub fn postings(&self, hash: Hash) -> &[usize] {
        self.postings.get(&hash).map(Vec::as_slice).unwrap_or(&[])
    }

    /// How many times `hash` occurs across all indexed aliases.
    pub fn frequency(&self, hash: Hash) -> u64 {
        self.frequencies.get(&hash).copied().unwrap_or(0)
    }

    /// Stem text recorded for `hash`, for diagnostics.
    pub fn stem_text(&self, hash: Hash) -> Option<&str> {
        self.hash_to_text.get(&hash).map(String::as_str)
    }

    /// Split, stem and fingerprint `text`, then build its lattice.
    pub fn lattice_for(&self, text: &str) -> Lattice {
        let stems: Vec<String> = text
            .split_whitespace()
            .map(|term| self.term_model.stem(term))
            .collect();
        let hashes: Vec<Hash> = stems.iter().map(|stem| self.term_model.hash_term(stem)).collect();
        self.generate_graph(&hashes, &stems)
    }

    /// Build the lattice for a fingerprinted query. `stems` parallels
    /// `hashes` and feeds diagnostics only.
    pub fn generate_graph(&self, hashes: &[Hash], stems: &[String]) -> Lattice {
        debug_assert_eq!(hashes.len(), stems.len());

        let mut positions = Vec::with_capacity(hashes.len());
        for i in 0..hashes.len() {
            let tail = &hashes[i..];
            let mut edges = Vec::new();

            // Alias edges: candidates are the postings of the first
            // tail fingerprint, de-duplicated in insertion order.
            let mut seen = AHashSet::new();
            for &id in self.postings(tail[0]) {
                if !seen.insert(id) {
                    continue;
                }
                let scored = self.match_and_score(tail, &self.aliases[id]);
                if scored.length > 0 {
                    edges.push(Edge {
                        score: scored.score,
                        length: scored.length,
                        label: EdgeLabel::Alias(id),
                    });
                }
            }

            // Number edges: scored as exact matches with a
            // never-downstream policy.
            let mut numbers = Vec::new();
            self.number_parser.parse(tail, &mut numbers);
            for number in numbers {
                let diff = DiffResults::exact(&tail[..number.length]);
                let scored = score_match(&diff, number.length, &|_| false, self.config.score_floor);
                edges.push(Edge {
                    score: scored.score,
                    length: number.length,
                    label: EdgeLabel::Number(number.value),
                });
            }

            // Fallback: the walker must still be able to traverse this
            // position.
            if edges.is_empty() {
                edges.push(Edge {
                    score: 0.0,
                    length: 1,
                    label: EdgeLabel::Unknown,
                });
            }

            // Stable on insertion order for ties.
            edges.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
            trace!(position = i, stem = %stems[i], edges = edges.len(), "built lattice position");
            positions.push(edges);
        }

        debug!(positions = positions.len(), "generated lattice");
        Lattice::from_positions(positions)
    }

    fn match_and_score(&self, tail: &[Hash], alias: &Alias) -> Scored {
        let is_downstream = |hash: Hash| alias.is_downstream_term(hash);
        let is_opaque = |hash: Hash| self.term_model.is_token_hash(hash);
        let diff = alias
            .matcher
            .run(tail, &alias.hashes, &is_downstream, &is_opaque);
        score_match(
            &diff,
            alias.hashes.len(),
            &is_downstream,
            self.config.score_floor,
        )
    }

    /// Map an edge to its emitted token.
    pub fn token_from_edge(&self, edge: &Edge) -> Result<SemanticToken> {
        match edge.label {
            EdgeLabel::Alias(id) => self
                .aliases
                .get(id)
                .map(|alias| SemanticToken::Catalog {
                    label: alias.token.clone(),
                })
                .ok_or_else(|| SemtokError::invalid_argument(format!("unknown alias id {id}"))),
            EdgeLabel::Number(value) => Ok(SemanticToken::Number { value }),
            EdgeLabel::Unknown => Ok(SemanticToken::Unknown),
        }
    }
}
