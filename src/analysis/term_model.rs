//! The term model: stemming, fingerprinting and fingerprint tagging.
//!
//! Every surface term is stemmed and then hashed to a 32-bit
//! [`Hash`] fingerprint. Fingerprints partition into three tags:
//! *numeric* (the reserved fingerprint the number parser uses to mark a
//! numeric position), *opaque token* (reserved placeholder fingerprints
//! that matching must never alter), and *ordinary* (everything else).

use ahash::AHashSet;

use crate::analysis::stemmer::{EnglishStemmer, Stemmer};
use crate::util::murmur3_32;

/// A 32-bit term fingerprint.
pub type Hash = u32;

/// Seed for the fingerprint hash.
const HASH_SEED: u32 = 0;

/// Reserved surface form whose fingerprint marks a numeric position.
pub const NUMBER_TERM: &str = "{number}";

/// The term model owns the stemmer and the reserved fingerprint tags.
pub struct TermModel {
    stemmer: Box<dyn Stemmer>,
    number_hash: Hash,
    token_hashes: AHashSet<Hash>,
}

impl std::fmt::Debug for TermModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermModel")
            .field("stemmer", &self.stemmer.name())
            .field("number_hash", &self.number_hash)
            .field("token_hashes", &self.token_hashes.len())
            .finish()
    }
}

impl TermModel {
    /// Create a term model with the English stemmer and no opaque tokens.
    pub fn new() -> Self {
        Self::with_stemmer(Box::new(EnglishStemmer::new()))
    }

    /// Create a term model with a custom stemmer.
    pub fn with_stemmer(stemmer: Box<dyn Stemmer>) -> Self {
        TermModel {
            stemmer,
            // Reserved terms are hashed verbatim; braces keep them out of
            // the space of whitespace-split surface terms.
            number_hash: murmur3_32(NUMBER_TERM.as_bytes(), HASH_SEED),
            token_hashes: AHashSet::new(),
        }
    }

    /// Register opaque placeholder terms. Their fingerprints are hashed
    /// verbatim and matching treats them as untouchable.
    pub fn with_opaque_tokens<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            self.token_hashes
                .insert(murmur3_32(term.as_ref().as_bytes(), HASH_SEED));
        }
        self
    }

    /// Stem a surface term.
    pub fn stem(&self, term: &str) -> String {
        self.stemmer.stem(term)
    }

    /// Fingerprint an already-stemmed term.
    pub fn hash_term(&self, stem: &str) -> Hash {
        murmur3_32(stem.as_bytes(), HASH_SEED)
    }

    /// Stem a surface term and fingerprint the stem.
    pub fn stem_and_hash(&self, term: &str) -> Hash {
        self.hash_term(&self.stem(term))
    }

    /// The reserved numeric fingerprint.
    pub fn number_hash(&self) -> Hash {
        self.number_hash
    }

    /// Whether `hash` is the reserved numeric fingerprint.
    pub fn is_number_hash(&self, hash: Hash) -> bool {
        hash == self.number_hash
    }

    /// Whether `hash` is a reserved opaque-token fingerprint.
    pub fn is_token_hash(&self, hash: Hash) -> bool {
        self.token_hashes.contains(&hash)
    }

    /// All reserved opaque-token fingerprints.
    pub fn token_hashes(&self) -> &AHashSet<Hash> {
        &self.token_hashes
    }
}

impl Default for TermModel {
    fn default() -> Self {
        Self::new()
    }
}
