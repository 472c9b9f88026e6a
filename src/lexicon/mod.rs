//! The lexicon: domains of aliases over one term model and number
//! parser.
//!
//! Registration stems, fingerprints and groups aliases; ingestion
//! resolves each domain's downstream fingerprint set and feeds every
//! ingestion-domain alias to the tokenizer's inverted index.

pub mod alias;
pub mod domain;

use std::sync::Arc;

use ahash::AHashSet;
use tracing::debug;

use crate::analysis::term_model::{Hash, TermModel};
use crate::error::Result;
use crate::numbers::NumberParser;
use crate::tokenizer::Tokenizer;

pub use alias::{Alias, AliasSpec, DownstreamSet};
pub use domain::Domain;

/// Owner of the term model, the number parser and the domain list.
#[derive(Debug)]
pub struct Lexicon {
    term_model: Arc<TermModel>,
    number_parser: Arc<NumberParser>,
    domains: Vec<Domain>,
}

impl Lexicon {
    /// Create a lexicon over a fresh English term model.
    pub fn new() -> Self {
        Self::with_term_model(Arc::new(TermModel::new()))
    }

    /// Create a lexicon over a caller-supplied term model.
    pub fn with_term_model(term_model: Arc<TermModel>) -> Self {
        let number_parser = Arc::new(NumberParser::new(&term_model));
        Lexicon {
            term_model,
            number_parser,
            domains: Vec::new(),
        }
    }

    pub fn term_model(&self) -> &Arc<TermModel> {
        &self.term_model
    }

    pub fn number_parser(&self) -> &Arc<NumberParser> {
        &self.number_parser
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// Register a domain of aliases. Registration is an append; aliases
    /// with empty text are rejected.
    pub fn add_domain<I>(&mut self, name: &str, specs: I, for_ingestion: bool) -> Result<()>
    where
        I: IntoIterator<Item = AliasSpec>,
    {
        let mut domain = Domain::new(name, for_ingestion);
        for spec in specs {
            domain.add(Alias::build(&spec, &self.term_model)?);
        }

        debug!(
            domain = name,
            aliases = domain.aliases().len(),
            ingestion = for_ingestion,
            "registered domain"
        );
        self.domains.push(domain);
        Ok(())
    }

    /// Resolve every domain's downstream set, then hand each ingestion
    /// domain's aliases to the tokenizer.
    pub fn ingest(&mut self, tokenizer: &mut Tokenizer) -> Result<()> {
        for index in 0..self.domains.len() {
            let downstream = Arc::new(DownstreamSet::new(self.downstream_for(index)));
            self.domains[index].set_downstream(downstream);
        }

        for domain in &self.domains {
            if !domain.is_ingestion() {
                continue;
            }
            for alias in domain.aliases() {
                tokenizer.add_item(alias.clone().with_downstream(domain.downstream().clone()));
            }
            debug!(
                domain = domain.name(),
                aliases = domain.aliases().len(),
                downstream = domain.downstream().len(),
                "ingested domain"
            );
        }
        Ok(())
    }

    /// downstream(D) = numeric ∪ opaque ∪ ⋃ own(D') for D' ≠ D.
    fn downstream_for(&self, index: usize) -> AHashSet<Hash> {
        let mut set = self.number_parser.own_hashed_terms().clone();
        set.insert(self.term_model.number_hash());
        set.extend(self.term_model.token_hashes().iter().copied());
        for (i, other) in self.domains.iter().enumerate() {
            if i != index {
                set.extend(other.own_hashes().iter().copied());
            }
        }
        set
    }

    /// Every surface term the lexicon can recognize, including the
    /// number vocabulary. Callers use this to filter speech-to-text
    /// output.
    pub fn terms(&self) -> AHashSet<String> {
        let mut set = AHashSet::new();
        for domain in &self.domains {
            for alias in domain.aliases() {
                for term in &alias.terms {
                    set.insert(term.clone());
                }
            }
        }
        self.number_parser.add_terms_to_set(&mut set);
        set
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}
