//! Domains: named alias groups with uniform provenance.

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::term_model::Hash;
use crate::lexicon::alias::{Alias, DownstreamSet};

/// A set of aliases sharing provenance (a catalog, the intents, the
/// quantifiers). Non-ingestion domains contribute their fingerprints to
/// other domains' downstream sets but are never indexed.
#[derive(Debug)]
pub struct Domain {
    name: String,
    aliases: Vec<Alias>,
    own: AHashSet<Hash>,
    downstream: Arc<DownstreamSet>,
    ingestion: bool,
}

impl Domain {
    pub(crate) fn new(name: &str, ingestion: bool) -> Self {
        Domain {
            name: name.to_string(),
            aliases: Vec::new(),
            own: AHashSet::new(),
            downstream: Arc::default(),
            ingestion,
        }
    }

    pub(crate) fn add(&mut self, alias: Alias) {
        self.own.extend(alias.hashes.iter().copied());
        self.aliases.push(alias);
    }

    pub(crate) fn set_downstream(&mut self, downstream: Arc<DownstreamSet>) {
        self.downstream = downstream;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_ingestion(&self) -> bool {
        self.ingestion
    }

    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    /// Union of all alias fingerprints in this domain.
    pub fn own_hashes(&self) -> &AHashSet<Hash> {
        &self.own
    }

    /// The downstream set resolved at ingestion time.
    pub fn downstream(&self) -> &Arc<DownstreamSet> {
        &self.downstream
    }
}
