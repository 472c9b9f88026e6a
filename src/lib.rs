//! # Semtok
//!
//! An approximate semantic tokenizer for catalog-driven conversational
//! interfaces, built to survive speech-to-text noise: mis-stemmings,
//! insertions, dropped articles, reorderings and numerals spelled as
//! words.
//!
//! ## Features
//!
//! - Stemmed, fingerprinted alias lexicon grouped into domains
//! - Inverted index with an approximate-match scorer
//! - Spelled-out cardinal number recognition
//! - Per-query edge lattice with best-first path enumeration
//!
//! ## Example
//!
//! ```
//! use semtok::prelude::*;
//!
//! let mut lexicon = Lexicon::new();
//! lexicon.add_domain("menu", vec![AliasSpec::new("ICE_TEA", "ice tea")], true)?;
//!
//! let mut tokenizer = Tokenizer::new(
//!     lexicon.term_model().clone(),
//!     lexicon.number_parser().clone(),
//! );
//! lexicon.ingest(&mut tokenizer)?;
//!
//! let lattice = tokenizer.lattice_for("two ice teas");
//! let walker = GraphWalker::new(&lattice);
//! let tokens: Vec<String> = walker
//!     .right()
//!     .iter()
//!     .map(|step| {
//!         tokenizer
//!             .token_from_edge(walker.edge(*step))
//!             .map(|token| token.to_string())
//!     })
//!     .collect::<semtok::error::Result<_>>()?;
//! assert_eq!(tokens, vec!["2", "ICE_TEA"]);
//! # Ok::<(), semtok::error::SemtokError>(())
//! ```

pub mod analysis;
pub mod catalog;
pub mod error;
pub mod graph;
pub mod lexicon;
pub mod matching;
pub mod numbers;
pub mod tokenizer;
pub mod util;

pub mod prelude {
    pub use crate::analysis::{EnglishStemmer, Hash, IdentityStemmer, Stemmer, TermModel};
    pub use crate::catalog::{Catalog, DomainSpec};
    pub use crate::error::{Result, SemtokError};
    pub use crate::graph::{enumerate_paths, enumerate_paths_static, GraphWalker, PathStep};
    pub use crate::lexicon::{Alias, AliasSpec, Domain, Lexicon};
    pub use crate::matching::{DiffResults, MatcherKind};
    pub use crate::numbers::{NumberMatch, NumberParser};
    pub use crate::tokenizer::{
        Edge, EdgeLabel, Lattice, SemanticToken, Tokenizer, TokenizerConfig,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
