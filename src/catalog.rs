//! Catalog definitions: the external input records the lexicon consumes.
//!
//! A catalog is a list of domains, each carrying labelled aliases.
//! Catalogs arrive as JSON, either inline or from a file.
//!
//! ```
//! use semtok::catalog::Catalog;
//!
//! let catalog = Catalog::from_json(
//!     r#"{ "domains": [ { "name": "menu", "aliases": [
//!         { "token": "ICE_TEA", "text": "ice tea" }
//!     ] } ] }"#,
//! ).unwrap();
//! let lexicon = catalog.build_lexicon().unwrap();
//! assert_eq!(lexicon.domains().len(), 1);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lexicon::{AliasSpec, Lexicon};

/// One domain's worth of alias definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainSpec {
    pub name: String,
    /// Non-ingestion domains only contribute downstream fingerprints.
    #[serde(default = "default_ingestion")]
    pub ingestion: bool,
    pub aliases: Vec<AliasSpec>,
}

fn default_ingestion() -> bool {
    true
}

/// A full catalog: the domains to register, in order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub domains: Vec<DomainSpec>,
}

impl Catalog {
    /// Parse a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Catalog> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Catalog> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Register every domain into a fresh lexicon.
    pub fn build_lexicon(&self) -> Result<Lexicon> {
        let mut lexicon = Lexicon::new();
        for domain in &self.domains {
            lexicon.add_domain(&domain.name, domain.aliases.iter().cloned(), domain.ingestion)?;
        }
        Ok(lexicon)
    }
}
