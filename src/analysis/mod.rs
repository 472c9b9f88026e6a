//! Text analysis: stemming and term fingerprinting.

pub mod stemmer;
pub mod term_model;

pub use stemmer::{EnglishStemmer, IdentityStemmer, Stemmer};
pub use term_model::{Hash, TermModel, NUMBER_TERM};
