//! Error types for the Semtok library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! crate-wide [`SemtokError`] enum.
//!
//! # Examples
//!
//! ```
//! use semtok::error::{Result, SemtokError};
//!
//! fn register(text: &str) -> Result<()> {
//!     if text.trim().is_empty() {
//!         return Err(SemtokError::lexicon("empty alias text"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(register("ice tea").is_ok());
//! assert!(register("").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Semtok operations.
#[derive(Error, Debug)]
pub enum SemtokError {
    /// I/O errors (catalog files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Lexicon and alias registration errors.
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Analysis errors (stemming, hashing, term tagging).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Lattice and walker errors.
    #[error("Graph error: {0}")]
    Graph(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`SemtokError`].
pub type Result<T> = std::result::Result<T, SemtokError>;

impl SemtokError {
    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        SemtokError::Lexicon(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SemtokError::Analysis(msg.into())
    }

    /// Create a new graph error.
    pub fn graph<S: Into<String>>(msg: S) -> Self {
        SemtokError::Graph(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SemtokError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SemtokError::Other(msg.into())
    }
}
