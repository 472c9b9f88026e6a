//! Best-first enumeration of complete lattice paths.

pub mod paths;
pub mod walker;

pub use paths::{enumerate_paths, enumerate_paths_static};
pub use walker::{GraphWalker, PathStep};
