//! Lattice edges and the per-position edge lists.

use serde::Serialize;

/// What an edge stands for. Carries both the edge kind and its label:
/// the winning alias id, the parsed numeric value, or nothing for an
/// unrecognized single term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeLabel {
    Alias(usize),
    Number(i64),
    Unknown,
}

impl EdgeLabel {
    pub fn is_unknown(&self) -> bool {
        matches!(self, EdgeLabel::Unknown)
    }
}

/// A weighted lattice edge covering `length` query positions.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub score: f64,
    pub length: usize,
    pub label: EdgeLabel,
}

/// Per-position edge lists covering a query. Entry `i` holds the edges
/// starting at query position `i`, sorted by descending score.
#[derive(Debug, Clone, Default)]
pub struct Lattice {
    positions: Vec<Vec<Edge>>,
}

impl Lattice {
    pub fn from_positions(positions: Vec<Vec<Edge>>) -> Self {
        Lattice { positions }
    }

    /// Query length: the number of positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Edges starting at `position`, best first.
    pub fn edges_at(&self, position: usize) -> &[Edge] {
        &self.positions[position]
    }
}
