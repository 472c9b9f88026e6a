//! Full-path enumeration, dynamically and statically.
//!
//! Both functions yield the same path sequence for any lattice: best
//! continuation first, then siblings in per-position score order, the
//! deepest choice varying fastest. The dynamic form drives a
//! [`GraphWalker`]; the static form precomputes the same order by
//! depth-first recursion, and exists so the two can be checked against
//! each other.

use crate::graph::walker::{GraphWalker, PathStep};
use crate::tokenizer::edge::Lattice;

/// Enumerate every complete path via walker advance/retreat/discard.
pub fn enumerate_paths(lattice: &Lattice) -> Vec<Vec<PathStep>> {
    let mut walker = GraphWalker::new(lattice);
    let mut paths = Vec::new();

    'search: loop {
        while !walker.complete() {
            if !walker.advance() {
                // Dead end below this prefix: back out to the next
                // untried sibling.
                loop {
                    if !walker.retreat(false) {
                        break 'search;
                    }
                    if walker.discard() {
                        continue 'search;
                    }
                }
            }
        }

        paths.push(walker.left().to_vec());

        loop {
            if !walker.retreat(false) {
                break 'search;
            }
            if walker.discard() {
                continue 'search;
            }
        }
    }

    paths
}

/// Enumerate every complete path by precomputed depth-first recursion.
pub fn enumerate_paths_static(lattice: &Lattice) -> Vec<Vec<PathStep>> {
    let mut paths = Vec::new();
    let mut prefix = Vec::new();
    descend(lattice, 0, &mut prefix, &mut paths);
    paths
}

fn descend(
    lattice: &Lattice,
    position: usize,
    prefix: &mut Vec<PathStep>,
    paths: &mut Vec<Vec<PathStep>>,
) {
    if position == lattice.len() {
        paths.push(prefix.clone());
        return;
    }
    for (index, edge) in lattice.edges_at(position).iter().enumerate() {
        if position + edge.length <= lattice.len() {
            prefix.push(PathStep { position, index });
            descend(lattice, position + edge.length, prefix, paths);
            prefix.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::edge::{Edge, EdgeLabel};

    fn lattice(positions: Vec<Vec<(f64, usize)>>) -> Lattice {
        Lattice::from_positions(
            positions
                .into_iter()
                .map(|edges| {
                    edges
                        .into_iter()
                        .map(|(score, length)| Edge {
                            score,
                            length,
                            label: EdgeLabel::Unknown,
                        })
                        .collect()
                })
                .collect(),
        )
    }

    #[test]
    fn test_enumeration_order() {
        let lattice = lattice(vec![
            vec![(3.0, 1), (2.0, 2), (1.5, 3)],
            vec![(2.5, 1), (2.0, 2)],
            vec![(1.0, 1)],
        ]);

        let expected: Vec<Vec<PathStep>> = vec![
            vec![
                PathStep {
                    position: 0,
                    index: 0,
                },
                PathStep {
                    position: 1,
                    index: 0,
                },
                PathStep {
                    position: 2,
                    index: 0,
                },
            ],
            vec![
                PathStep {
                    position: 0,
                    index: 0,
                },
                PathStep {
                    position: 1,
                    index: 1,
                },
            ],
            vec![
                PathStep {
                    position: 0,
                    index: 1,
                },
                PathStep {
                    position: 2,
                    index: 0,
                },
            ],
            vec![PathStep {
                position: 0,
                index: 2,
            }],
        ];

        assert_eq!(enumerate_paths(&lattice), expected);
        assert_eq!(enumerate_paths_static(&lattice), expected);
    }

    #[test]
    fn test_empty_lattice_has_one_empty_path() {
        let lattice = Lattice::default();
        assert_eq!(enumerate_paths(&lattice), vec![Vec::new()]);
        assert_eq!(enumerate_paths_static(&lattice), vec![Vec::new()]);
    }

    #[test]
    fn test_single_chain() {
        let lattice = lattice(vec![vec![(1.0, 1)], vec![(1.0, 1)], vec![(1.0, 1)]]);
        let paths = enumerate_paths(&lattice);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 3);
    }
}
