//! Gap graph construction
//!
//! The gaps of a bounded semigroup become vertices; two gaps are adjacent
//! when their difference is a semigroup element.

use tracing::debug;

use crate::constants::DEFAULT_LIMIT_FACTOR;
use crate::domain::graph::{Graph, Vertex};
use crate::domain::semigroup::{Semigroup, generate_semigroup};
use crate::error::InputError;

/// Gap graph together with the data it was derived from
#[derive(Clone, Debug)]
pub struct GapGraph {
    /// Graph over the gaps
    pub graph: Graph,
    /// Gaps in ascending order (identical to `graph.vertices()`)
    pub gaps: Vec<Vertex>,
    /// Semigroup the gaps were taken from
    pub semigroup: Semigroup,
}

/// Build the gap graph with the default limit factor
pub fn build_gap_graph(generators: &[u32]) -> Result<GapGraph, InputError> {
    build_gap_graph_with_limit(generators, DEFAULT_LIMIT_FACTOR)
}

/// Build the gap graph of the semigroup bounded by `max(generators) * limit_factor`
///
/// Every unordered pair of gaps is tested once, so the cost is quadratic in
/// the number of gaps.
pub fn build_gap_graph_with_limit(
    generators: &[u32],
    limit_factor: u32,
) -> Result<GapGraph, InputError> {
    let semigroup = generate_semigroup(generators, limit_factor)?;
    let gaps = semigroup.gaps();
    let graph = gap_graph_from(&semigroup, &gaps);

    debug!(
        gaps = gaps.len(),
        edges = graph.edge_count(),
        "gap graph built"
    );

    Ok(GapGraph {
        graph,
        gaps,
        semigroup,
    })
}

/// Connect gaps whose difference lies in `semigroup`
///
/// `gaps` must be strictly ascending.
fn gap_graph_from(semigroup: &Semigroup, gaps: &[Vertex]) -> Graph {
    let mut adjacency = vec![Vec::new(); gaps.len()];

    for i in 0..gaps.len() {
        for j in (i + 1)..gaps.len() {
            if semigroup.contains(gaps[j] - gaps[i]) {
                adjacency[i].push(j);
                adjacency[j].push(i);
            }
        }
    }

    // Pushes happen in ascending j for row i and ascending i for row j,
    // so every row is already sorted.
    Graph::from_sorted_parts(gaps.to_vec(), adjacency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_five_gap_graph() {
        let gg = build_gap_graph_with_limit(&[3, 5], 4).unwrap();

        assert_eq!(gg.gaps, vec![1, 2, 4, 7]);
        assert_eq!(gg.graph.vertices(), gg.gaps.as_slice());
        assert_eq!(gg.graph.edges(), vec![(1, 4), (1, 7), (2, 7), (4, 7)]);
        assert!(gg.graph.has_edge(1, 4));
        assert!(!gg.graph.has_edge(1, 2));
    }

    #[test]
    fn test_default_limit_matches_small_limit_for_three_five() {
        let small = build_gap_graph_with_limit(&[3, 5], 4).unwrap();
        let default = build_gap_graph(&[3, 5]).unwrap();

        assert_eq!(default.semigroup.bound(), 100);
        assert_eq!(small.graph, default.graph);
    }

    #[test]
    fn test_no_gaps_gives_empty_graph() {
        let gg = build_gap_graph(&[1, 4]).unwrap();

        assert!(gg.gaps.is_empty());
        assert!(gg.graph.is_empty());
    }

    #[test]
    fn test_edges_match_semigroup_membership() {
        let gg = build_gap_graph(&[5, 7, 11]).unwrap();

        for (idx, &a) in gg.gaps.iter().enumerate() {
            for &b in &gg.gaps[idx + 1..] {
                assert_eq!(
                    gg.graph.has_edge(a, b),
                    gg.semigroup.contains(b - a),
                    "pair ({}, {})",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_invalid_generators_propagate() {
        assert!(matches!(
            build_gap_graph(&[]),
            Err(InputError::EmptyGenerators)
        ));
    }
}
