//! Dominating set search
//!
//! A subset `D` dominates a graph when every vertex is in `D` or adjacent
//! to a member of `D`. Two searches are provided:
//! - [`exact`]: exhaustive search over subsets by increasing size (minimum)
//! - [`greedy`]: marginal-coverage heuristic (valid, not necessarily minimum)
//!
//! Both operate on canonical vertex indices and return them ascending.

pub mod exact;
pub mod greedy;

use crate::domain::graph::{Graph, Vertex};
use crate::domain::vertex_set::VertexSet;

/// Check whether `candidate` (vertex values) dominates `graph`
///
/// Returns false if any candidate is not a vertex of `graph`.
pub fn is_dominating_set(graph: &Graph, candidate: &[Vertex]) -> bool {
    let mut indices = Vec::with_capacity(candidate.len());
    for &v in candidate {
        match graph.index_of(v) {
            Some(i) => indices.push(i),
            None => return false,
        }
    }
    dominates_indices(graph, &indices)
}

/// Check whether the vertices at `indices` dominate `graph`
pub fn dominates_indices(graph: &Graph, indices: &[usize]) -> bool {
    let mut dominated = VertexSet::from_indices(graph.len(), indices.iter().copied());
    for &i in indices {
        for &j in graph.neighbors(i) {
            dominated.insert(j);
        }
    }
    dominated.len() == graph.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path3() -> Graph {
        Graph::from_edges([1, 2, 3], [(1, 2), (2, 3)]).unwrap()
    }

    #[test]
    fn test_center_of_path_dominates() {
        assert!(is_dominating_set(&path3(), &[2]));
    }

    #[test]
    fn test_endpoint_of_path_does_not_dominate() {
        assert!(!is_dominating_set(&path3(), &[1]));
        assert!(is_dominating_set(&path3(), &[1, 3]));
    }

    #[test]
    fn test_empty_set_dominates_only_empty_graph() {
        assert!(is_dominating_set(&Graph::empty(), &[]));
        assert!(!is_dominating_set(&path3(), &[]));
    }

    #[test]
    fn test_unknown_vertex_is_not_dominating() {
        assert!(!is_dominating_set(&path3(), &[2, 99]));
    }

    #[test]
    fn test_isolated_vertex_must_be_chosen() {
        let g = Graph::from_edges([1, 2, 3], [(1, 2)]).unwrap();
        assert!(!is_dominating_set(&g, &[1]));
        assert!(is_dominating_set(&g, &[1, 3]));
    }
}
