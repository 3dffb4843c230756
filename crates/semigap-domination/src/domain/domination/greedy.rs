//! Greedy dominating set heuristic
//!
//! Repeatedly picks the vertex whose open neighborhood covers the most
//! still-uncovered vertices, then marks it and its neighbors covered.
//! Ties go to the first vertex in canonical order.
//!
//! When no vertex's neighborhood reaches an uncovered vertex, the remaining
//! uncovered vertices can only dominate themselves, so the first of them is
//! picked. Every round therefore removes at least one uncovered vertex.

use crate::domain::graph::Graph;
use crate::domain::vertex_set::VertexSet;

/// Build a dominating set greedily
///
/// The result is always dominating but not necessarily minimum.
///
/// # Returns
/// Canonical indices of the chosen vertices, ascending.
pub fn greedy_dominating_set(graph: &Graph) -> Vec<usize> {
    let n = graph.len();
    let open: Vec<VertexSet> = (0..n)
        .map(|i| VertexSet::from_indices(n, graph.neighbors(i).iter().copied()))
        .collect();

    let mut uncovered = VertexSet::full(n);
    let mut chosen = Vec::new();

    while let Some(first_uncovered) = uncovered.first() {
        let mut best = 0;
        let mut best_score = 0;
        for (v, neighbors) in open.iter().enumerate() {
            let score = neighbors.intersection_count(&uncovered);
            if score > best_score {
                best = v;
                best_score = score;
            }
        }

        if best_score == 0 {
            best = first_uncovered;
        }

        chosen.push(best);
        uncovered.remove(best);
        uncovered.difference_with(&open[best]);
    }

    chosen.sort_unstable();
    chosen
}
