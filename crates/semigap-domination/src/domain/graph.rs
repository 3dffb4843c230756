//! Immutable simple undirected graph
//!
//! Vertices are identified by their integer value and stored once in
//! ascending order. That order is the canonical order every algorithm in
//! this crate iterates in; a vertex's position in it is its index.

use crate::error::InputError;

/// Vertex identity (the gap value itself)
pub type Vertex = u32;

/// Finite simple undirected graph with a materialized vertex set
///
/// Invariants: vertices are strictly ascending, adjacency is symmetric,
/// irreflexive and each neighbor list is strictly ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    /// Vertex values in canonical (ascending) order
    vertices: Vec<Vertex>,
    /// Neighbor indices per vertex index
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Create a graph with no vertices
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a graph from vertex values and undirected edges
    ///
    /// Duplicate vertices and duplicate edges are merged. Both edge
    /// orientations describe the same edge.
    ///
    /// # Errors
    /// [`InputError::SelfLoop`] for an edge `(v, v)` and
    /// [`InputError::UnknownVertex`] for an endpoint missing from `vertices`.
    pub fn from_edges<V, E>(vertices: V, edges: E) -> Result<Self, InputError>
    where
        V: IntoIterator<Item = Vertex>,
        E: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let mut vertices: Vec<Vertex> = vertices.into_iter().collect();
        vertices.sort_unstable();
        vertices.dedup();

        let mut adjacency = vec![Vec::new(); vertices.len()];
        for (a, b) in edges {
            if a == b {
                return Err(InputError::SelfLoop(a));
            }
            let i = vertices
                .binary_search(&a)
                .map_err(|_| InputError::UnknownVertex(a))?;
            let j = vertices
                .binary_search(&b)
                .map_err(|_| InputError::UnknownVertex(b))?;
            adjacency[i].push(j);
            adjacency[j].push(i);
        }

        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
            neighbors.dedup();
        }

        Ok(Self {
            vertices,
            adjacency,
        })
    }

    /// Build from already-canonical parts
    ///
    /// Caller guarantees the struct invariants.
    pub(crate) fn from_sorted_parts(vertices: Vec<Vertex>, adjacency: Vec<Vec<usize>>) -> Self {
        debug_assert_eq!(vertices.len(), adjacency.len());
        debug_assert!(vertices.windows(2).all(|w| w[0] < w[1]));
        Self {
            vertices,
            adjacency,
        }
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True for the zero-vertex graph
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex values in canonical order
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex value at a canonical index
    #[inline]
    pub fn vertex(&self, index: usize) -> Vertex {
        self.vertices[index]
    }

    /// Canonical index of a vertex value
    pub fn index_of(&self, vertex: Vertex) -> Option<usize> {
        self.vertices.binary_search(&vertex).ok()
    }

    /// Neighbor indices of the vertex at `index`, ascending
    #[inline]
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }

    /// Neighbor values of `vertex`, ascending (empty if not a vertex)
    pub fn neighbor_values(&self, vertex: Vertex) -> Vec<Vertex> {
        self.index_of(vertex)
            .map(|i| self.adjacency[i].iter().map(|&j| self.vertices[j]).collect())
            .unwrap_or_default()
    }

    /// Check adjacency between two vertex values
    pub fn has_edge(&self, a: Vertex, b: Vertex) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(i), Some(j)) => self.adjacency[i].binary_search(&j).is_ok(),
            _ => false,
        }
    }

    /// Degree of `vertex` (0 if not a vertex)
    pub fn degree(&self, vertex: Vertex) -> usize {
        self.index_of(vertex).map_or(0, |i| self.adjacency[i].len())
    }

    /// True if `vertex` is a vertex with no neighbors
    pub fn is_isolated(&self, vertex: Vertex) -> bool {
        self.index_of(vertex)
            .is_some_and(|i| self.adjacency[i].is_empty())
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Edges as `(a, b)` value pairs with `a < b`, in canonical order
    pub fn edges(&self) -> Vec<(Vertex, Vertex)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (i, neighbors) in self.adjacency.iter().enumerate() {
            for &j in neighbors.iter().filter(|&&j| j > i) {
                edges.push((self.vertices[i], self.vertices[j]));
            }
        }
        edges
    }
}
