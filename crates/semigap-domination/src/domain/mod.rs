//! Domain layer - Pure computational logic
//!
//! This module contains the semigroup, graph and solver algorithms.
//! Nothing here performs I/O.

pub mod domination;
pub mod gap_graph;
pub mod graph;
pub mod layout;
pub mod semigroup;
pub mod vertex_set;
