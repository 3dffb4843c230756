//! semigap-domination - Domination numbers of numerical semigroup gap graphs
//!
//! This crate provides functionality to:
//! - Enumerate a numerical semigroup from its generators up to a bound
//! - Build the gap graph (gaps joined when their difference lies in the semigroup)
//! - Compute the domination number (exact search for small graphs, greedy otherwise)
//! - Place the graph's vertices on a unit circle for presentation

pub mod constants;
pub mod error;
pub mod domain;
pub mod app;

// Re-export commonly used types
pub use app::analysis::{AnalysisOptions, GapGraphReport, analyze};
pub use app::solver::{DominationResult, SearchMethod, SolverOptions, domination_number};
pub use constants::*;
pub use domain::gap_graph::{GapGraph, build_gap_graph, build_gap_graph_with_limit};
pub use domain::graph::{Graph, Vertex};
pub use domain::layout::{Point, perfect_circle_layout};
pub use domain::semigroup::{Semigroup, generate_semigroup};
pub use error::InputError;
