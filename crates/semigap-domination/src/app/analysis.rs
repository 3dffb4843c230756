//! End-to-end gap graph analysis
//!
//! Runs generation, graph construction, the solver and (optionally) the
//! layout, and gathers everything into one serializable report.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use crate::app::solver::{DominationResult, SolverOptions, domination_number_with_options};
use crate::constants::{DEFAULT_LIMIT_FACTOR, EXACT_SEARCH_THRESHOLD};
use crate::domain::gap_graph::build_gap_graph_with_limit;
use crate::domain::graph::Vertex;
use crate::domain::layout::{Point, perfect_circle_layout};
use crate::domain::semigroup::SemigroupInvariants;
use crate::error::InputError;

/// Options for [`analyze`]
#[derive(Clone, Debug)]
pub struct AnalysisOptions {
    /// Multiplier for the largest generator bounding the semigroup
    pub limit_factor: u32,
    /// Largest graph solved exactly
    pub exact_threshold: usize,
    /// Use the parallel exact search when available
    pub parallel: bool,
    /// Compute the circular layout
    pub include_layout: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            limit_factor: DEFAULT_LIMIT_FACTOR,
            exact_threshold: EXACT_SEARCH_THRESHOLD,
            parallel: cfg!(feature = "parallel"),
            include_layout: false,
        }
    }
}

impl AnalysisOptions {
    pub fn with_limit_factor(mut self, limit_factor: u32) -> Self {
        self.limit_factor = limit_factor;
        self
    }

    pub fn with_exact_threshold(mut self, exact_threshold: usize) -> Self {
        self.exact_threshold = exact_threshold;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_layout(mut self, include_layout: bool) -> Self {
        self.include_layout = include_layout;
        self
    }
}

/// Everything computed for one generator set
#[derive(Clone, Debug, Serialize)]
pub struct GapGraphReport {
    /// Generators as supplied
    pub generators: Vec<u32>,
    pub limit_factor: u32,
    /// `max(generators) * limit_factor`
    pub bound: u32,
    /// Largest semigroup element found
    pub max_element: u32,
    pub invariants: SemigroupInvariants,
    /// Gap graph vertices, ascending
    pub gaps: Vec<Vertex>,
    /// Gap graph edges `(a, b)` with `a < b`
    pub edges: Vec<(Vertex, Vertex)>,
    pub domination: DominationResult,
    /// Circular layout, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<BTreeMap<Vertex, Point>>,
}

/// Analyze the gap graph of the semigroup generated by `generators`
///
/// # Errors
/// Any [`InputError`] from generation or solver option validation. All
/// validation happens before the search starts.
pub fn analyze(generators: &[u32], options: &AnalysisOptions) -> Result<GapGraphReport, InputError> {
    let gap_graph = build_gap_graph_with_limit(generators, options.limit_factor)?;
    let graph = &gap_graph.graph;

    let solver_options = SolverOptions::default()
        .with_exact_threshold(options.exact_threshold)
        .with_parallel(options.parallel);
    let domination = domination_number_with_options(graph, solver_options)?;

    let layout = options.include_layout.then(|| perfect_circle_layout(graph));

    info!(
        generators = ?generators,
        gaps = gap_graph.gaps.len(),
        domination_number = domination.size,
        "analysis complete"
    );

    Ok(GapGraphReport {
        generators: generators.to_vec(),
        limit_factor: options.limit_factor,
        bound: gap_graph.semigroup.bound(),
        max_element: gap_graph.semigroup.max_element(),
        invariants: gap_graph.semigroup.invariants(),
        edges: graph.edges(),
        gaps: gap_graph.gaps,
        domination,
        layout,
    })
}
