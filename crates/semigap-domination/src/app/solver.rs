//! Domination number solver
//!
//! Chooses between exhaustive search (small graphs) and the greedy
//! heuristic (everything larger than the exact threshold).

use serde::Serialize;
use tracing::{debug, info};

use crate::constants::{EXACT_SEARCH_THRESHOLD, MAX_EXACT_VERTICES};
use crate::domain::domination::exact::minimum_dominating_set;
use crate::domain::domination::greedy::greedy_dominating_set;
use crate::domain::graph::{Graph, Vertex};
use crate::error::InputError;

#[cfg(feature = "parallel")]
use crate::domain::domination::exact::minimum_dominating_set_parallel;

/// How a dominating set was found
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMethod {
    /// Exhaustive search; the size is the domination number
    Exact,
    /// Greedy heuristic; the size is an upper bound on the domination number
    Greedy,
}

/// Dominating set and its size
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DominationResult {
    /// Chosen vertices, ascending
    pub set: Vec<Vertex>,
    /// Number of chosen vertices
    pub size: usize,
    /// Search that produced the set
    pub method: SearchMethod,
}

impl DominationResult {
    fn from_indices(graph: &Graph, indices: &[usize], method: SearchMethod) -> Self {
        let set: Vec<Vertex> = indices.iter().map(|&i| graph.vertex(i)).collect();
        Self {
            size: set.len(),
            set,
            method,
        }
    }

    /// True when `size` is the exact domination number
    pub fn is_exact(&self) -> bool {
        self.method == SearchMethod::Exact
    }
}

/// Options for the solver
#[derive(Clone)]
pub struct SolverOptions<F = fn(usize, usize)> {
    /// Graphs with at most this many vertices are solved exactly (max 32)
    pub exact_threshold: usize,
    /// Check each exact size level in parallel (needs the `parallel` feature)
    pub parallel: bool,
    /// Progress callback (subset size, vertex count) for the exact search
    pub on_progress: Option<F>,
}

impl Default for SolverOptions<fn(usize, usize)> {
    fn default() -> Self {
        Self {
            exact_threshold: EXACT_SEARCH_THRESHOLD,
            parallel: cfg!(feature = "parallel"),
            on_progress: None,
        }
    }
}

impl<F> SolverOptions<F> {
    /// Set the exact/greedy threshold
    pub fn with_exact_threshold(mut self, exact_threshold: usize) -> Self {
        self.exact_threshold = exact_threshold;
        self
    }

    /// Enable or disable the parallel exact search
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the progress callback
    pub fn with_progress<G>(self, callback: G) -> SolverOptions<G> {
        SolverOptions {
            exact_threshold: self.exact_threshold,
            parallel: self.parallel,
            on_progress: Some(callback),
        }
    }
}

/// Compute a dominating set with default options
///
/// Exact (minimum) for graphs with at most [`EXACT_SEARCH_THRESHOLD`]
/// vertices, greedy otherwise. The zero-vertex graph yields an empty set.
pub fn domination_number(graph: &Graph) -> DominationResult {
    // Default options always pass validation; greedy is valid for any graph.
    domination_number_with_options(graph, SolverOptions::default()).unwrap_or_else(|_| {
        DominationResult::from_indices(graph, &greedy_dominating_set(graph), SearchMethod::Greedy)
    })
}

/// Compute a dominating set
///
/// # Errors
/// [`InputError::ExactThresholdTooLarge`] if `exact_threshold` exceeds the
/// width of a subset mask.
pub fn domination_number_with_options<F>(
    graph: &Graph,
    options: SolverOptions<F>,
) -> Result<DominationResult, InputError>
where
    F: FnMut(usize, usize),
{
    let SolverOptions {
        exact_threshold,
        parallel,
        mut on_progress,
    } = options;

    if exact_threshold > MAX_EXACT_VERTICES {
        return Err(InputError::ExactThresholdTooLarge {
            threshold: exact_threshold,
            max: MAX_EXACT_VERTICES,
        });
    }

    let n = graph.len();
    let result = if n <= exact_threshold {
        let indices = exact_search(graph, parallel, |r, total| {
            debug!(subset_size = r, vertices = total, "exact search level");
            if let Some(ref mut callback) = on_progress {
                callback(r, total);
            }
        })?;
        DominationResult::from_indices(graph, &indices, SearchMethod::Exact)
    } else {
        let indices = greedy_dominating_set(graph);
        DominationResult::from_indices(graph, &indices, SearchMethod::Greedy)
    };

    info!(
        vertices = n,
        size = result.size,
        method = ?result.method,
        "dominating set found"
    );
    Ok(result)
}

#[cfg(feature = "parallel")]
fn exact_search<F>(graph: &Graph, parallel: bool, on_level: F) -> Result<Vec<usize>, InputError>
where
    F: FnMut(usize, usize),
{
    if parallel {
        minimum_dominating_set_parallel(graph, on_level)
    } else {
        minimum_dominating_set(graph, on_level)
    }
}

#[cfg(not(feature = "parallel"))]
fn exact_search<F>(graph: &Graph, _parallel: bool, on_level: F) -> Result<Vec<usize>, InputError>
where
    F: FnMut(usize, usize),
{
    minimum_dominating_set(graph, on_level)
}
