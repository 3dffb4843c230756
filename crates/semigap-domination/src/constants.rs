//! Semigroup and solver constants

// =============================================================================
// Semigroup generation
// =============================================================================

/// Default multiplier applied to the largest generator to bound the closure
pub const DEFAULT_LIMIT_FACTOR: u32 = 20;

// =============================================================================
// Domination solver
// =============================================================================

/// Largest vertex count solved by exhaustive subset search
///
/// Graphs with more vertices fall back to the greedy heuristic.
pub const EXACT_SEARCH_THRESHOLD: usize = 14;

/// Widest graph the exact search can represent (subsets are `u32` masks)
pub const MAX_EXACT_VERTICES: usize = u32::BITS as usize;
