//! Exhaustive minimum dominating set search
//!
//! Subsets are `u32` masks over canonical vertex indices. For each size
//! `r = 1, 2, ..., n` every `r`-combination is tried in lexicographic order
//! of its index tuple; the first dominating one is returned. Because all
//! smaller sizes were exhausted first, the result is a minimum dominating
//! set, and the lexicographically first one of that size.
//!
//! A mask dominates when the OR of its members' closed neighborhood masks
//! equals the full mask.

use crate::constants::MAX_EXACT_VERTICES;
use crate::domain::graph::Graph;
use crate::error::InputError;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Combinations checked per parallel batch
#[cfg(feature = "parallel")]
const PARALLEL_BATCH_SIZE: usize = 4096;

/// Closed neighborhood (vertex plus neighbors) of every vertex as a mask
///
/// # Errors
/// [`InputError::GraphTooLarge`] if the graph does not fit in a `u32` mask.
pub fn closed_neighborhood_masks(graph: &Graph) -> Result<Vec<u32>, InputError> {
    if graph.len() > MAX_EXACT_VERTICES {
        return Err(InputError::GraphTooLarge {
            vertices: graph.len(),
            max: MAX_EXACT_VERTICES,
        });
    }

    Ok((0..graph.len())
        .map(|i| {
            graph
                .neighbors(i)
                .iter()
                .fold(1u32 << i, |mask, &j| mask | (1u32 << j))
        })
        .collect())
}

/// Mask with the low `n` bits set
#[inline]
pub fn full_mask(n: usize) -> u32 {
    if n == 0 { 0 } else { u32::MAX >> (u32::BITS as usize - n) }
}

/// Check whether `subset` dominates, given closed neighborhood masks
#[inline]
pub fn covers(subset: u32, closed: &[u32], full: u32) -> bool {
    let mut remaining = subset;
    let mut dominated = 0u32;
    while remaining != 0 {
        dominated |= closed[remaining.trailing_zeros() as usize];
        remaining &= remaining - 1;
    }
    dominated == full
}

/// Indices of the set bits, ascending
pub fn mask_to_indices(mask: u32) -> Vec<usize> {
    (0..u32::BITS as usize)
        .filter(|&i| mask & (1u32 << i) != 0)
        .collect()
}

/// `r`-combinations of `0..n` in lexicographic order, yielded as masks
///
/// `n` must not exceed 32.
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, r: usize) -> Self {
        debug_assert!(n <= MAX_EXACT_VERTICES);
        Self {
            n,
            indices: (0..r).collect(),
            started: false,
            done: r > n,
        }
    }

    fn mask(&self) -> u32 {
        self.indices.iter().fold(0u32, |mask, &i| mask | (1u32 << i))
    }
}

impl Iterator for Combinations {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.mask());
        }

        // Rightmost position that can still advance
        let r = self.indices.len();
        let mut i = r;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] != i + self.n - r {
                break;
            }
        }

        self.indices[i] += 1;
        for j in (i + 1)..r {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.mask())
    }
}

/// Find a minimum dominating set
///
/// # Arguments
/// * `graph` - Graph with at most 32 vertices
/// * `on_level` - Called as `(r, n)` before subsets of size `r` are tried
///
/// # Returns
/// Canonical indices of the lexicographically first minimum dominating set.
/// Empty for the zero-vertex graph.
pub fn minimum_dominating_set<F>(graph: &Graph, mut on_level: F) -> Result<Vec<usize>, InputError>
where
    F: FnMut(usize, usize),
{
    let closed = closed_neighborhood_masks(graph)?;
    let n = closed.len();
    let full = full_mask(n);

    for r in 1..=n {
        on_level(r, n);
        if let Some(mask) = Combinations::new(n, r).find(|&m| covers(m, &closed, full)) {
            return Ok(mask_to_indices(mask));
        }
    }

    // Only the zero-vertex graph gets here: at r = n the full set dominates.
    Ok(Vec::new())
}

/// Find a minimum dominating set, checking each size level in parallel
///
/// Combinations are checked in ordered batches with an order-preserving
/// `find_first`, so the result is identical to [`minimum_dominating_set`].
#[cfg(feature = "parallel")]
pub fn minimum_dominating_set_parallel<F>(
    graph: &Graph,
    mut on_level: F,
) -> Result<Vec<usize>, InputError>
where
    F: FnMut(usize, usize),
{
    let closed = closed_neighborhood_masks(graph)?;
    let n = closed.len();
    let full = full_mask(n);

    for r in 1..=n {
        on_level(r, n);
        let mut combinations = Combinations::new(n, r);
        loop {
            let batch: Vec<u32> = combinations.by_ref().take(PARALLEL_BATCH_SIZE).collect();
            if batch.is_empty() {
                break;
            }
            if let Some(mask) = batch
                .par_iter()
                .copied()
                .find_first(|&m| covers(m, &closed, full))
            {
                return Ok(mask_to_indices(mask));
            }
        }
    }

    Ok(Vec::new())
}
