//! Bounded numerical semigroup generation
//!
//! The semigroup generated by a set of positive integers is explored
//! breadth-first from 0, adding generators until the bound
//! `max(generators) * limit_factor` is exceeded.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

use crate::error::InputError;

/// Semigroup elements up to a fixed bound
#[derive(Clone, Debug)]
pub struct Semigroup {
    /// Generators in the order they were supplied
    generators: Vec<u32>,
    /// Multiplier used to derive the bound
    limit_factor: u32,
    /// Largest value explored (`max(generators) * limit_factor`)
    bound: u32,
    /// Member set, always containing 0
    elements: FxHashSet<u32>,
    /// Largest member
    max_element: u32,
}

/// Summary invariants of a bounded semigroup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SemigroupInvariants {
    /// Smallest nonzero element
    pub multiplicity: Option<u32>,
    /// Largest gap
    pub frobenius_number: Option<u32>,
    /// Number of gaps
    pub genus: usize,
    /// Smallest value from which every integer up to the max element is a member
    pub conductor: u32,
    /// Number of members found below the bound
    pub element_count: usize,
}

/// Generate the semigroup spanned by `generators`, bounded by
/// `max(generators) * limit_factor`
///
/// # Arguments
/// * `generators` - Positive generators; duplicates are allowed and ignored
/// * `limit_factor` - Positive multiplier for the largest generator
///
/// # Errors
/// Returns an [`InputError`] if the generator list is empty, contains zero,
/// `limit_factor` is zero or the bound overflows `u32`.
pub fn generate_semigroup(generators: &[u32], limit_factor: u32) -> Result<Semigroup, InputError> {
    let bound = validate(generators, limit_factor)?;

    let mut elements = FxHashSet::default();
    let mut frontier = VecDeque::from([0u32]);

    while let Some(current) = frontier.pop_front() {
        if current > bound || !elements.insert(current) {
            continue;
        }
        for &g in generators {
            // `current <= bound` so the sum fits in u64; skip anything past the bound
            let next = current as u64 + g as u64;
            if next <= bound as u64 {
                frontier.push_back(next as u32);
            }
        }
    }

    let max_element = elements.iter().copied().max().unwrap_or(0);
    debug!(
        generators = ?generators,
        bound,
        elements = elements.len(),
        max_element,
        "semigroup generated"
    );

    Ok(Semigroup {
        generators: generators.to_vec(),
        limit_factor,
        bound,
        elements,
        max_element,
    })
}

/// Check preconditions and return the closure bound
fn validate(generators: &[u32], limit_factor: u32) -> Result<u32, InputError> {
    if generators.is_empty() {
        return Err(InputError::EmptyGenerators);
    }
    if let Some(index) = generators.iter().position(|&g| g == 0) {
        return Err(InputError::ZeroGenerator { index });
    }
    if limit_factor == 0 {
        return Err(InputError::ZeroLimitFactor);
    }

    let max_generator = generators.iter().copied().max().unwrap_or(0);
    max_generator
        .checked_mul(limit_factor)
        .ok_or(InputError::BoundOverflow {
            max_generator,
            limit_factor,
        })
}

impl Semigroup {
    /// Generators in insertion order
    pub fn generators(&self) -> &[u32] {
        &self.generators
    }

    /// Multiplier the bound was derived from
    pub fn limit_factor(&self) -> u32 {
        self.limit_factor
    }

    /// Largest value the closure was allowed to reach
    pub fn bound(&self) -> u32 {
        self.bound
    }

    /// Largest member
    pub fn max_element(&self) -> u32 {
        self.max_element
    }

    /// Check membership
    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        self.elements.contains(&value)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false: 0 is a member
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Members in ascending order
    pub fn elements(&self) -> Vec<u32> {
        let mut sorted: Vec<u32> = self.elements.iter().copied().collect();
        sorted.sort_unstable();
        sorted
    }

    /// Integers in `[0, max_element)` that are not members, ascending
    pub fn gaps(&self) -> Vec<u32> {
        (0..self.max_element).filter(|x| !self.contains(*x)).collect()
    }

    /// Smallest nonzero member
    pub fn multiplicity(&self) -> Option<u32> {
        self.elements.iter().copied().filter(|&x| x > 0).min()
    }

    /// Largest gap
    pub fn frobenius_number(&self) -> Option<u32> {
        (0..self.max_element).rev().find(|x| !self.contains(*x))
    }

    /// Number of gaps
    pub fn genus(&self) -> usize {
        (0..self.max_element).filter(|x| !self.contains(*x)).count()
    }

    /// Frobenius number plus one, or 0 when there are no gaps
    pub fn conductor(&self) -> u32 {
        self.frobenius_number().map_or(0, |f| f + 1)
    }

    /// Collect all invariants at once
    pub fn invariants(&self) -> SemigroupInvariants {
        SemigroupInvariants {
            multiplicity: self.multiplicity(),
            frobenius_number: self.frobenius_number(),
            genus: self.genus(),
            conductor: self.conductor(),
            element_count: self.len(),
        }
    }
}
