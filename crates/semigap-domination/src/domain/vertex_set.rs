//! Fixed-capacity bitset over vertex indices
//!
//! Used wherever a vertex subset of arbitrary size is needed (dominance
//! checks, greedy coverage). One bit per canonical vertex index.

/// Set of vertex indices in `0..capacity`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexSet {
    /// Bit storage (64 indices per element)
    bits: Vec<u64>,
    /// Number of addressable indices
    capacity: usize,
}

impl VertexSet {
    /// Create an empty set for `capacity` indices
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: vec![0; capacity.div_ceil(64)],
            capacity,
        }
    }

    /// Create a set containing every index in `0..capacity`
    pub fn full(capacity: usize) -> Self {
        let mut set = Self::new(capacity);
        for word in &mut set.bits {
            *word = u64::MAX;
        }
        let tail = capacity % 64;
        if tail != 0
            && let Some(last) = set.bits.last_mut()
        {
            *last = (1u64 << tail) - 1;
        }
        set
    }

    /// Build from indices (each must be below `capacity`)
    pub fn from_indices<I: IntoIterator<Item = usize>>(capacity: usize, indices: I) -> Self {
        let mut set = Self::new(capacity);
        for index in indices {
            set.insert(index);
        }
        set
    }

    /// Number of addressable indices
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn insert(&mut self, index: usize) {
        debug_assert!(index < self.capacity);
        self.bits[index / 64] |= 1u64 << (index % 64);
    }

    #[inline]
    pub fn remove(&mut self, index: usize) {
        debug_assert!(index < self.capacity);
        self.bits[index / 64] &= !(1u64 << (index % 64));
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < self.capacity && (self.bits[index / 64] & (1u64 << (index % 64))) != 0
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// Size of the intersection with `other` without allocating
    #[inline]
    pub fn intersection_count(&self, other: &VertexSet) -> usize {
        self.bits
            .iter()
            .zip(&other.bits)
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum()
    }

    /// Add every member of `other`
    pub fn union_with(&mut self, other: &VertexSet) {
        for (a, b) in self.bits.iter_mut().zip(&other.bits) {
            *a |= b;
        }
    }

    /// Remove every member of `other`
    pub fn difference_with(&mut self, other: &VertexSet) {
        for (a, b) in self.bits.iter_mut().zip(&other.bits) {
            *a &= !b;
        }
    }

    /// Smallest member
    pub fn first(&self) -> Option<usize> {
        self.bits
            .iter()
            .enumerate()
            .find(|(_, w)| **w != 0)
            .map(|(i, w)| i * 64 + w.trailing_zeros() as usize)
    }

    /// Members in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter().enumerate().flat_map(|(i, &word)| {
            let base = i * 64;
            let mut remaining = word;
            std::iter::from_fn(move || {
                if remaining == 0 {
                    return None;
                }
                let bit = remaining.trailing_zeros() as usize;
                remaining &= remaining - 1;
                Some(base + bit)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let set = VertexSet::new(100);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.first(), None);
    }

    #[test]
    fn test_full_respects_capacity() {
        for capacity in [0, 1, 63, 64, 65, 130] {
            let set = VertexSet::full(capacity);
            assert_eq!(set.len(), capacity, "capacity {}", capacity);
            assert!(!set.contains(capacity));
        }
    }

    #[test]
    fn test_insert_remove_boundaries() {
        let mut set = VertexSet::new(130);
        for index in [0, 63, 64, 129] {
            set.insert(index);
            assert!(set.contains(index));
        }
        assert_eq!(set.len(), 4);

        set.remove(64);
        assert!(!set.contains(64));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 63, 129]);
    }

    #[test]
    fn test_set_operations() {
        let a = VertexSet::from_indices(70, [1, 2, 3, 65]);
        let b = VertexSet::from_indices(70, [2, 65, 69]);

        assert_eq!(a.intersection_count(&b), 2);

        let mut union = a.clone();
        union.union_with(&b);
        assert_eq!(union.iter().collect::<Vec<_>>(), vec![1, 2, 3, 65, 69]);

        let mut diff = a.clone();
        diff.difference_with(&b);
        assert_eq!(diff.iter().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(diff.first(), Some(1));
    }
}
