use compare::Compare;

use super::BSTMap;
use crate::tree::ExtendedTree;

// Each entry costs an internal node plus one more external node.
const fn nodes_for(entries: usize) -> usize {
    entries.saturating_mul(2).saturating_add(1)
}

impl<K: Ord, V> BSTMap<K, V> {
    /// Creates an empty map with room for at least `capacity` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::BSTMap;
    ///
    /// let map: BSTMap<i32, i32> = BSTMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BSTMap::with_capacity_and_cmp(capacity, compare::natural())
    }
}

impl<K, V, C> BSTMap<K, V, C> {
    /// Creates an empty map ordered by `cmp`, with room for at least `capacity` entries.
    pub fn with_capacity_and_cmp(capacity: usize, cmp: C) -> Self
    where
        C: Compare<K>,
    {
        BSTMap {
            tree: ExtendedTree::with_capacity(nodes_for(capacity)),
            len: 0,
            cmp,
        }
    }

    /// Returns the number of entries the map can hold without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tree.capacity().saturating_sub(1) / 2
    }
}
