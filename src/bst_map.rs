use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::mem;
use core::ops::Index;

use compare::{Compare, Natural};
use tracing::trace;

use crate::tree::{Elements, ExtendedTree, Position};

mod capacity;
mod checked;
mod entry;
mod expression;

pub use entry::{Entry, OccupiedEntry, VacantEntry};
pub use expression::Expression;

/// An ordered map based on an unbalanced [binary search tree].
///
/// Keys are ordered by a comparator `C`, which defaults to the keys' natural [`Ord`]
/// order. Any [`Compare`] implementation works, including closures of the form
/// `Fn(&K, &K) -> Ordering`.
///
/// The tree is kept in *extended* form: every empty subtree is an explicit external node,
/// and every entry lives on an internal node with exactly two children. Inserting a new key
/// expands the external node where the search for it ended; removing a key splices an
/// external node out together with its parent. When the removed entry's node has two
/// internal children, its in-order successor's entry is moved into it first.
///
/// Nothing rebalances the tree. Lookups cost O(h), where h is the tree's height: O(log n)
/// for keys arriving in random order, O(n) for keys arriving sorted. Every walk is
/// iterative, so a degenerate tree costs time but never stack.
///
/// It is a logic error for a key to be modified in such a way that its ordering relative to
/// any other key, as determined by the comparator, changes while it is in the map.
///
/// # Examples
///
/// ```
/// use extbst::BSTMap;
///
/// let mut scores = BSTMap::new();
/// scores.insert("Carol", 92);
/// scores.insert("Alice", 100);
/// scores.insert("Bob", 85);
///
/// assert_eq!(scores.get(&"Bob"), Some(&85));
/// assert_eq!(scores.len(), 3);
/// assert_eq!(scores.key_set(), [&"Alice", &"Bob", &"Carol"]);
///
/// assert_eq!(scores.remove(&"Alice"), Some(100));
/// assert_eq!(scores.get(&"Alice"), None);
/// ```
///
/// A map ordered by a custom comparator:
///
/// ```
/// use extbst::BSTMap;
///
/// let mut map = BSTMap::with_cmp(|a: &i32, b: &i32| b.cmp(a));
/// map.extend([(1, "a"), (3, "c"), (2, "b")]);
/// assert_eq!(map.values().copied().collect::<Vec<_>>(), ["c", "b", "a"]);
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
pub struct BSTMap<K, V, C = Natural<K>> {
    tree: ExtendedTree<(K, V)>,
    // Internal node count.
    len: usize,
    cmp: C,
}

/// An iterator over the entries of a `BSTMap`, in key order.
///
/// This `struct` is created by the [`iter`] method on [`BSTMap`].
///
/// # Examples
///
/// ```
/// use extbst::BSTMap;
///
/// let map = BSTMap::from([(1, "a"), (2, "b")]);
/// let mut iter = map.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: BSTMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    inner: Elements<'a, (K, V)>,
}

/// An iterator over the keys of a `BSTMap`, in order.
///
/// This `struct` is created by the [`keys`] method on [`BSTMap`].
///
/// [`keys`]: BSTMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of a `BSTMap`, in key order.
///
/// This `struct` is created by the [`values`] method on [`BSTMap`].
///
/// [`values`]: BSTMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An owning iterator over the entries of a `BSTMap`, in key order.
///
/// This `struct` is created by the [`into_iter`] method on [`BSTMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// An owning iterator over the keys of a `BSTMap`, in order.
///
/// This `struct` is created by the [`into_keys`] method on [`BSTMap`].
///
/// [`into_keys`]: BSTMap::into_keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoKeys<K, V> {
    inner: IntoIter<K, V>,
}

/// An owning iterator over the values of a `BSTMap`, in key order.
///
/// This `struct` is created by the [`into_values`] method on [`BSTMap`].
///
/// [`into_values`]: BSTMap::into_values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoValues<K, V> {
    inner: IntoIter<K, V>,
}

impl<K: Ord, V> BSTMap<K, V> {
    /// Makes a new, empty `BSTMap` ordered by the keys' natural order.
    ///
    /// The tree starts as a single external root.
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        BSTMap::with_cmp(compare::natural())
    }
}

impl<K, V, C> BSTMap<K, V, C> {
    /// Makes a new, empty `BSTMap` ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::BSTMap;
    ///
    /// // Case-insensitive keys.
    /// let mut map = BSTMap::with_cmp(|a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase()));
    /// map.insert("Key".to_string(), 1);
    /// assert_eq!(map.insert("KEY".to_string(), 2), Some(1));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn with_cmp(cmp: C) -> Self
    where
        C: Compare<K>,
    {
        BSTMap {
            tree: ExtendedTree::new(),
            len: 0,
            cmp,
        }
    }

    /// Returns the map's comparator.
    #[must_use]
    pub const fn cmp(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the underlying tree, for inspection.
    ///
    /// Entries are stored as `(key, value)` elements of the internal nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::BSTMap;
    ///
    /// let map = BSTMap::from([(2, 'b'), (1, 'a'), (3, 'c')]);
    /// let tree = map.tree();
    /// let root = tree.root().unwrap();
    /// assert_eq!(tree.element(root), Some(&(2, 'b')));
    /// assert_eq!(tree.len(), 7);
    /// ```
    #[must_use]
    pub const fn tree(&self) -> &ExtendedTree<(K, V)> {
        &self.tree
    }

    /// Returns the height of the underlying tree, counting external nodes.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Clears the map, leaving a single external root.
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::BSTMap;
    ///
    /// let mut a = BSTMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
        self.len = 0;
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Complexity
    ///
    /// O(h) to create the iterator; O(n) for a full pass.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.tree.elements(),
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::BSTMap;
    ///
    /// let a = BSTMap::from([(2, "b"), (1, "a")]);
    /// let keys: Vec<_> = a.keys().copied().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.iter(),
        }
    }

    /// Gets an iterator over the values of the map, in order by key.
    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: self.iter(),
        }
    }

    /// Returns the keys of the map in ascending order, collected at call time.
    ///
    /// The snapshot is built by an in-order walk over every node of the tree, keeping the
    /// internal ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// for key in [5, 3, 8, 1, 4, 7, 9] {
    ///     map.insert(key, ());
    /// }
    /// assert_eq!(map.key_set(), [&1, &3, &4, &5, &7, &8, &9]);
    /// ```
    #[must_use]
    pub fn key_set(&self) -> Vec<&K> {
        self.entry_set().into_iter().map(|(key, _)| key).collect()
    }

    /// Returns the values of the map in key order, collected at call time.
    #[must_use]
    pub fn value_list(&self) -> Vec<&V> {
        self.entry_set().into_iter().map(|(_, value)| value).collect()
    }

    /// Returns the entries of the map in key order, collected at call time.
    #[must_use]
    pub fn entry_set(&self) -> Vec<(&K, &V)> {
        self.tree
            .positions_inorder()
            .filter_map(|position| self.tree.element(position))
            .map(|(key, value)| (key, value))
            .collect()
    }

    /// Creates a consuming iterator visiting all the keys, in sorted order.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys {
            inner: self.into_iter(),
        }
    }

    /// Creates a consuming iterator visiting all the values, in order by key.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues {
            inner: self.into_iter(),
        }
    }

    /// Renders the tree as a parenthesized expression of its keys.
    ///
    /// Each internal node renders as `(`, its left subtree, its key, its right subtree, `)`.
    /// External nodes render as nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::BSTMap;
    ///
    /// let map = BSTMap::from([(5, ()), (3, ()), (8, ()), (4, ())]);
    /// assert_eq!(map.expression().to_string(), "((3(4))5(8))");
    /// ```
    pub fn expression(&self) -> Expression<'_, K, V> {
        Expression::new(&self.tree)
    }

    /// Returns the position of the leftmost (`first`) or rightmost internal node.
    fn outermost(&self, first: bool) -> Option<Position> {
        let mut current = self.tree.rooted();
        let mut found = None;
        while let Some((left, right)) = self.tree.children(current) {
            found = Some(current);
            current = if first { left } else { right };
        }
        found
    }

    /// Removes the entry at an internal position. Returns `None` for an external one.
    fn remove_position(&mut self, found: Position) -> Option<(K, V)> {
        let (left, right) = self.tree.children(found)?;
        let removal = if self.tree.is_external(left) {
            left
        } else if self.tree.is_external(right) {
            right
        } else {
            // Both subtrees are non-empty: the in-order successor is the leftmost internal
            // node of the right subtree, and its left child is external.
            let mut successor = right;
            let mut removal = right;
            while let Some((next, _)) = self.tree.children(removal) {
                successor = removal;
                removal = next;
            }
            trace!(?found, ?successor, "moving in-order successor into removed entry's node");
            self.tree.swap_elements(found, successor);
            removal
        };
        self.len -= 1;
        self.tree.remove_above_external_unchecked(removal)
    }

    /// Stores a new entry on the external position where its search ended.
    fn insert_at(&mut self, position: Position, key: K, value: V) -> &mut V {
        self.len += 1;
        &mut self.tree.expand_external_unchecked(position, (key, value)).1
    }
}

impl<K, V, C: Compare<K>> BSTMap<K, V, C> {
    /// Walks from the root to the internal node holding `key`, or to the external node
    /// where `key` would be inserted.
    fn search(&self, key: &K) -> Position {
        let mut current = self.tree.rooted();
        while let (Some((stored, _)), Some((left, right))) = (self.tree.element(current), self.tree.children(current)) {
            current = match self.cmp.compare(key, stored) {
                Ordering::Less => left,
                Ordering::Greater => right,
                Ordering::Equal => break,
            };
        }
        current
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.element(self.search(key)).map(|(_, value)| value)
    }

    /// Returns the stored key and its value.
    ///
    /// With a custom comparator the stored key may differ from `key` while comparing equal.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.tree.element(self.search(key)).map(|(stored, value)| (stored, value))
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.is_internal(self.search(key))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let position = self.search(key);
        self.tree.element_mut(position).map(|(_, value)| value)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, the external node where the search ended
    /// is expanded to hold the entry and `None` is returned.
    ///
    /// If the map did have this key present, the stored entry is replaced by the new key
    /// and value, and the old value is returned.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.is_empty(), false);
    ///
    /// map.insert(37, "b");
    /// assert_eq!(map.insert(37, "c"), Some("b"));
    /// assert_eq!(map[&37], "c");
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let position = self.search(&key);
        if let Some(entry) = self.tree.element_mut(position) {
            let (_, previous) = mem::replace(entry, (key, value));
            return Some(previous);
        }
        self.insert_at(position, key, value);
        None
    }

    /// Removes a key from the map, returning the value at the key if the key was previously
    /// in the map.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning the stored key and value if the key was
    /// previously in the map.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let found = self.search(key);
        self.remove_position(found)
    }

    /// Returns the entry with the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// assert_eq!(map.first_key_value(), None);
    /// map.insert(2, "a");
    /// map.insert(1, "b");
    /// assert_eq!(map.first_key_value(), Some((&1, &"b")));
    /// ```
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.iter().next()
    }

    /// Returns the entry with the largest key.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.iter().next_back()
    }

    /// Removes and returns the entry with the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::BSTMap;
    ///
    /// let mut map = BSTMap::from([(1, "a"), (2, "b")]);
    /// while let Some((key, _)) = map.pop_first() {
    ///     assert!(map.iter().all(|(k, _)| *k > key));
    /// }
    /// assert!(map.is_empty());
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let first = self.outermost(true)?;
        self.remove_position(first)
    }

    /// Removes and returns the entry with the largest key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let last = self.outermost(false)?;
        self.remove_position(last)
    }

    /// Gets the given key's entry in the map for in-place manipulation.
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::BSTMap;
    ///
    /// let mut count = BSTMap::new();
    /// for word in ["a", "b", "a", "c", "a", "b"] {
    ///     *count.entry(word).or_insert(0) += 1;
    /// }
    /// assert_eq!(count[&"a"], 3);
    /// assert_eq!(count[&"b"], 2);
    /// assert_eq!(count[&"c"], 1);
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V, C> {
        let position = self.search(&key);
        if self.tree.is_internal(position) {
            Entry::Occupied(OccupiedEntry {
                position,
                map: self,
            })
        } else {
            Entry::Vacant(VacantEntry {
                key,
                position,
                map: self,
            })
        }
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for BSTMap<K, V, C> {
    fn clone(&self) -> Self {
        BSTMap {
            tree: self.tree.clone(),
            len: self.len,
            cmp: self.cmp.clone(),
        }
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for BSTMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for BSTMap<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for BSTMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> Default for BSTMap<K, V> {
    fn default() -> Self {
        BSTMap::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BSTMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = BSTMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for BSTMap<K, V, C> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for BSTMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<K, V, C: Compare<K>> Index<&K> for BSTMap<K, V, C> {
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K, V, C> IntoIterator for &'a BSTMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for BSTMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, sorted by key.
    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.tree.into_elements().into_iter(),
        }
    }
}

impl<'a, K: 'a, V: 'a> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K: 'a, V: 'a> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoKeys<K, V> {
    fn next_back(&mut self) -> Option<K> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, V> ExactSizeIterator for IntoKeys<K, V> {}

impl<K, V> FusedIterator for IntoKeys<K, V> {}

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoValues<K, V> {
    fn next_back(&mut self) -> Option<V> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for IntoValues<K, V> {}

impl<K, V> FusedIterator for IntoValues<K, V> {}
