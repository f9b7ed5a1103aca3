use core::fmt;
use core::mem;

use compare::Compare;

use super::BSTMap;
use crate::tree::Position;

/// A view into a single entry in a map, which may either be vacant or occupied.
///
/// This `enum` is constructed from the [`entry`] method on [`BSTMap`].
///
/// [`entry`]: BSTMap::entry
pub enum Entry<'a, K: 'a, V: 'a, C: 'a> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V, C>),

    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V, C>),
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for Entry<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Vacant(v) => f.debug_tuple("Entry").field(v).finish(),
            Entry::Occupied(o) => f.debug_tuple("Entry").field(o).finish(),
        }
    }
}

/// A view into a vacant entry in a `BSTMap`. It is part of the [`Entry`] enum.
///
/// The entry remembers the external node where the search for its key ended, so inserting
/// through it does not search again.
pub struct VacantEntry<'a, K, V, C> {
    pub(super) key: K,
    pub(super) position: Position,
    pub(super) map: &'a mut BSTMap<K, V, C>,
}

impl<K: fmt::Debug, V, C> fmt::Debug for VacantEntry<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VacantEntry").field(&self.key).finish()
    }
}

/// A view into an occupied entry in a `BSTMap`. It is part of the [`Entry`] enum.
pub struct OccupiedEntry<'a, K, V, C> {
    pub(super) position: Position,
    pub(super) map: &'a mut BSTMap<K, V, C>,
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for OccupiedEntry<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OccupiedEntry").field("key", self.key()).field("value", self.get()).finish()
    }
}

impl<'a, K, V, C: Compare<K>> Entry<'a, K, V, C> {
    /// Ensures a value is in the entry by inserting the default if empty, and returns
    /// a mutable reference to the value in the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::BSTMap;
    ///
    /// let mut map: BSTMap<&str, usize> = BSTMap::new();
    /// map.entry("poneyland").or_insert(12);
    ///
    /// assert_eq!(map[&"poneyland"], 12);
    /// ```
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(o) => o.into_mut(),
            Entry::Vacant(v) => v.insert(default),
        }
    }

    /// Ensures a value is in the entry by inserting the result of the default function if
    /// empty, and returns a mutable reference to the value in the entry.
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(o) => o.into_mut(),
            Entry::Vacant(v) => v.insert(default()),
        }
    }

    /// Like [`or_insert_with`](Entry::or_insert_with), but the default function receives
    /// the entry's key.
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::BSTMap;
    ///
    /// let mut map: BSTMap<&str, usize> = BSTMap::new();
    /// map.entry("poneyland").or_insert_with_key(|key| key.chars().count());
    ///
    /// assert_eq!(map[&"poneyland"], 9);
    /// ```
    pub fn or_insert_with_key<F: FnOnce(&K) -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(o) => o.into_mut(),
            Entry::Vacant(v) => {
                let value = default(&v.key);
                v.insert(value)
            }
        }
    }

    /// Returns a reference to this entry's key.
    #[allow(clippy::must_use_candidate)]
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(o) => o.key(),
            Entry::Vacant(v) => v.key(),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any potential inserts
    /// into the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::BSTMap;
    ///
    /// let mut map: BSTMap<&str, usize> = BSTMap::new();
    ///
    /// map.entry("poneyland").and_modify(|e| *e += 1).or_insert(42);
    /// assert_eq!(map[&"poneyland"], 42);
    ///
    /// map.entry("poneyland").and_modify(|e| *e += 1).or_insert(42);
    /// assert_eq!(map[&"poneyland"], 43);
    /// ```
    #[allow(clippy::return_self_not_must_use)]
    pub fn and_modify<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        if let Entry::Occupied(ref mut o) = self {
            f(o.get_mut());
        }
        self
    }

    /// Sets the value of the entry, and returns an `OccupiedEntry`.
    pub fn insert_entry(self, value: V) -> OccupiedEntry<'a, K, V, C> {
        match self {
            Entry::Occupied(mut o) => {
                o.insert(value);
                o
            }
            Entry::Vacant(v) => v.insert_entry(value),
        }
    }
}

impl<'a, K, V: Default, C: Compare<K>> Entry<'a, K, V, C> {
    /// Ensures a value is in the entry by inserting the default value if empty, and returns
    /// a mutable reference to the value in the entry.
    #[allow(clippy::must_use_candidate)]
    pub fn or_default(self) -> &'a mut V {
        match self {
            Entry::Occupied(o) => o.into_mut(),
            Entry::Vacant(v) => v.insert(V::default()),
        }
    }
}

impl<'a, K, V, C> VacantEntry<'a, K, V, C> {
    /// Gets a reference to the key that would be used when inserting a value through the
    /// `VacantEntry`.
    #[allow(clippy::must_use_candidate)]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Takes ownership of the key.
    #[allow(clippy::must_use_candidate)]
    pub fn into_key(self) -> K {
        self.key
    }

    /// Sets the value of the entry with the `VacantEntry`'s key, and returns a mutable
    /// reference to it.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn insert(self, value: V) -> &'a mut V {
        self.map.insert_at(self.position, self.key, value)
    }

    /// Sets the value of the entry and returns an `OccupiedEntry` for it.
    pub fn insert_entry(self, value: V) -> OccupiedEntry<'a, K, V, C> {
        let VacantEntry { key, position, map } = self;
        map.insert_at(position, key, value);
        OccupiedEntry { position, map }
    }
}

impl<'a, K, V, C> OccupiedEntry<'a, K, V, C> {
    /// Gets a reference to the key in the entry.
    #[must_use]
    pub fn key(&self) -> &K {
        &self.map.tree.internal(self.position).0
    }

    /// Gets a reference to the value in the entry.
    #[must_use]
    pub fn get(&self) -> &V {
        &self.map.tree.internal(self.position).1
    }

    /// Gets a mutable reference to the value in the entry.
    ///
    /// If you need a reference that may outlive the destruction of the `Entry` value, see
    /// [`into_mut`](OccupiedEntry::into_mut).
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.map.tree.internal_mut(self.position).1
    }

    /// Converts the entry into a mutable reference to its value.
    #[must_use]
    pub fn into_mut(self) -> &'a mut V {
        &mut self.map.tree.internal_mut(self.position).1
    }

    /// Sets the value of the entry, and returns the entry's old value.
    pub fn insert(&mut self, value: V) -> V {
        mem::replace(self.get_mut(), value)
    }

    /// Takes the value of the entry out of the map, and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::BSTMap;
    /// use extbst::bst_map::Entry;
    ///
    /// let mut map = BSTMap::from([(1, "a"), (2, "b"), (3, "c")]);
    /// if let Entry::Occupied(o) = map.entry(2) {
    ///     assert_eq!(o.remove(), "b");
    /// }
    /// assert_eq!(map.key_set(), [&1, &3]);
    /// ```
    #[allow(clippy::must_use_candidate)]
    pub fn remove(self) -> V {
        self.remove_entry().1
    }

    /// Takes ownership of the key and value from the map.
    #[allow(clippy::must_use_candidate)]
    pub fn remove_entry(self) -> (K, V) {
        self.map.remove_position(self.position).expect("`OccupiedEntry::remove_entry()` - entry is not internal!")
    }
}
