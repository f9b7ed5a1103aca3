//! Operations that validate their arguments and report misuse as [`Error`]s.
//!
//! Keys arrive as `Option`s so that a caller holding a possibly missing key can pass it
//! through unchanged; `None` is rejected with [`Error::InvalidKey`]. Entries can be named by
//! the [`Position`] of their node, which is checked against the map before use.

use compare::Compare;
use tracing::debug;

use super::BSTMap;
use crate::error::{Error, Result};
use crate::tree::Position;

const NULL_KEY: Error = Error::InvalidKey("null key");

impl<K, V, C> BSTMap<K, V, C> {
    /// Returns the entry stored at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEntry`] if `position` was not issued by this map's tree, names
    /// a removed node, or names an external node.
    pub fn entry_at(&self, position: Position) -> Result<(&K, &V)> {
        self.validate(position)?;
        let (key, value) = self.tree.internal(position);
        Ok((key, value))
    }

    /// Removes the entry stored at `position` and returns it.
    ///
    /// Removing an entry with two non-empty subtrees moves its in-order successor's entry
    /// into the removed entry's node, so `position` then names the successor, and positions
    /// taken for the successor are retired.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEntry`] under the same conditions as
    /// [`entry_at`](BSTMap::entry_at). The map is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::{BSTMap, Error};
    ///
    /// let mut map = BSTMap::from([(1, "a"), (2, "b")]);
    /// let position = map.position_of(&1).unwrap();
    /// assert_eq!(map.remove_at(position), Ok((1, "a")));
    ///
    /// // The node is gone, even once its slot is reused.
    /// map.insert(3, "c");
    /// assert!(matches!(map.remove_at(position), Err(Error::InvalidEntry(_))));
    ///
    /// let other = BSTMap::from([(1, "a")]);
    /// let foreign = other.position_of(&1).unwrap();
    /// assert!(matches!(map.remove_at(foreign), Err(Error::InvalidEntry(_))));
    /// ```
    pub fn remove_at(&mut self, position: Position) -> Result<(K, V)> {
        self.validate(position)?;
        self.remove_position(position).ok_or(Error::InvalidEntry("position names an external node"))
    }

    fn validate(&self, position: Position) -> Result<()> {
        if !self.tree.contains(position) {
            debug!(?position, "rejected foreign or removed position");
            return Err(Error::InvalidEntry("position does not name a live node of this map"));
        }
        if self.tree.is_external(position) {
            debug!(?position, "rejected external position");
            return Err(Error::InvalidEntry("position names an external node"));
        }
        Ok(())
    }
}

impl<K, V, C: Compare<K>> BSTMap<K, V, C> {
    /// Returns the position of the internal node holding `key`.
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn position_of(&self, key: &K) -> Option<Position> {
        let position = self.search(key);
        self.tree.is_internal(position).then_some(position)
    }

    /// Like [`get`](BSTMap::get), but rejects a missing key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if `key` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use extbst::{BSTMap, Error};
    ///
    /// let map = BSTMap::from([(1, "a")]);
    /// assert_eq!(map.checked_get(Some(&1)), Ok(Some(&"a")));
    /// assert_eq!(map.checked_get(Some(&2)), Ok(None));
    /// assert_eq!(map.checked_get(None), Err(Error::InvalidKey("null key")));
    /// ```
    pub fn checked_get(&self, key: Option<&K>) -> Result<Option<&V>> {
        key.map(|key| self.get(key)).ok_or(NULL_KEY)
    }

    /// Like [`insert`](BSTMap::insert), but rejects a missing key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if `key` is `None`. The map is left unchanged.
    pub fn checked_insert(&mut self, key: Option<K>, value: V) -> Result<Option<V>> {
        let key = key.ok_or(NULL_KEY)?;
        Ok(self.insert(key, value))
    }

    /// Like [`remove`](BSTMap::remove), but rejects a missing key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if `key` is `None`. The map is left unchanged.
    pub fn checked_remove(&mut self, key: Option<&K>) -> Result<Option<V>> {
        let key = key.ok_or(NULL_KEY)?;
        Ok(self.remove(key))
    }
}
