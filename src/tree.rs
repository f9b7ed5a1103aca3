//! Extended binary trees.
//!
//! An extended binary tree materializes every empty subtree as an explicit *external* node.
//! Each node therefore has either zero children (external) or exactly two (internal), and
//! elements live on internal nodes only. Growing the tree always means expanding an
//! external node; shrinking it always means removing an external node together with its
//! parent.

use alloc::vec::Vec;
use core::fmt;
use core::mem;

use smallvec::SmallVec;
use tracing::trace;

use crate::error::{Error, Result};
use crate::raw::{Arena, Handle, LEFT, Node, RIGHT, Stamp};

mod traversal;

pub use traversal::{Elements, InorderPositions};

/// A handle naming one node of an [`ExtendedTree`].
///
/// Positions are cheap to copy and stay valid until the node they name is removed. A
/// position remembers which tree issued it and which allocation of its slot it names:
/// navigation methods panic when handed a position from another tree or one whose node
/// was removed, and mutation methods return [`Error::InvalidPosition`]. A node that
/// replaces a removed one in the same slot does not inherit its positions.
/// [`ExtendedTree::clear`] retires every outstanding position.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Position {
    stamp: Stamp,
    handle: Handle,
    generation: u32,
}

/// A binary tree in which every node has zero or two children.
///
/// # Examples
///
/// ```
/// use extbst::tree::ExtendedTree;
///
/// let mut tree = ExtendedTree::new();
/// let root = tree.root().unwrap();
/// assert!(tree.is_external(root));
///
/// let (left, right) = tree.expand_external(root, "b").unwrap();
/// let (_, _) = tree.expand_external(left, "a").unwrap();
/// assert_eq!(tree.len(), 5);
/// assert_eq!(tree.elements().copied().collect::<Vec<_>>(), ["a", "b"]);
///
/// // Removing an external node splices out its parent.
/// assert_eq!(tree.remove_above_external(right).unwrap(), Some("b"));
/// assert_eq!(tree.elements().copied().collect::<Vec<_>>(), ["a"]);
/// ```
pub struct ExtendedTree<T> {
    nodes: Arena<Node<T>>,
    root: Option<Handle>,
    stamp: Stamp,
}

impl<T> ExtendedTree<T> {
    /// Creates a tree consisting of a single external root.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates a single-node tree with room for at least `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Arena::with_capacity(capacity);
        let root = nodes.alloc(Node::external(None));
        Self {
            nodes,
            root: Some(root),
            stamp: Stamp::next(),
        }
    }

    /// Returns the number of nodes the tree can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the number of nodes, internal and external.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no root.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of internal nodes.
    ///
    /// A non-empty extended binary tree always has exactly one more external node than
    /// internal nodes.
    #[must_use]
    pub const fn internal_len(&self) -> usize {
        self.nodes.len() / 2
    }

    /// Returns the root position, or `None` for an empty tree.
    #[must_use]
    pub fn root(&self) -> Option<Position> {
        self.root.map(|root| self.position(root))
    }

    /// Gives an empty tree a new external root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonEmptyTree`] if the tree already has a root.
    pub fn add_root(&mut self) -> Result<Position> {
        if self.root.is_some() {
            return Err(Error::NonEmptyTree);
        }
        let root = self.nodes.alloc(Node::external(None));
        trace!(node = ?root, "added external root");
        self.root = Some(root);
        Ok(self.position(root))
    }

    /// Resets the tree to a single external root, dropping every element.
    ///
    /// Positions issued before the call are no longer accepted.
    pub fn clear(&mut self) {
        self.nodes.clear();
        let root = self.nodes.alloc(Node::external(None));
        self.root = Some(root);
        self.stamp = Stamp::next();
        trace!("cleared tree");
    }

    /// Returns true if `position` was issued by this tree and its node has not been removed.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.stamp == self.stamp && self.is_live(position)
    }

    /// Returns true if the node has no children.
    ///
    /// # Panics
    ///
    /// Panics if `position` does not name a live node of this tree. The same holds for
    /// every other navigation method.
    #[must_use]
    pub fn is_external(&self, position: Position) -> bool {
        self.node(position).is_external()
    }

    /// Returns true if the node has two children.
    #[must_use]
    pub fn is_internal(&self, position: Position) -> bool {
        self.node(position).is_internal()
    }

    #[must_use]
    pub fn is_root(&self, position: Position) -> bool {
        self.node(position).parent().is_none()
    }

    #[must_use]
    pub fn parent(&self, position: Position) -> Option<Position> {
        self.node(position).parent().map(|parent| self.position(parent))
    }

    /// Returns the left child, or `None` for an external node.
    #[must_use]
    pub fn left(&self, position: Position) -> Option<Position> {
        self.node(position).child(LEFT).map(|child| self.position(child))
    }

    /// Returns the right child, or `None` for an external node.
    #[must_use]
    pub fn right(&self, position: Position) -> Option<Position> {
        self.node(position).child(RIGHT).map(|child| self.position(child))
    }

    /// Returns both children, or `None` for an external node.
    #[must_use]
    pub fn children(&self, position: Position) -> Option<(Position, Position)> {
        self.node(position).children().map(|[left, right]| (self.position(left), self.position(right)))
    }

    /// Returns the other child of the node's parent, or `None` for the root.
    #[must_use]
    pub fn sibling(&self, position: Position) -> Option<Position> {
        let parent = self.node(position).parent()?;
        self.nodes.get(parent).other_child(position.handle).map(|sibling| self.position(sibling))
    }

    /// Returns the element stored on the node, or `None` for an external node.
    #[must_use]
    pub fn element(&self, position: Position) -> Option<&T> {
        self.node(position).element()
    }

    /// Returns the element stored on the node mutably, or `None` for an external node.
    #[must_use]
    pub fn element_mut(&mut self, position: Position) -> Option<&mut T> {
        self.node_mut(position).element_mut()
    }

    /// Returns the number of edges between the node and the root.
    #[must_use]
    pub fn depth(&self, position: Position) -> usize {
        let mut depth = 0;
        let mut current = self.node(position).parent();
        while let Some(handle) = current {
            depth += 1;
            current = self.nodes.get(handle).parent();
        }
        depth
    }

    /// Returns the largest depth of any node; zero for a single-node or empty tree.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: SmallVec<[(Handle, usize); 32]> = SmallVec::new();
        stack.extend(self.root.map(|root| (root, 0)));
        while let Some((handle, depth)) = stack.pop() {
            height = height.max(depth);
            if let Some(children) = self.nodes.get(handle).children() {
                stack.extend(children.map(|child| (child, depth + 1)));
            }
        }
        height
    }

    /// Stores `element` on an external node and gives it two new external children.
    ///
    /// Returns the positions of the new left and right children.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if the node is internal or `position` does not
    /// belong to this tree. The tree is left untouched.
    pub fn expand_external(&mut self, position: Position, element: T) -> Result<(Position, Position)> {
        if self.checked_node(position)?.is_internal() {
            return Err(Error::InvalidPosition("node is not external"));
        }
        let ([left, right], _) = self.expand(position.handle, element);
        Ok((self.position(left), self.position(right)))
    }

    /// Removes an external node together with its parent, promoting the node's sibling into
    /// the parent's place, and returns the parent's element.
    ///
    /// Removing an external root empties the tree and returns `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if the node is internal or `position` does not
    /// belong to this tree. The tree is left untouched.
    pub fn remove_above_external(&mut self, position: Position) -> Result<Option<T>> {
        if self.checked_node(position)?.is_internal() {
            return Err(Error::InvalidPosition("node is not external"));
        }
        Ok(self.splice(position.handle))
    }

    /// Replaces the element of an internal node, returning the previous element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if the node is external or `position` does not
    /// belong to this tree.
    pub fn replace(&mut self, position: Position, element: T) -> Result<T> {
        if self.checked_node(position)?.is_external() {
            return Err(Error::InvalidPosition("node is not internal"));
        }
        Ok(mem::replace(self.internal_mut(position), element))
    }

    /// Returns a lazy in-order walk over every node, external ones included.
    ///
    /// Each call starts a fresh walk over the tree as it is now.
    pub fn positions_inorder(&self) -> InorderPositions<'_, T> {
        InorderPositions::new(self)
    }

    /// Returns a lazy in-order walk over the elements of the internal nodes.
    pub fn elements(&self) -> Elements<'_, T> {
        Elements::new(self)
    }

    /// Consumes the tree, returning the elements of the internal nodes in order.
    #[must_use]
    pub fn into_elements(mut self) -> Vec<T> {
        let order: Vec<Handle> = self.positions_inorder().map(|position| position.handle).collect();
        order.into_iter().filter_map(|handle| self.nodes.get_mut(handle).take_element()).collect()
    }

    /// Expands a node the caller knows to be external, returning its new element in place.
    pub(crate) fn expand_external_unchecked(&mut self, position: Position, element: T) -> &mut T {
        debug_assert!(self.contains(position), "`ExtendedTree::expand_external_unchecked()` - foreign position!");
        self.expand(position.handle, element).1
    }

    /// Splices out a node the caller knows to be external.
    pub(crate) fn remove_above_external_unchecked(&mut self, position: Position) -> Option<T> {
        debug_assert!(self.is_external(position), "`ExtendedTree::remove_above_external_unchecked()` - node is internal!");
        self.splice(position.handle)
    }

    /// Exchanges the elements of two nodes.
    pub(crate) fn swap_elements(&mut self, a: Position, b: Position) {
        if a == b {
            return;
        }
        let first = self.node_mut(a).take_element();
        let second = self.node_mut(b).take_element();
        if let Some(element) = second {
            self.node_mut(a).insert_element(element);
        }
        if let Some(element) = first {
            self.node_mut(b).insert_element(element);
        }
    }

    /// Returns the root of a tree the caller knows to be non-empty.
    pub(crate) fn rooted(&self) -> Position {
        self.root().expect("`ExtendedTree::rooted()` - tree is empty!")
    }

    /// Returns the element of a node the caller knows to be internal.
    pub(crate) fn internal(&self, position: Position) -> &T {
        self.element(position).expect("`ExtendedTree::internal()` - node holds no element!")
    }

    /// Returns the element of a node the caller knows to be internal, mutably.
    pub(crate) fn internal_mut(&mut self, position: Position) -> &mut T {
        self.element_mut(position).expect("`ExtendedTree::internal_mut()` - node holds no element!")
    }

    fn expand(&mut self, handle: Handle, element: T) -> ([Handle; 2], &mut T) {
        let children = [
            self.nodes.alloc(Node::external(Some(handle))),
            self.nodes.alloc(Node::external(Some(handle))),
        ];
        trace!(node = ?handle, left = ?children[LEFT], right = ?children[RIGHT], "expanded external node");
        let node = self.nodes.get_mut(handle);
        node.set_children(children);
        (children, node.insert_element(element))
    }

    fn splice(&mut self, handle: Handle) -> Option<T> {
        let Some(parent) = self.nodes.get(handle).parent() else {
            trace!(node = ?handle, "removed external root");
            self.nodes.free(handle);
            self.root = None;
            return None;
        };

        let parent_node = self.nodes.take(parent);
        let sibling = parent_node.other_child(handle).expect("`ExtendedTree::splice()` - parent does not own `handle`!");
        let grandparent = parent_node.parent();

        self.nodes.get_mut(sibling).set_parent(grandparent);
        match grandparent {
            Some(grandparent) => self.nodes.get_mut(grandparent).replace_child(parent, sibling),
            None => self.root = Some(sibling),
        }
        self.nodes.free(handle);
        trace!(node = ?handle, parent = ?parent, promoted = ?sibling, "spliced external node and parent");

        parent_node.into_element()
    }

    fn position(&self, handle: Handle) -> Position {
        Position {
            stamp: self.stamp,
            handle,
            generation: self.nodes.generation(handle).expect("`ExtendedTree::position()` - `handle` is vacant!"),
        }
    }

    // Stamp not checked.
    fn is_live(&self, position: Position) -> bool {
        self.nodes.generation(position.handle) == Some(position.generation)
    }

    fn node(&self, position: Position) -> &Node<T> {
        assert!(position.stamp == self.stamp, "`ExtendedTree` - `position` belongs to another tree!");
        assert!(self.is_live(position), "`ExtendedTree` - `position` names a removed node!");
        self.nodes.get(position.handle)
    }

    fn node_mut(&mut self, position: Position) -> &mut Node<T> {
        assert!(position.stamp == self.stamp, "`ExtendedTree` - `position` belongs to another tree!");
        assert!(self.is_live(position), "`ExtendedTree` - `position` names a removed node!");
        self.nodes.get_mut(position.handle)
    }

    fn checked_node(&self, position: Position) -> Result<&Node<T>> {
        if position.stamp != self.stamp {
            Err(Error::InvalidPosition("position does not belong to this tree"))
        } else if !self.is_live(position) {
            Err(Error::InvalidPosition("position names a removed node"))
        } else {
            Ok(self.nodes.get(position.handle))
        }
    }
}

impl<T: Clone> Clone for ExtendedTree<T> {
    /// Clones the tree. The clone rejects positions issued by the original.
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
            stamp: Stamp::next(),
        }
    }
}

impl<T> Default for ExtendedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ExtendedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements()).finish()
    }
}
