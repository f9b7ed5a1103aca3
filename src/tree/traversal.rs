use core::fmt;
use core::iter::FusedIterator;

use smallvec::SmallVec;

use super::{ExtendedTree, Position};
use crate::raw::{Handle, LEFT, RIGHT};

// Walks keep an explicit stack; depth beyond this spills to the heap.
const INLINE_DEPTH: usize = 32;

type Stack = SmallVec<[Handle; INLINE_DEPTH]>;

/// An in-order walk over every node of an [`ExtendedTree`], external nodes included.
///
/// This `struct` is created by [`ExtendedTree::positions_inorder`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct InorderPositions<'a, T> {
    tree: &'a ExtendedTree<T>,
    stack: Stack,
    // Subtree whose left spine has not been pushed yet.
    pending: Option<Handle>,
    remaining: usize,
}

impl<'a, T> InorderPositions<'a, T> {
    pub(super) fn new(tree: &'a ExtendedTree<T>) -> Self {
        Self {
            tree,
            stack: Stack::new(),
            pending: tree.root,
            remaining: tree.len(),
        }
    }
}

impl<T> Iterator for InorderPositions<'_, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        while let Some(handle) = self.pending.take() {
            self.stack.push(handle);
            self.pending = self.tree.nodes.get(handle).child(LEFT);
        }
        let handle = self.stack.pop()?;
        self.pending = self.tree.nodes.get(handle).child(RIGHT);
        self.remaining -= 1;
        Some(self.tree.position(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for InorderPositions<'_, T> {}

impl<T> FusedIterator for InorderPositions<'_, T> {}

impl<T> Clone for InorderPositions<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
            pending: self.pending,
            remaining: self.remaining,
        }
    }
}

impl<T> fmt::Debug for InorderPositions<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InorderPositions").field("remaining", &self.remaining).finish_non_exhaustive()
    }
}

/// An in-order walk over the elements of an [`ExtendedTree`]'s internal nodes.
///
/// The front and back of the walk each keep their own spine of pending ancestors; the
/// shared `remaining` count stops them once they meet.
///
/// This `struct` is created by [`ExtendedTree::elements`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Elements<'a, T> {
    tree: &'a ExtendedTree<T>,
    front: Stack,
    back: Stack,
    remaining: usize,
}

impl<'a, T> Elements<'a, T> {
    pub(super) fn new(tree: &'a ExtendedTree<T>) -> Self {
        let mut elements = Self {
            tree,
            front: Stack::new(),
            back: Stack::new(),
            remaining: tree.internal_len(),
        };
        descend(tree, &mut elements.front, tree.root, LEFT);
        descend(tree, &mut elements.back, tree.root, RIGHT);
        elements
    }
}

/// Pushes the internal nodes along the `side` spine starting at `from`.
fn descend<T>(tree: &ExtendedTree<T>, stack: &mut Stack, mut from: Option<Handle>, side: usize) {
    while let Some(handle) = from {
        let node = tree.nodes.get(handle);
        if node.is_external() {
            break;
        }
        stack.push(handle);
        from = node.child(side);
    }
}

impl<'a, T> Iterator for Elements<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        let handle = self.front.pop()?;
        let node = tree.nodes.get(handle);
        descend(tree, &mut self.front, node.child(RIGHT), LEFT);
        self.remaining -= 1;
        node.element()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Elements<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        let handle = self.back.pop()?;
        let node = tree.nodes.get(handle);
        descend(tree, &mut self.back, node.child(LEFT), RIGHT);
        self.remaining -= 1;
        node.element()
    }
}

impl<T> ExactSizeIterator for Elements<'_, T> {}

impl<T> FusedIterator for Elements<'_, T> {}

impl<T> Clone for Elements<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Elements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
