use super::handle::Handle;

pub(crate) const LEFT: usize = 0;
pub(crate) const RIGHT: usize = 1;

/// A node of an extended binary tree.
///
/// A node is either external (no children, no element) or internal (two children and,
/// once the caller has stored it, an element). A single child cannot be represented.
#[derive(Clone)]
pub(crate) struct Node<T> {
    element: Option<T>,
    // Non-owning; the arena owns every node.
    parent: Option<Handle>,
    children: Option<[Handle; 2]>,
}

impl<T> Node<T> {
    /// Creates an external node hanging below `parent`.
    pub(crate) const fn external(parent: Option<Handle>) -> Self {
        Self {
            element: None,
            parent,
            children: None,
        }
    }

    /// Returns true if this node has no children.
    #[inline]
    pub(crate) const fn is_external(&self) -> bool {
        self.children.is_none()
    }

    /// Returns true if this node has two children.
    #[inline]
    pub(crate) const fn is_internal(&self) -> bool {
        self.children.is_some()
    }

    #[inline]
    pub(crate) const fn parent(&self) -> Option<Handle> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) const fn children(&self) -> Option<[Handle; 2]> {
        self.children
    }

    /// Returns the child on `side` (`LEFT` or `RIGHT`), if internal.
    #[inline]
    pub(crate) fn child(&self, side: usize) -> Option<Handle> {
        self.children.map(|children| children[side])
    }

    /// Turns an external node into an internal one.
    pub(crate) fn set_children(&mut self, children: [Handle; 2]) {
        debug_assert!(self.is_external(), "`Node::set_children()` - node is already internal!");
        self.children = Some(children);
    }

    /// Replaces the child slot holding `old` with `new`.
    pub(crate) fn replace_child(&mut self, old: Handle, new: Handle) {
        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut().filter(|child| **child == old) {
                *child = new;
            }
        }
    }

    /// Returns the other child of this node, given one of them.
    pub(crate) fn other_child(&self, child: Handle) -> Option<Handle> {
        match self.children? {
            [left, right] if left == child => Some(right),
            [left, right] if right == child => Some(left),
            _ => None,
        }
    }

    #[inline]
    pub(crate) const fn element(&self) -> Option<&T> {
        self.element.as_ref()
    }

    #[inline]
    pub(crate) fn element_mut(&mut self) -> Option<&mut T> {
        self.element.as_mut()
    }

    /// Stores `element`, returning a reference to it in place.
    pub(crate) fn insert_element(&mut self, element: T) -> &mut T {
        self.element.insert(element)
    }

    pub(crate) fn take_element(&mut self) -> Option<T> {
        self.element.take()
    }

    pub(crate) fn into_element(self) -> Option<T> {
        self.element
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn external_node_has_no_children() {
        let node: Node<u32> = Node::external(None);
        assert!(node.is_external());
        assert!(!node.is_internal());
        assert_eq!(node.children(), None);
        assert_eq!(node.child(LEFT), None);
        assert_eq!(node.element(), None);
    }

    #[test]
    fn set_children_makes_internal() {
        let (parent, left, right) = (Handle::from_index(0), Handle::from_index(1), Handle::from_index(2));
        let mut node: Node<u32> = Node::external(Some(parent));
        node.set_children([left, right]);
        node.insert_element(7);

        assert!(node.is_internal());
        assert_eq!(node.parent(), Some(parent));
        assert_eq!(node.child(LEFT), Some(left));
        assert_eq!(node.child(RIGHT), Some(right));
        assert_eq!(node.other_child(left), Some(right));
        assert_eq!(node.other_child(right), Some(left));
        assert_eq!(node.other_child(parent), None);
        assert_eq!(node.element(), Some(&7));
    }

    #[test]
    fn replace_child_swaps_only_the_matching_slot() {
        let handles: [Handle; 4] = core::array::from_fn(Handle::from_index);
        let mut node: Node<u32> = Node::external(None);
        node.set_children([handles[0], handles[1]]);

        node.replace_child(handles[1], handles[3]);
        assert_eq!(node.children(), Some([handles[0], handles[3]]));

        node.replace_child(handles[2], handles[1]);
        assert_eq!(node.children(), Some([handles[0], handles[3]]));
    }

    #[test]
    fn element_take_and_insert() {
        let mut node: Node<&str> = Node::external(None);
        *node.insert_element("a") = "b";
        assert_eq!(node.element_mut(), Some(&mut "b"));
        assert_eq!(node.take_element(), Some("b"));
        assert_eq!(node.take_element(), None);
        node.insert_element("c");
        assert_eq!(node.into_element(), Some("c"));
    }

    #[test]
    #[should_panic(expected = "`Node::set_children()` - node is already internal!")]
    fn set_children_twice_panics_in_debug() {
        let handles: [Handle; 2] = core::array::from_fn(Handle::from_index);
        let mut node: Node<u32> = Node::external(None);
        node.set_children(handles);
        node.set_children(handles);
    }
}
