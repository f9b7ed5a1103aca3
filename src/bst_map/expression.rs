use core::fmt;

use smallvec::SmallVec;

use crate::tree::{ExtendedTree, Position};

/// A parenthesized rendering of a map's tree, produced by [`BSTMap::expression`].
///
/// Each internal node renders as `(`, its left subtree, its key, its right subtree, `)`;
/// external nodes render as nothing. An empty map renders as the empty string.
///
/// [`BSTMap::expression`]: crate::BSTMap::expression
pub struct Expression<'a, K, V> {
    tree: &'a ExtendedTree<(K, V)>,
}

enum Step {
    Visit(Position),
    Key(Position),
    Close,
}

impl<'a, K, V> Expression<'a, K, V> {
    pub(super) const fn new(tree: &'a ExtendedTree<(K, V)>) -> Self {
        Self { tree }
    }
}

impl<K: fmt::Display, V> fmt::Display for Expression<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut steps: SmallVec<[Step; 32]> = self.tree.root().map(Step::Visit).into_iter().collect();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(position) => {
                    // External nodes print nothing.
                    if let Some((left, right)) = self.tree.children(position) {
                        f.write_str("(")?;
                        steps.extend([Step::Close, Step::Visit(right), Step::Key(position), Step::Visit(left)]);
                    }
                }
                Step::Key(position) => {
                    if let Some((key, _)) = self.tree.element(position) {
                        write!(f, "{key}")?;
                    }
                }
                Step::Close => f.write_str(")")?,
            }
        }
        Ok(())
    }
}

impl<K: fmt::Display, V> fmt::Debug for Expression<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Expression").field(&format_args!("{self}")).finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::string::ToString;

    use crate::BSTMap;

    #[test]
    fn empty_map_renders_nothing() {
        let map: BSTMap<i32, ()> = BSTMap::new();
        assert_eq!(map.expression().to_string(), "");
    }

    #[test]
    fn balanced() {
        let mut map = BSTMap::new();
        for key in [5, 3, 8, 1, 4, 7, 9] {
            map.insert(key, ());
        }
        assert_eq!(map.expression().to_string(), "(((1)3(4))5((7)8(9)))");
    }

    #[test]
    fn after_successor_removal() {
        let mut map = BSTMap::new();
        for key in [5, 3, 8, 1, 4, 7, 9] {
            map.insert(key, ());
        }
        map.remove(&5);
        assert_eq!(map.expression().to_string(), "(((1)3(4))7(8(9)))");
    }

    #[test]
    fn degenerate_chain() {
        let mut map = BSTMap::new();
        for key in 0..2_000 {
            map.insert(key, ());
        }
        let rendered = map.expression().to_string();
        assert!(rendered.starts_with("(0(1(2"));
        assert_eq!(rendered.matches('(').count(), 2_000);
    }
}
