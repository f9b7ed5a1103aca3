use extbst::{Error, ExtendedTree, Position};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Stores the elements `0, 1, ..` one at a time, each on the external node chosen by the
/// matching pick (taken modulo the number of external nodes, in order).
fn grow(picks: &[usize]) -> ExtendedTree<usize> {
    let mut tree = ExtendedTree::new();
    for (element, pick) in picks.iter().enumerate() {
        let externals: Vec<Position> = tree.positions_inorder().filter(|p| tree.is_external(*p)).collect();
        let target = externals[pick % externals.len()];
        tree.expand_external(target, element).expect("target is external");
    }
    tree
}

// ─── Structure under random growth and removal ───────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Grows a tree at random external nodes, then splices random external nodes away,
    /// checking the node counts of an extended tree after every change.
    #[test]
    fn node_counts_stay_extended(picks in proptest::collection::vec(any::<usize>(), 0..64),
                                 removals in proptest::collection::vec(any::<usize>(), 0..64)) {
        let mut tree = grow(&picks);
        prop_assert_eq!(tree.len(), 2 * picks.len() + 1);
        prop_assert_eq!(tree.internal_len(), picks.len());

        for pick in removals {
            let externals: Vec<Position> = tree.positions_inorder().filter(|p| tree.is_external(*p)).collect();
            if externals.len() < 2 {
                break;
            }
            let before = tree.internal_len();
            let removed = tree.remove_above_external(externals[pick % externals.len()]);
            prop_assert!(matches!(removed, Ok(Some(_))));
            prop_assert_eq!(tree.internal_len(), before - 1);
            prop_assert_eq!(tree.len(), 2 * tree.internal_len() + 1);
            prop_assert_eq!(tree.elements().len(), tree.internal_len());
            prop_assert!(tree.elements().rev().eq(tree.elements().collect::<Vec<_>>().into_iter().rev()));
        }
    }
}

// ─── Public structural API ───────────────────────────────────────────────────

#[test]
fn removing_the_external_root_empties_the_tree() {
    let mut tree: ExtendedTree<&str> = ExtendedTree::new();
    let root = tree.root().expect("new tree has a root");
    assert_eq!(tree.remove_above_external(root), Ok(None));
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.positions_inorder().count(), 0);

    let root = tree.add_root().expect("tree is empty");
    assert_eq!(tree.add_root(), Err(Error::NonEmptyTree));
    tree.expand_external(root, "only").expect("root is external");
    assert_eq!(tree.into_elements(), ["only"]);
}

#[test]
fn replace_requires_an_internal_node() {
    let mut tree = ExtendedTree::new();
    let root = tree.root().expect("new tree has a root");
    assert_eq!(tree.replace(root, 1), Err(Error::InvalidPosition("node is not internal")));
    let (left, _) = tree.expand_external(root, 1).expect("root is external");
    assert_eq!(tree.replace(root, 2), Ok(1));
    assert_eq!(tree.element(root), Some(&2));
    assert_eq!(tree.depth(left), 1);
}

#[test]
fn positions_are_tied_to_their_tree() {
    let mut tree = ExtendedTree::new();
    let root = tree.root().expect("new tree has a root");
    tree.expand_external(root, 'x').expect("root is external");

    let mut copy = tree.clone();
    assert!(!copy.contains(root));
    let (left, _) = tree.children(root).expect("root is internal");
    assert!(matches!(copy.expand_external(left, 'y'), Err(Error::InvalidPosition(_))));
    assert!(matches!(copy.remove_above_external(left), Err(Error::InvalidPosition(_))));

    tree.clear();
    assert!(!tree.contains(root));
    assert_eq!(tree.len(), 1);
    assert_eq!(format!("{copy:?}"), "['x']");
}

#[test]
#[should_panic(expected = "belongs to another tree")]
fn navigating_with_a_foreign_position_panics() {
    let tree: ExtendedTree<u8> = ExtendedTree::new();
    let other: ExtendedTree<u8> = ExtendedTree::new();
    let foreign = other.root().expect("new tree has a root");
    let _ = tree.parent(foreign);
}

#[test]
fn inorder_walk_visits_externals_between_elements() {
    let tree = grow(&[0, 0, 2]);
    let rendered: String = tree
        .positions_inorder()
        .map(|p| tree.element(p).map_or('.', |e| char::from(b'0' + u8::try_from(*e).unwrap_or(9))))
        .collect();
    // 0 at the root, 1 on its left, 2 on its right.
    assert_eq!(rendered, ".1.0.2.");
}
