//! Ordered maps on unbalanced binary search trees in extended form.
//!
//! This crate provides [`BSTMap`], an ordered key-value map whose entries live on the
//! internal nodes of an [`ExtendedTree`]: a binary tree in which every node has either zero
//! or two children. The childless *external* nodes stand in for empty subtrees, so a search
//! that misses always ends on a node, and that node is exactly where the key belongs.
//!
//! # Example
//!
//! ```
//! use extbst::BSTMap;
//!
//! let mut map = BSTMap::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     map.insert(key, key * 10);
//! }
//! assert_eq!(map.get(&4), Some(&40));
//! assert_eq!(map.key_set(), [&1, &3, &4, &5, &7, &8, &9]);
//!
//! // Seven entries take seven internal and eight external nodes.
//! assert_eq!(map.tree().len(), 15);
//!
//! // Removing a key with two non-empty subtrees promotes its in-order successor.
//! assert_eq!(map.remove(&5), Some(50));
//! assert_eq!(map.expression().to_string(), "(((1)3(4))7(8(9)))");
//! ```
//!
//! # Features
//!
//! - **Pluggable ordering** - keys are compared by any [`compare::Compare`], defaulting to [`Ord`]
//! - **Checked operations** - optional keys and node positions are validated and rejected with [`Error`]
//! - **Iterative walks** - no operation recurses, so degenerate trees cost time but never stack
//!
//! # Implementation
//!
//! Nodes are stored in a slot arena and linked by index, with a non-owning parent link per
//! node. The tree is never rebalanced: operations cost O(h) for a tree of height h.

// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;

pub mod bst_map;
pub mod tree;

pub use bst_map::BSTMap;
pub use error::{Error, Result};
pub use tree::{ExtendedTree, Position};
