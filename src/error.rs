use thiserror::Error;

/// Errors reported by [`ExtendedTree`](crate::tree::ExtendedTree) and
/// [`BSTMap`](crate::BSTMap).
///
/// Every fallible operation checks its arguments before touching the tree, so an error
/// never leaves a partially applied change behind.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// A missing key was passed to a checked map operation.
    #[error("invalid key: {0}")]
    InvalidKey(&'static str),

    /// A position passed to a map does not name one of its entries.
    #[error("invalid entry: {0}")]
    InvalidEntry(&'static str),

    /// A structural tree operation was given a node of the wrong kind, or a position that
    /// this tree did not issue.
    #[error("invalid position: {0}")]
    InvalidPosition(&'static str),

    /// A root was added to a tree that already has one.
    #[error("tree already has a root")]
    NonEmptyTree,
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
