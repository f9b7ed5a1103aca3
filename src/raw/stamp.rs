use core::num::NonZero;
use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_STAMP: AtomicU64 = AtomicU64::new(0);

/// Identifies the tree that issued a position.
///
/// Every tree (including every clone) draws a fresh stamp, so a position handed to a tree
/// other than the one that created it is rejected instead of silently aliasing a slot.
/// The counter is 64 bits wide, so no program lives long enough to see a stamp repeat.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub(crate) struct Stamp(NonZero<u64>);

impl Stamp {
    pub(crate) fn next() -> Self {
        let raw = NEXT_STAMP.fetch_add(1, Ordering::Relaxed);
        Self(NonZero::<u64>::MIN.saturating_add(raw))
    }
}
