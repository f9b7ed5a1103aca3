use core::num::NonZero;

/// Slot number of a node in an [`Arena`](super::Arena), stored off by one so that the zero
/// bit pattern is left for `None`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<u32>);

impl Handle {
    /// Largest slot index a handle can name.
    pub(crate) const MAX: usize = u32::MAX as usize - 1;

    pub(crate) fn from_index(index: usize) -> Self {
        u32::try_from(index)
            .ok()
            .and_then(|index| index.checked_add(1))
            .and_then(NonZero::new)
            .map(Self)
            .expect("`Handle::from_index()` - slot index out of range!")
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        self.0.get() as usize - 1
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // Node links lean on the niche: a parent link and a child pair cost no tag.
    assert_eq_size!(Handle, Option<Handle>);
    assert_eq_size!(Handle, u32);
    assert_eq_size!([Handle; 2], Option<[Handle; 2]>);

    #[test]
    #[should_panic(expected = "`Handle::from_index()` - slot index out of range!")]
    fn index_past_max_panics() {
        let _ = Handle::from_index(Handle::MAX + 1);
    }

    #[test]
    fn distinct_slots_give_distinct_handles() {
        assert_eq!(Handle::from_index(0).to_index(), 0);
        assert_ne!(Handle::from_index(0), Handle::from_index(1));
        assert_eq!(Handle::from_index(Handle::MAX).to_index(), Handle::MAX);
    }

    proptest! {
        #[test]
        fn index_survives_conversion(index in 0..=Handle::MAX) {
            prop_assert_eq!(Handle::from_index(index).to_index(), index);
        }
    }
}
