use alloc::vec::Vec;

use super::handle::Handle;

#[derive(Clone)]
enum Slot<T> {
    Occupied { generation: u32, element: T },
    // Vacant slots form a singly linked free list.
    Vacant { generation: u32, next: Option<Handle> },
}

/// Node storage addressed by [`Handle`]. Vacated slots are reused, most recent first.
///
/// Every slot counts how many times it has been vacated. A handle paired with the
/// generation it was allocated under names that allocation only, even after the slot is
/// reused. Generations wrap after `u32::MAX` reuses of one slot.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    next_vacant: Option<Handle>,
    occupied: usize,
}

impl<T> Arena<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            next_vacant: None,
            occupied: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.occupied
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        self.occupied += 1;
        if let Some(handle) = self.next_vacant {
            let slot = &mut self.slots[handle.to_index()];
            let Slot::Vacant { generation, next } = *slot else {
                unreachable!("`Arena::alloc()` - free list names an occupied slot!");
            };
            self.next_vacant = next;
            *slot = Slot::Occupied { generation, element };
            return handle;
        }
        assert!(
            self.slots.len() < Handle::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            Handle::MAX
        );
        self.slots.push(Slot::Occupied { generation: 0, element });
        Handle::from_index(self.slots.len() - 1)
    }

    /// Returns true if `handle` names an occupied slot.
    pub(crate) fn contains(&self, handle: Handle) -> bool {
        self.generation(handle).is_some()
    }

    /// Returns the generation of the occupied slot named by `handle`.
    #[inline]
    pub(crate) fn generation(&self, handle: Handle) -> Option<u32> {
        match self.slots.get(handle.to_index()) {
            Some(Slot::Occupied { generation, .. }) => Some(*generation),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        match self.slots.get(handle.to_index()) {
            Some(Slot::Occupied { element, .. }) => element,
            _ => panic!("`Arena::get()` - `handle` is vacant!"),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        match self.slots.get_mut(handle.to_index()) {
            Some(Slot::Occupied { element, .. }) => element,
            _ => panic!("`Arena::get_mut()` - `handle` is vacant!"),
        }
    }

    /// Moves the element out, advances the slot's generation and pushes the slot onto the
    /// free list.
    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let generation = self.generation(handle).expect("`Arena::take()` - `handle` is vacant!");
        let vacant = Slot::Vacant {
            generation: generation.wrapping_add(1),
            next: self.next_vacant.replace(handle),
        };
        self.occupied -= 1;
        match core::mem::replace(&mut self.slots[handle.to_index()], vacant) {
            Slot::Occupied { element, .. } => element,
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    pub(crate) fn free(&mut self, handle: Handle) {
        drop(self.take(handle));
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.next_vacant = None;
        self.occupied = 0;
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reserves_capacity() {
        let arena: Arena<u32> = Arena::with_capacity(10);
        assert_eq!(arena.capacity(), 10);
        assert!(arena.is_empty());
    }

    #[test]
    fn vacated_slots_are_reused_last_in_first_out() {
        let mut arena: Arena<u32> = Arena::with_capacity(4);
        let a = arena.alloc(1);
        let b = arena.alloc(2);
        let c = arena.alloc(3);
        arena.free(a);
        arena.free(c);
        assert!(!arena.contains(a));
        assert!(arena.contains(b));

        assert_eq!(arena.alloc(30), c);
        assert_eq!(arena.alloc(10), a);
        assert_eq!(*arena.get(a), 10);
        assert_eq!(arena.len(), 3);
        assert_eq!(arena.alloc(4), Handle::from_index(3));
    }

    #[test]
    fn reuse_advances_generation() {
        let mut arena: Arena<u32> = Arena::with_capacity(2);
        let a = arena.alloc(1);
        let b = arena.alloc(2);
        assert_eq!(arena.generation(a), Some(0));
        arena.free(a);
        assert_eq!(arena.generation(a), None);
        assert_eq!(arena.alloc(3), a);
        assert_eq!(arena.generation(a), Some(1));
        arena.free(a);
        arena.alloc(4);
        assert_eq!(arena.generation(a), Some(2));
        assert_eq!(arena.generation(b), Some(0));
    }

    #[test]
    fn contains_rejects_out_of_range_handles() {
        let mut arena: Arena<u32> = Arena::with_capacity(1);
        arena.alloc(1);
        assert!(!arena.contains(Handle::from_index(5)));
    }

    #[test]
    #[should_panic(expected = "`Arena::get()` - `handle` is vacant!")]
    fn get_freed_handle_panics() {
        let mut arena: Arena<u32> = Arena::with_capacity(1);
        let handle = arena.alloc(1);
        arena.free(handle);
        let _ = arena.get(handle);
    }

    #[test]
    #[should_panic(expected = "`Arena::take()` - `handle` is vacant!")]
    fn double_take_panics() {
        let mut arena: Arena<u32> = Arena::with_capacity(1);
        let handle = arena.alloc(1);
        arena.free(handle);
        arena.free(handle);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Alloc(u32),
        Set(usize, u32),
        Take(usize),
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            20 => any::<u32>().prop_map(Op::Alloc),
            5 => (any::<usize>(), any::<u32>()).prop_map(|(which, value)| Op::Set(which, value)),
            10 => any::<usize>().prop_map(Op::Take),
            1 => Just(Op::Clear),
        ]
    }

    proptest! {
        /// Live handles always read back their latest value; vacated ones are never
        /// reported as live until reused.
        #[test]
        fn tracks_live_handles(ops in prop::collection::vec(op(), 0..256)) {
            let mut live: Vec<(Handle, u32)> = Vec::new();
            let mut vacated: Vec<Handle> = Vec::new();
            let mut arena: Arena<u32> = Arena::with_capacity(0);

            for op in ops {
                match op {
                    Op::Alloc(value) => {
                        let handle = arena.alloc(value);
                        prop_assert!(live.iter().all(|(h, _)| *h != handle));
                        vacated.retain(|h| *h != handle);
                        live.push((handle, value));
                    }
                    Op::Set(which, value) if !live.is_empty() => {
                        let index = which % live.len();
                        *arena.get_mut(live[index].0) = value;
                        live[index].1 = value;
                    }
                    Op::Take(which) if !live.is_empty() => {
                        let (handle, value) = live.swap_remove(which % live.len());
                        prop_assert_eq!(arena.take(handle), value);
                        vacated.push(handle);
                    }
                    Op::Clear => {
                        arena.clear();
                        live.clear();
                        vacated.clear();
                    }
                    Op::Set(..) | Op::Take(_) => {}
                }

                prop_assert_eq!(arena.len(), live.len());
                for &(handle, value) in &live {
                    prop_assert_eq!(*arena.get(handle), value);
                }
                for &handle in &vacated {
                    prop_assert!(!arena.contains(handle));
                }
            }
        }
    }
}
