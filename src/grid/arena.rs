//! Slot arena backing the row and column chains.
//!
//! Records live in a flat `Vec` and are addressed by strongly-typed index
//! wrappers (`RowId`, `ColId`). Releasing a record drops it immediately and
//! pushes its slot onto a free list, so the next allocation reuses it.

use std::{fmt, marker::PhantomData, ops::{Index, IndexMut}};

/// Conversion between a typed index and its raw slot position.
pub(crate) trait SlotId: Copy {
    fn from_slot(slot: usize) -> Self;
    fn slot(self) -> usize;
}

macro_rules! idx {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub(crate) struct $name(usize);

        impl SlotId for $name {
            #[inline] fn from_slot(slot: usize) -> Self { Self(slot) }
            #[inline] fn slot(self) -> usize { self.0 }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

idx!(RowId);
idx!(ColId);

#[derive(Clone, Debug)]
pub(crate) struct Arena<I, T> {
    slots: Vec<Option<T>>,
    free:  Vec<usize>,
    live:  usize,
    _id:   PhantomData<I>,
}

impl<I: SlotId, T> Default for Arena<I, T> {
    fn default() -> Self { Self::new() }
}

impl<I: SlotId, T> Arena<I, T> {
    pub(crate) fn new() -> Self {
        Self { slots: Vec::new(), free: Vec::new(), live: 0, _id: PhantomData }
    }

    /// Number of live records.
    #[inline] pub(crate) fn len(&self) -> usize { self.live }

    /// Number of slots ever allocated (live + free).
    #[cfg(test)]
    #[inline] pub(crate) fn capacity(&self) -> usize { self.slots.len() }

    /// Returns true if `id` refers to a live record.
    #[inline]
    pub(crate) fn contains(&self, id: I) -> bool {
        self.slots.get(id.slot()).is_some_and(Option::is_some)
    }

    /// Store `value`, reusing a released slot when one is available.
    pub(crate) fn alloc(&mut self, value: T) -> I {
        self.live += 1;
        match self.free.pop() {
            Some(slot) => {
                debug_assert!(self.slots[slot].is_none(), "free list holds a live slot");
                self.slots[slot] = Some(value);
                I::from_slot(slot)
            }
            None => {
                self.slots.push(Some(value));
                I::from_slot(self.slots.len() - 1)
            }
        }
    }

    /// Take the record out of its slot and mark the slot free.
    pub(crate) fn release(&mut self, id: I) -> T {
        let value = self.slots[id.slot()].take().expect("released a stale arena id");
        self.free.push(id.slot());
        self.live -= 1;
        value
    }

    /// Drop every record and forget all slots.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.live = 0;
    }
}

impl<I: SlotId, T> Index<I> for Arena<I, T> {
    type Output = T;

    #[inline]
    fn index(&self, id: I) -> &T {
        self.slots[id.slot()].as_ref().expect("stale arena id")
    }
}

impl<I: SlotId, T> IndexMut<I> for Arena<I, T> {
    #[inline]
    fn index_mut(&mut self, id: I) -> &mut T {
        self.slots[id.slot()].as_mut().expect("stale arena id")
    }
}
