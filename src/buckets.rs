//! BucketArray: the slot vector of chain heads.

use crate::chain::{self, Link};

pub(crate) struct BucketArray<K, V> {
    slots: Vec<Link<K, V>>,
}

impl<K, V> BucketArray<K, V> {
    /// `capacity` empty slots, at least one.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity.max(1)),
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn slot(&self, index: usize) -> &Link<K, V> {
        &self.slots[index]
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut Link<K, V> {
        &mut self.slots[index]
    }

    pub(crate) fn slots(&self) -> &[Link<K, V>] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Link<K, V>] {
        &mut self.slots
    }

    /// Empty every slot, keeping the capacity.
    pub(crate) fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            chain::drop_chain(slot.take());
        }
    }

    /// Replace the slots with `new_capacity` fresh ones and move every node
    /// to the head of the chain at `index(node.hash, new_capacity)`.
    ///
    /// Only stored hashes are consulted; keys are never touched.
    pub(crate) fn rehash<F>(&mut self, new_capacity: usize, mut index: F)
    where
        F: FnMut(u64, usize) -> usize,
    {
        let mut grown = BucketArray::new(new_capacity);
        let capacity = grown.capacity();
        for slot in self.slots.iter_mut() {
            let mut link = slot.take();
            while let Some(mut node) = link {
                link = node.next.take();
                let i = index(node.hash, capacity);
                chain::push_front(grown.slot_mut(i), node);
            }
        }
        core::mem::swap(&mut self.slots, &mut grown.slots);
    }

    /// Number of nodes reachable from all slots. O(n).
    pub(crate) fn count_entries(&self) -> usize {
        let mut n = 0;
        for slot in &self.slots {
            let mut cur = slot.as_deref();
            while let Some(e) = cur {
                n += 1;
                cur = e.next.as_deref();
            }
        }
        n
    }

    /// Hand the slots to an owning iterator; `self` is left empty.
    pub(crate) fn into_slots(mut self) -> Vec<Link<K, V>> {
        core::mem::take(&mut self.slots)
    }
}

impl<K, V> Drop for BucketArray<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

fn empty_slots<K, V>(capacity: usize) -> Vec<Link<K, V>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}
