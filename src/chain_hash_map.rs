//! ChainHashMap: separate-chaining map over a `BucketArray` and a
//! `HashStrategy`.

use crate::buckets::BucketArray;
use crate::chain::{self, Entry};
use crate::iter::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};
use crate::strategy::HashStrategy;
use core::borrow::Borrow;
use core::fmt::{self, Debug, Display};
use core::hash::Hash;

/// Bucket count used by `new()` and `Default`.
pub const DEFAULT_CAPACITY: usize = 16;

/// The map grows once `len / capacity` exceeds this ratio.
pub const LOAD_FACTOR_THRESHOLD: f64 = 0.75;

/// A hash map resolving collisions with per-bucket linked chains.
///
/// Keys must be `Eq + Hash + Display`: `Hash` feeds the `Native` strategy,
/// `Display` feeds the FNV-1a strategies. The bound does not depend on the
/// strategy picked at runtime, so a map that only ever uses `Native` still
/// needs `Display` keys; `(u32, u32)` or `Vec<u8>` need a newtype.
///
/// Each entry stores its unreduced hash, taken once on insert. Growth
/// relocates entries by that stored hash and never calls `Hash` or
/// `Display` again. Within a bucket, new keys are
/// prepended, so iteration yields the newest key of each bucket first.
/// Capacity doubles when the load factor passes 0.75 and never shrinks.
pub struct ChainHashMap<K, V> {
    buckets: BucketArray<K, V>,
    len: usize,
    strategy: HashStrategy,
}

impl<K, V> ChainHashMap<K, V> {
    /// Empty map with `DEFAULT_CAPACITY` buckets and the `Native` strategy.
    pub fn new() -> Self {
        Self::with_capacity_and_strategy(DEFAULT_CAPACITY, HashStrategy::Native)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_strategy(capacity, HashStrategy::Native)
    }

    pub fn with_strategy(strategy: HashStrategy) -> Self {
        Self::with_capacity_and_strategy(DEFAULT_CAPACITY, strategy)
    }

    /// Empty map with `capacity` buckets (clamped to at least 1).
    pub fn with_capacity_and_strategy(capacity: usize, strategy: HashStrategy) -> Self {
        Self {
            buckets: BucketArray::new(capacity),
            len: 0,
            strategy,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Same as `len`.
    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.capacity()
    }

    pub fn strategy(&self) -> HashStrategy {
        self.strategy
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.capacity() as f64
    }

    /// Drop every entry; the bucket count is kept.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.len = 0;
    }

    /// Iterate `(&K, &V)` by ascending bucket, then chain order.
    ///
    /// The iterator borrows the map, so the map cannot be modified (and in
    /// particular cannot grow) until it is dropped.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.buckets.slots(), self.len)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(self.buckets.slots_mut(), self.len)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    /// Call `visit` on every pair in iteration order.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V),
    {
        for (k, v) in self.iter() {
            visit(k, v);
        }
    }
}

impl<K, V> ChainHashMap<K, V>
where
    K: Eq + Hash + Display,
{
    #[inline]
    fn bucket_of<Q>(&self, q: &Q) -> usize
    where
        Q: ?Sized + Hash + Display,
    {
        self.strategy.index(q, self.buckets.capacity())
    }

    /// Insert or overwrite. Returns the previous value for `key`, if any.
    ///
    /// Overwriting keeps the entry where it is and never triggers growth.
    /// A new key is prepended to its chain; if the load factor then exceeds
    /// `LOAD_FACTOR_THRESHOLD` the map doubles its capacity.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.strategy.hash_code(&key);
        let index = self.strategy.reduce(hash, self.buckets.capacity());
        let head = self.buckets.slot_mut(index);
        if let Some(e) = chain::find_mut(head, &key) {
            return Some(core::mem::replace(&mut e.value, value));
        }
        chain::push_front(head, Entry::new(hash, key, value));
        self.len += 1;
        if self.load_factor() > LOAD_FACTOR_THRESHOLD {
            self.grow();
        }
        None
    }

    /// `insert` without the previous value.
    pub fn put(&mut self, key: K, value: V) {
        let _ = self.insert(key, value);
    }

    /// Lookup by key or any borrowed form of it.
    ///
    /// `Q`'s `Hash`, `Eq` and `Display` must agree with `K`'s, which holds
    /// for the usual pairs such as `String`/`str`.
    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Hash + Display,
    {
        let index = self.bucket_of(q);
        chain::find(self.buckets.slot(index), q).map(|e| &e.value)
    }

    pub fn get_mut<Q>(&mut self, q: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Hash + Display,
    {
        let index = self.bucket_of(q);
        chain::find_mut(self.buckets.slot_mut(index), q).map(|e| &mut e.value)
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Hash + Display,
    {
        self.get(q).is_some()
    }

    /// Unlink the entry for `q` and return its value. Capacity is unchanged.
    pub fn remove<Q>(&mut self, q: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Hash + Display,
    {
        let index = self.bucket_of(q);
        let node = chain::unlink(self.buckets.slot_mut(index), q)?;
        self.len -= 1;
        let Entry { value, .. } = *node;
        Some(value)
    }

    /// Double the bucket count and move every entry to its new bucket.
    fn grow(&mut self) {
        let strategy = self.strategy;
        let new_capacity = self.buckets.capacity() * 2;
        self.buckets
            .rehash(new_capacity, |hash, range| strategy.reduce(hash, range));
        debug_assert_eq!(self.buckets.count_entries(), self.len);
    }

    /// Check every structural invariant; panics with a description of the
    /// first violation.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert!(self.buckets.capacity() >= 1, "capacity must be >= 1");
        assert_eq!(
            self.buckets.count_entries(),
            self.len,
            "len must match reachable entries"
        );
        for (i, slot) in self.buckets.slots().iter().enumerate() {
            let mut seen: Vec<&K> = Vec::new();
            let mut cur = slot.as_deref();
            while let Some(e) = cur {
                assert_eq!(
                    e.hash,
                    self.strategy.hash_code(&e.key),
                    "stale stored hash for {}",
                    e.key
                );
                assert_eq!(
                    self.bucket_of(&e.key),
                    i,
                    "entry {} resides in the wrong bucket",
                    e.key
                );
                assert!(
                    !seen.contains(&&e.key),
                    "duplicate key {} in bucket {}",
                    e.key,
                    i
                );
                seen.push(&e.key);
                cur = e.next.as_deref();
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn chain_keys(&self, index: usize) -> Vec<K>
    where
        K: Clone,
    {
        chain::keys_of(self.buckets.slot(index))
    }
}

impl<K, V> Default for ChainHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, V: Debug> Debug for ChainHashMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Extend<(K, V)> for ChainHashMap<K, V>
where
    K: Eq + Hash + Display,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ChainHashMap<K, V>
where
    K: Eq + Hash + Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut m = Self::new();
        m.extend(iter);
        m
    }
}

impl<K, V> IntoIterator for ChainHashMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        let len = self.len;
        IntoIter::new(self.buckets.into_slots(), len)
    }
}

impl<'a, K, V> IntoIterator for &'a ChainHashMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut ChainHashMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}
