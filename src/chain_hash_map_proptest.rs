#![cfg(test)]

// Property tests for ChainHashMap kept inside the crate so they can check
// structural invariants through crate-private accessors.

use crate::chain_hash_map::{ChainHashMap, LOAD_FACTOR_THRESHOLD};
use crate::strategy::HashStrategy;
use hashbrown::HashMap;
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

// Key newtype with Borrow<str>; Hash and Display agree with `str` so
// borrowed lookups resolve to the same bucket under every strategy.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
struct Key(String);
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
impl std::borrow::Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// Key with constant hash and text: every key shares one chain.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
struct Collide(String);
impl Hash for Collide {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}
impl fmt::Display for Collide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("collide")
    }
}

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Mutate(usize, i32),
    Iterate,
    Clear,
}

fn arb_strategy() -> impl Strategy<Value = HashStrategy> {
    prop_oneof![
        Just(HashStrategy::Native),
        Just(HashStrategy::Fnv1a32),
        Just(HashStrategy::Fnv1a64),
    ]
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=24).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
            2 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            2 => idx.clone().prop_map(OpI::Remove),
            2 => idx.clone().prop_map(OpI::Get),
            1 => prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            1 => Just(OpI::Iterate),
            1 => Just(OpI::Clear),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: State-machine equivalence against hashbrown::HashMap.
// Invariants exercised across random operation sequences and strategies:
// - `put`/`insert` overwrite existing keys in place; `insert` returns the old value.
// - `get`/`contains_key` parity with the model, including borrowed `&str` lookups.
// - `remove` returns the model's value and leaves the key absent.
// - `iter` yields each live entry exactly once; the key set equals the model's.
// - Every entry lives in the bucket its strategy assigns; `len` equals the
//   reachable entries; the load factor stays at or below the threshold after
//   growth; capacity never shrinks.
proptest! {
    #![proptest_config(ProptestConfig { cases: 96, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(
        strategy in arb_strategy(),
        capacity in 0usize..=4,
        (pool, ops) in arb_scenario()
    ) {
        let mut sut: ChainHashMap<Key, i32> =
            ChainHashMap::with_capacity_and_strategy(capacity, strategy);
        let mut model: HashMap<Key, i32> = HashMap::new();
        let mut last_capacity = sut.capacity();

        for op in ops {
            match op {
                OpI::Put(i, v) => {
                    let k = Key(pool[i].clone());
                    let fresh = !model.contains_key(&k);
                    sut.put(k.clone(), v);
                    model.insert(k, v);
                    if fresh {
                        prop_assert!(sut.load_factor() <= LOAD_FACTOR_THRESHOLD);
                    }
                }
                OpI::Insert(i, v) => {
                    let k = Key(pool[i].clone());
                    let before = sut.capacity();
                    let prev = sut.insert(k.clone(), v);
                    let model_prev = model.insert(k, v);
                    prop_assert_eq!(prev, model_prev);
                    if model_prev.is_some() {
                        prop_assert_eq!(sut.capacity(), before, "overwrite must not grow");
                    }
                }
                OpI::Remove(i) => {
                    let k = Key(pool[i].clone());
                    prop_assert_eq!(sut.remove(k.0.as_str()), model.remove(&k));
                    prop_assert!(sut.get(&k).is_none());
                }
                OpI::Get(i) => {
                    let k = Key(pool[i].clone());
                    prop_assert_eq!(sut.get(&k), model.get(&k));
                    prop_assert_eq!(sut.get(k.0.as_str()), model.get(&k));
                }
                OpI::Contains(s) => {
                    let has_model = model.keys().any(|k| k.0 == s);
                    prop_assert_eq!(sut.contains_key(s.as_str()), has_model);
                }
                OpI::Mutate(i, d) => {
                    let k = Key(pool[i].clone());
                    match (sut.get_mut(&k), model.get_mut(&k)) {
                        (Some(sv), Some(mv)) => {
                            *sv = sv.saturating_add(d);
                            *mv = mv.saturating_add(d);
                        }
                        (None, None) => {}
                        (s, m) => {
                            prop_assert!(false, "presence mismatch: {:?} vs {:?}", s, m);
                        }
                    }
                }
                OpI::Iterate => {
                    let pairs: Vec<(Key, i32)> = sut.iter().map(|(k, v)| (k.clone(), *v)).collect();
                    prop_assert_eq!(pairs.len(), sut.len());
                    let s_keys: BTreeSet<_> = pairs.iter().map(|(k, _)| k.clone()).collect();
                    let m_keys: BTreeSet<_> = model.keys().cloned().collect();
                    prop_assert_eq!(s_keys.len(), pairs.len(), "iteration repeated a key");
                    prop_assert_eq!(s_keys, m_keys);
                    for (k, v) in &pairs {
                        prop_assert_eq!(Some(v), model.get(k));
                    }
                }
                OpI::Clear => {
                    sut.clear();
                    model.clear();
                    prop_assert_eq!(sut.capacity(), last_capacity);
                }
            }

            // Post-conditions after each op
            sut.assert_invariants();
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            prop_assert_eq!(sut.strategy(), strategy);
            prop_assert!(sut.capacity() >= last_capacity, "capacity shrank");
            last_capacity = sut.capacity();
        }
    }
}

// Property: Same model equivalence with every key in one chain. Stresses
// chain scanning, head/middle/tail unlinking and rehash of a long chain.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_single_chain(
        strategy in arb_strategy(),
        (pool, ops) in arb_scenario()
    ) {
        let mut sut: ChainHashMap<Collide, i32> =
            ChainHashMap::with_capacity_and_strategy(1, strategy);
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Put(i, v) | OpI::Insert(i, v) => {
                    let prev = sut.insert(Collide(pool[i].clone()), v);
                    prop_assert_eq!(prev, model.insert(pool[i].clone(), v));
                }
                OpI::Remove(i) => {
                    let k = Collide(pool[i].clone());
                    prop_assert_eq!(sut.remove(&k), model.remove(&pool[i]));
                }
                OpI::Get(i) => {
                    prop_assert_eq!(sut.get(&Collide(pool[i].clone())), model.get(&pool[i]));
                }
                OpI::Contains(s) => {
                    prop_assert_eq!(sut.contains_key(&Collide(s.clone())), model.contains_key(&s));
                }
                OpI::Mutate(i, d) => {
                    if let Some(v) = sut.get_mut(&Collide(pool[i].clone())) {
                        *v = v.wrapping_sub(d);
                    }
                    if let Some(v) = model.get_mut(&pool[i]) {
                        *v = v.wrapping_sub(d);
                    }
                }
                OpI::Iterate => {
                    let s_keys: BTreeSet<String> = sut.keys().map(|k| k.0.clone()).collect();
                    let m_keys: BTreeSet<String> = model.keys().cloned().collect();
                    prop_assert_eq!(s_keys, m_keys);
                }
                OpI::Clear => {
                    sut.clear();
                    model.clear();
                }
            }

            sut.assert_invariants();
            prop_assert_eq!(sut.len(), model.len());
        }
    }
}
