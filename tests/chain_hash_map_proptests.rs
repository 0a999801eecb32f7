// ChainHashMap and HashStrategy property tests, public API only.
//
// Property 1: round trip for distinct keys under every strategy and any
//  starting capacity; len equals the number of distinct keys.
// Property 2: overwrite leaves len unchanged and the last value wins.
// Property 3: remove on present keys drops len by one and makes the key
//  absent; remove on absent keys is a no-op.
// Property 4: iteration yields len unique pairs equal to the inserted set.
// Property 5: strategy indices are deterministic and inside the range;
//  FNV-1a strategies hash the key's Display text.
use chain_hashmap::fnv::{fnv1a_32, fnv1a_64, FNV1A_32_OFFSET_BASIS};
use chain_hashmap::{ChainHashMap, HashStrategy};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

fn arb_strategy() -> impl Strategy<Value = HashStrategy> {
    prop_oneof![
        Just(HashStrategy::Native),
        Just(HashStrategy::Fnv1a32),
        Just(HashStrategy::Fnv1a64),
    ]
}

// Property 1: every distinct key reads back its value.
proptest! {
    #[test]
    fn prop_round_trip(
        strategy in arb_strategy(),
        capacity in 0usize..=32,
        entries in proptest::collection::btree_map(".{0,12}", any::<u64>(), 0..200)
    ) {
        let mut m = ChainHashMap::with_capacity_and_strategy(capacity, strategy);
        for (k, v) in &entries {
            m.put(k.clone(), *v);
        }
        prop_assert_eq!(m.len(), entries.len());
        for (k, v) in &entries {
            prop_assert_eq!(m.get(k.as_str()), Some(v));
        }
    }
}

// Property 2: overwrite keeps len and the latest value wins.
proptest! {
    #[test]
    fn prop_overwrite(
        strategy in arb_strategy(),
        keys in proptest::collection::btree_set(any::<i32>(), 1..50),
        v1 in any::<i16>(),
        v2 in any::<i16>()
    ) {
        let mut m = ChainHashMap::with_capacity_and_strategy(1, strategy);
        for k in &keys {
            m.put(*k, v1);
        }
        let len = m.len();
        let cap = m.capacity();
        for k in &keys {
            m.put(*k, v2);
        }
        prop_assert_eq!(m.len(), len);
        prop_assert_eq!(m.capacity(), cap);
        for k in &keys {
            prop_assert_eq!(m.get(k), Some(&v2));
        }
    }
}

// Property 3: remove correctness against a BTreeMap model.
proptest! {
    #[test]
    fn prop_remove(
        strategy in arb_strategy(),
        inserted in proptest::collection::btree_map(0u16..500, any::<u8>(), 0..100),
        probes in proptest::collection::vec(0u16..500, 0..100)
    ) {
        let mut m: ChainHashMap<u16, u8> = inserted.iter().map(|(k, v)| (*k, *v)).collect();
        let mut model: BTreeMap<u16, u8> = inserted.clone();
        let mut m2 = ChainHashMap::with_strategy(strategy);
        m2.extend(inserted.iter().map(|(k, v)| (*k, *v)));
        for p in probes {
            for map in [&mut m, &mut m2] {
                let before = map.len();
                let expected = model.get(&p).copied();
                prop_assert_eq!(map.remove(&p), expected);
                let after = if expected.is_some() { before - 1 } else { before };
                prop_assert_eq!(map.len(), after);
                prop_assert_eq!(map.get(&p), None);
            }
            model.remove(&p);
        }
    }
}

// Property 4: iteration completeness and agreement with keys().
proptest! {
    #[test]
    fn prop_iteration_complete(
        strategy in arb_strategy(),
        keys in proptest::collection::vec(any::<u32>(), 0..300)
    ) {
        let mut m = ChainHashMap::with_capacity_and_strategy(1, strategy);
        for k in &keys {
            m.put(*k, k.wrapping_mul(3));
        }
        let seen: Vec<u32> = m.iter().map(|(k, v)| {
            assert_eq!(*v, k.wrapping_mul(3));
            *k
        }).collect();
        prop_assert_eq!(seen.len(), m.len());
        let unique: BTreeSet<u32> = seen.iter().copied().collect();
        prop_assert_eq!(unique.len(), seen.len());
        prop_assert_eq!(&unique, &keys.iter().copied().collect::<BTreeSet<u32>>());
        prop_assert_eq!(m.keys().copied().collect::<Vec<u32>>(), seen);
    }
}

// Property 5: strategies are deterministic, in range, and FNV hashes text.
proptest! {
    #[test]
    fn prop_strategy_deterministic(
        strategy in arb_strategy(),
        key in ".{0,32}",
        range in 1usize..10_000
    ) {
        let a = strategy.index(key.as_str(), range);
        let b = strategy.index(key.as_str(), range);
        let c = strategy.index(&key, range);
        prop_assert!(a < range);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a, c);
    }

    #[test]
    fn prop_fnv_strategy_matches_byte_primitive(key in ".{0,32}", range in 1usize..10_000) {
        prop_assert_eq!(
            HashStrategy::Fnv1a32.index(key.as_str(), range) as u64,
            u64::from(fnv1a_32(key.as_bytes())) % range as u64
        );
        prop_assert_eq!(
            HashStrategy::Fnv1a64.index(key.as_str(), range) as u64,
            fnv1a_64(key.as_bytes()) % range as u64
        );
    }

    #[test]
    fn prop_fnv_hashes_integer_text(n in any::<i64>(), range in 1usize..10_000) {
        let text = n.to_string();
        prop_assert_eq!(
            HashStrategy::Fnv1a64.index(&n, range),
            HashStrategy::Fnv1a64.index(text.as_str(), range)
        );
    }
}

#[test]
fn fnv32_empty_key_is_offset_basis_mod_range() {
    for range in [1usize, 2, 16, 100, 65_536] {
        assert_eq!(
            HashStrategy::Fnv1a32.index("", range),
            (FNV1A_32_OFFSET_BASIS as usize) % range
        );
    }
}
