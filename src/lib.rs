//! chain-hashmap: a single-threaded, separate-chaining hash map with a
//! pluggable hashing strategy.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small map whose every moving part is visible: how a key
//!   becomes a bucket index, how a bucket holds colliding keys, and how
//!   entries migrate when the table grows.
//! - Layers:
//!   - `fnv`: byte-level FNV-1a at 32 and 64 bits, one-shot and streaming.
//!   - `HashStrategy`: turns a key into an index in `[0, range)`, either
//!     through the key's `Hash` impl (`Native`) or through FNV-1a over the
//!     key's `Display` text (`Fnv1a32`, `Fnv1a64`).
//!   - Chains: `Option<Box<Entry>>` singly linked lists; each link owns
//!     the rest of its chain.
//!   - BucketArray: the slot vector of chain heads; owns every node.
//!   - `ChainHashMap<K, V>`: put/get/remove/clear/iterate on top of the
//!     two, with load-factor-driven growth.
//!
//! Constraints
//! - Single-threaded; no internal locking.
//! - Keys are unique per map; `put` on an existing key overwrites in place.
//! - New keys are prepended to their chain (O(1) insert once the chain is
//!   scanned), so the newest key of a bucket is iterated first.
//! - Growth doubles the bucket count once `len / capacity > 0.75` after a
//!   new key. Overwrites never grow; removals never shrink.
//!
//! Ownership
//! - Removal splices the node out and returns its value; growth moves each
//!   boxed node into the new slot vector. No node is ever reachable from
//!   two chains and no node is reallocated.
//! - Each node carries the unreduced hash taken on insert. Growth reduces
//!   that stored hash against the new capacity and never calls the key's
//!   `Hash` or `Display`, so user code cannot panic mid-rehash.
//! - Chains are dropped node by node, so a degenerate single-bucket map
//!   of any length drops without deep recursion.
//!
//! Iteration
//! - Iterators are explicit cursors (slot position + current node) that
//!   borrow the map; mutation during iteration is a compile error.
//! - Order: ascending bucket index, then chain order.
//!
//! Hashing notes
//! - `Native` hashes with `DefaultHasher::new()`, whose keys are fixed, so
//!   indices are stable within a process. The 64-bit result is read as a
//!   signed hash code and its magnitude is reduced; `i64::MIN` is reduced
//!   from its raw bit pattern since it has no positive counterpart.
//! - The FNV-1a strategies stream the key's `Display` output straight into
//!   the hasher; no intermediate `String` is built.

mod buckets;
mod chain;
pub mod chain_hash_map;
mod chain_hash_map_proptest;
pub mod fnv;
pub mod iter;
pub mod strategy;

// Public surface
pub use chain_hash_map::{ChainHashMap, DEFAULT_CAPACITY, LOAD_FACTOR_THRESHOLD};
pub use strategy::HashStrategy;
