//! HashStrategy: maps a key to a bucket index within a range.

use crate::fnv::{Fnv1a32, Fnv1a64};
use core::fmt::{Display, Write};
use core::hash::{Hash, Hasher};
use std::collections::hash_map::DefaultHasher;

/// How keys are turned into bucket indices.
///
/// `Native` goes through the key's `Hash` impl. The FNV-1a variants hash
/// the UTF-8 bytes of the key's `Display` text, so two keys with the same
/// text land in the same bucket regardless of their `Hash` impls.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum HashStrategy {
    #[default]
    Native,
    Fnv1a32,
    Fnv1a64,
}

impl HashStrategy {
    /// Bucket index of `key` in `[0, range)`. `range` must be non-zero.
    #[inline]
    pub fn index<Q>(&self, key: &Q, range: usize) -> usize
    where
        Q: ?Sized + Hash + Display,
    {
        self.reduce(self.hash_code(key), range)
    }

    /// Bucket index in `[0, range)` for a code returned by `hash_code`.
    ///
    /// Growth relocates entries through this using their stored codes, so
    /// it never calls back into the key.
    #[inline]
    pub fn reduce(&self, code: u64, range: usize) -> usize {
        debug_assert!(range > 0, "bucket range must be non-zero");
        match self {
            HashStrategy::Native => reduce_signed(code as i64, range),
            HashStrategy::Fnv1a32 | HashStrategy::Fnv1a64 => (code % range as u64) as usize,
        }
    }

    /// Unreduced hash of `key` under this strategy.
    ///
    /// For `Native` this is the signed hash code's bit pattern; for
    /// `Fnv1a32` it is the 32-bit hash zero-extended.
    pub fn hash_code<Q>(&self, key: &Q) -> u64
    where
        Q: ?Sized + Hash + Display,
    {
        match self {
            HashStrategy::Native => native_code(key) as u64,
            HashStrategy::Fnv1a32 => {
                let mut h = Fnv1a32::new();
                // The sink never fails; a `Display` error truncates the text.
                let _ = write!(h, "{}", key);
                u64::from(h.hash())
            }
            HashStrategy::Fnv1a64 => {
                let mut h = Fnv1a64::new();
                let _ = write!(h, "{}", key);
                h.hash()
            }
        }
    }
}

/// Signed hash code from the key's `Hash` impl. `DefaultHasher::new()` uses
/// fixed keys, so the code is stable for the life of the process.
fn native_code<Q>(key: &Q) -> i64
where
    Q: ?Sized + Hash,
{
    let mut h = DefaultHasher::new();
    key.hash(&mut h);
    h.finish() as i64
}

/// `|code| mod range`. `i64::MIN` has no positive counterpart and is
/// reduced from its raw bit pattern instead.
#[inline]
fn reduce_signed(code: i64, range: usize) -> usize {
    let magnitude = match code.checked_abs() {
        Some(abs) => abs as u64,
        None => code as u64,
    };
    (magnitude % range as u64) as usize
}
