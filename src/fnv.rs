//! Byte-level FNV-1a (Fowler–Noll–Vo, variant "a") at 32 and 64 bits.
//!
//! The one-shot functions hash a complete byte slice. The streaming
//! states accept bytes incrementally and produce the same result as the
//! one-shot function over the concatenation of every write. They also
//! implement `fmt::Write`, which lets a `Display` value be hashed from its
//! textual form without first collecting it into a `String`.

use core::fmt;
use core::hash::Hasher;

pub const FNV1A_32_OFFSET_BASIS: u32 = 0x811c_9dc5;
pub const FNV1A_32_PRIME: u32 = 0x0100_0193;
pub const FNV1A_64_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
pub const FNV1A_64_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a, 32-bit, over `bytes`.
#[inline]
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut h = Fnv1a32::new();
    h.write(bytes);
    h.hash()
}

/// FNV-1a, 64-bit, over `bytes`.
#[inline]
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut h = Fnv1a64::new();
    h.write(bytes);
    h.hash()
}

/// Streaming 32-bit FNV-1a state.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Fnv1a32 {
    hash: u32,
}

impl Fnv1a32 {
    pub const fn new() -> Self {
        Self {
            hash: FNV1A_32_OFFSET_BASIS,
        }
    }

    /// Current 32-bit hash value.
    #[inline]
    pub fn hash(&self) -> u32 {
        self.hash
    }
}

impl Default for Fnv1a32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1a32 {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.hash ^= u32::from(b);
            self.hash = self.hash.wrapping_mul(FNV1A_32_PRIME);
        }
    }

    /// Zero-extended 32-bit hash.
    #[inline]
    fn finish(&self) -> u64 {
        u64::from(self.hash)
    }
}

impl fmt::Write for Fnv1a32 {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Hasher::write(self, s.as_bytes());
        Ok(())
    }
}

/// Streaming 64-bit FNV-1a state.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Fnv1a64 {
    hash: u64,
}

impl Fnv1a64 {
    pub const fn new() -> Self {
        Self {
            hash: FNV1A_64_OFFSET_BASIS,
        }
    }

    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }
}

impl Default for Fnv1a64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1a64 {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.hash ^= u64::from(b);
            self.hash = self.hash.wrapping_mul(FNV1A_64_PRIME);
        }
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }
}

impl fmt::Write for Fnv1a64 {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Hasher::write(self, s.as_bytes());
        Ok(())
    }
}
