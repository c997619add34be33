//! `FixedHashState` and `NoOpHashState`.
//!
//! `FixedHashState` wraps `foldhash` with a constant seed, so hashes only
//! depend on the input. `NoOpHashState` keeps the last written `u64` as the
//! hash, which is enough for keys like `TypeId` that are already hashes.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x5EED_3F7A_11C4_B0D9);

/// Hasher produced by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// Fixed-seed `foldhash` state.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use wf_utils::hash::FixedHashState;
///
/// let a = FixedHashState.hash_one("mapOfLongs");
/// let b = FixedHashState.hash_one("mapOfLongs");
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHasher

/// Hasher produced by [`NoOpHashState`].
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        // little-endian fold, so `write_u32(n)` and `write_u64(n)` agree
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(*byte as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// A state whose hashers pass the written value straight through.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use wf_utils::hash::NoOpHashState;
///
/// assert_eq!(NoOpHashState.hash_one(3_u64), 3);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}
