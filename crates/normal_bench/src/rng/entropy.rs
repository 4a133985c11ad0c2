//! Seed sources for the sampling engine.
//!
//! An entropy source is consulted exactly once, to seed the engine. It has
//! no failure mode: when the operating system cannot deliver randomness
//! the source degrades to [`FALLBACK_SEED`].

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::{debug, warn};

/// Seed used when the operating system cannot supply entropy.
///
/// This is the canonical MT19937 default seed.
pub const FALLBACK_SEED: u32 = 5489;

/// A one-shot provider of engine seeds.
pub trait EntropySource {
    /// Returns a seed for the pseudo-random engine.
    fn next_seed(&self) -> u32;
}

/// Seeds from the operating system's entropy pool.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn next_seed(&self) -> u32 {
        seed_or_fallback(&mut OsRng)
    }
}

/// Always yields the wrapped seed. Used for tests and reproducible runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedSeed(pub u32);

impl EntropySource for FixedSeed {
    #[inline]
    fn next_seed(&self) -> u32 {
        self.0
    }
}

/// Draws four bytes from `rng`, or returns [`FALLBACK_SEED`] if it fails.
pub(crate) fn seed_or_fallback<R: RngCore + ?Sized>(rng: &mut R) -> u32 {
    let mut bytes = [0u8; 4];
    match rng.try_fill_bytes(&mut bytes) {
        Ok(()) => {
            let seed = u32::from_le_bytes(bytes);
            debug!(seed, "seed drawn from entropy source");
            seed
        }
        Err(err) => {
            warn!(%err, fallback = FALLBACK_SEED, "entropy unavailable, using fallback seed");
            FALLBACK_SEED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An entropy pool that is always exhausted.
    struct BrokenPool;

    impl RngCore for BrokenPool {
        fn next_u32(&mut self) -> u32 {
            unreachable!("only try_fill_bytes is used for seeding")
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!("only try_fill_bytes is used for seeding")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!("only try_fill_bytes is used for seeding")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy pool exhausted"))
        }
    }

    /// A pool that always yields the same bytes.
    struct ConstantPool([u8; 4]);

    impl RngCore for ConstantPool {
        fn next_u32(&mut self) -> u32 {
            u32::from_le_bytes(self.0)
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.next_u32())
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for (i, byte) in dest.iter_mut().enumerate() {
                *byte = self.0[i % 4];
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn test_fixed_seed_is_stable() {
        let source = FixedSeed(42);
        assert_eq!(source.next_seed(), 42);
        assert_eq!(source.next_seed(), 42);
    }

    #[test]
    fn test_failing_pool_falls_back() {
        assert_eq!(seed_or_fallback(&mut BrokenPool), FALLBACK_SEED);
    }

    #[test]
    fn test_pool_bytes_are_little_endian() {
        let mut pool = ConstantPool([0x78, 0x56, 0x34, 0x12]);
        assert_eq!(seed_or_fallback(&mut pool), 0x1234_5678);
    }

    #[test]
    fn test_os_entropy_varies() {
        // 32-bit seeds: eight identical draws in a row would mean the pool is stuck
        let source = OsEntropy;
        let first = source.next_seed();
        let varied = (0..8).any(|_| source.next_seed() != first);
        assert!(varied, "OS entropy returned {} eight times", first);
    }
}
