//! 32-bit Mersenne Twister (MT19937).
//!
//! Matsumoto & Nishimura (1998), "Mersenne Twister: A 623-dimensionally
//! equidistributed uniform pseudo-random number generator". Period
//! 2^19937 - 1, 624 words of state, full `u32` output range.
//!
//! Initialisation and tempering follow the reference `init_genrand` /
//! `genrand_int32`, so the output sequence for a given seed matches other
//! conforming implementations.

use std::fmt;

use rand::{RngCore, SeedableRng};

/// Degree of recurrence (state words).
const N: usize = 624;
/// Middle word offset.
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;
/// Initialisation multiplier from the reference implementation.
const INIT_MULTIPLIER: u32 = 1_812_433_253;

/// MT19937 pseudo-random engine.
///
/// State size is fixed and independent of how many values are drawn. Every
/// `u32` is a valid seed.
///
/// # Examples
///
/// ```rust
/// use normal_bench::rng::Mt19937;
///
/// let mut a = Mt19937::new(5489);
/// let mut b = Mt19937::new(5489);
///
/// assert_eq!(a.next_raw(), 3_499_211_612);
/// assert_eq!(b.next_raw(), 3_499_211_612);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Mt19937 {
    state: [u32; N],
    /// Next word to temper; `N` forces a twist on the next draw.
    index: usize,
}

impl Mt19937 {
    /// Creates an engine initialised from `seed`.
    pub fn new(seed: u32) -> Self {
        let mut state = [0u32; N];
        state[0] = seed;
        for i in 1..N {
            let prev = state[i - 1];
            state[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Self { state, index: N }
    }

    /// Returns the next tempered 32-bit output.
    #[inline]
    pub fn next_raw(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    /// Regenerates all `N` state words.
    fn twist(&mut self) {
        for i in 0..N - M {
            let y = (self.state[i] & UPPER_MASK) | (self.state[i + 1] & LOWER_MASK);
            self.state[i] = self.state[i + M] ^ twist_word(y);
        }
        for i in N - M..N - 1 {
            let y = (self.state[i] & UPPER_MASK) | (self.state[i + 1] & LOWER_MASK);
            self.state[i] = self.state[i + M - N] ^ twist_word(y);
        }
        let y = (self.state[N - 1] & UPPER_MASK) | (self.state[0] & LOWER_MASK);
        self.state[N - 1] = self.state[M - 1] ^ twist_word(y);

        self.index = 0;
    }
}

/// `y >> 1`, xored with `MATRIX_A` when `y` is odd.
#[inline(always)]
fn twist_word(y: u32) -> u32 {
    (y >> 1) ^ ((y & 1).wrapping_neg() & MATRIX_A)
}

impl fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt19937")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl RngCore for Mt19937 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    /// Two consecutive outputs, low word first.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_raw());
        let high = u64::from(self.next_raw());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Uses the low 32 bits of `state` directly as the MT19937 seed.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}
