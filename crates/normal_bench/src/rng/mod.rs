//! # Random Number Generation
//!
//! Building blocks of the sampling benchmark:
//!
//! - [`entropy`]: one-shot seed sources (operating system or fixed)
//! - [`mt19937`]: the 32-bit Mersenne Twister engine
//! - [`normal`]: the normal (Gaussian) transform applied to engine output
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: the engine is fully determined by its 32-bit seed
//! - **Ownership**: no global generator; callers own the engine and lend it
//!   to the sampler by `&mut`
//! - **Static dispatch**: the sampler is generic over `rand::Rng`, so the
//!   hot loop monomorphises onto [`Mt19937`]
//!
//! ## Usage Example
//!
//! ```rust
//! use normal_bench::rng::{EntropySource, FixedSeed, Mt19937, NormalSampler};
//!
//! let seed = FixedSeed(42).next_seed();
//! let mut engine = Mt19937::new(seed);
//! let sampler = NormalSampler::with_mean(0.0).unwrap();
//!
//! let value = sampler.sample(&mut engine);
//! assert!(value.is_finite());
//! ```

pub mod entropy;
pub mod mt19937;
pub mod normal;

pub use entropy::{EntropySource, FixedSeed, OsEntropy, FALLBACK_SEED};
pub use mt19937::Mt19937;
pub use normal::NormalSampler;

#[cfg(test)]
mod tests;
