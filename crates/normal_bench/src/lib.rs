//! # normal_bench
//!
//! Throughput microbenchmark for normal (Gaussian) random number
//! generation.
//!
//! A [`SamplingLoop`] seeds an MT19937 engine once from an
//! [`EntropySource`](rng::EntropySource), draws a fixed number of samples
//! through a [`NormalSampler`](rng::NormalSampler) and reports the last
//! sample drawn.
//!
//! ## Modules
//!
//! - [`config`]: compiled-in constants and [`SamplingConfig`]
//! - [`error`]: [`SamplingError`] and the crate `Result` alias
//! - [`rng`]: entropy sources, the MT19937 engine and the normal transform
//! - [`sampling`]: the benchmark loop and its timing report
//!
//! ## Example
//!
//! ```rust
//! use normal_bench::rng::FixedSeed;
//! use normal_bench::{SamplingConfig, SamplingLoop};
//!
//! let config = SamplingConfig::builder().iterations(1_000).build().unwrap();
//! let mut sampling = SamplingLoop::from_config(&config, &FixedSeed(42)).unwrap();
//!
//! let last = sampling.run(config.iterations()).unwrap();
//! assert!(last.is_finite());
//! ```

pub mod config;
pub mod error;
pub mod rng;
pub mod sampling;

pub use config::{SamplingConfig, SamplingConfigBuilder};
pub use error::{Result, SamplingError};
pub use sampling::{SamplingLoop, SamplingReport};
