//! The benchmark loop.
//!
//! [`SamplingLoop`] owns the engine and the normal transform. A run draws a
//! fixed number of samples and reports only the last one; earlier samples
//! are overwritten in place and never observed. The loop body is the sample
//! call alone, so per-iteration cost is generation cost.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::SamplingConfig;
use crate::error::{Result, SamplingError};
use crate::rng::{EntropySource, Mt19937, NormalSampler};

/// Outcome of a timed run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingReport {
    /// The last sample drawn.
    pub last_sample: f64,
    /// Number of samples drawn.
    pub iterations: u64,
    /// Wall-clock time spent in the loop.
    pub elapsed: Duration,
}

impl SamplingReport {
    /// Samples generated per second; infinite if the clock did not advance.
    pub fn samples_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.iterations as f64 / secs
        } else {
            f64::INFINITY
        }
    }
}

/// Drives repeated normal sampling over an exclusively owned engine.
///
/// # Examples
///
/// ```rust
/// use normal_bench::rng::NormalSampler;
/// use normal_bench::SamplingLoop;
///
/// let sampler = NormalSampler::with_mean(0.0).unwrap();
/// let mut sampling = SamplingLoop::new(42, sampler);
///
/// let last = sampling.run(10).unwrap();
/// assert!(last.is_finite());
/// ```
#[derive(Clone, Debug)]
pub struct SamplingLoop {
    engine: Mt19937,
    sampler: NormalSampler,
    /// Seed the engine was built from (kept for reproducibility tracking).
    seed: u32,
}

impl SamplingLoop {
    /// Creates a loop whose engine is seeded with `seed`.
    pub fn new(seed: u32, sampler: NormalSampler) -> Self {
        debug!(seed, "engine seeded");
        Self {
            engine: Mt19937::new(seed),
            sampler,
            seed,
        }
    }

    /// Creates a loop seeded by a single draw from `source`.
    pub fn from_entropy<S: EntropySource + ?Sized>(source: &S, sampler: NormalSampler) -> Self {
        Self::new(source.next_seed(), sampler)
    }

    /// Creates a loop from `config`.
    ///
    /// A fixed seed in the configuration takes precedence; otherwise `source`
    /// is consulted once.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured distribution parameters are invalid.
    pub fn from_config<S: EntropySource + ?Sized>(
        config: &SamplingConfig,
        source: &S,
    ) -> Result<Self> {
        let sampler = NormalSampler::new(config.mean(), config.std_dev())?;
        let seed = match config.seed() {
            Some(seed) => seed,
            None => source.next_seed(),
        };
        Ok(Self::new(seed, sampler))
    }

    /// Returns the seed the engine was constructed with.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns the normal transform in use.
    #[inline]
    pub fn sampler(&self) -> &NormalSampler {
        &self.sampler
    }

    /// Draws `iterations` samples and returns the last one.
    ///
    /// The engine keeps its state between runs, so consecutive runs continue
    /// the same sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::ZeroIterations`] when `iterations` is 0:
    /// no sample exists to report.
    pub fn run(&mut self, iterations: u64) -> Result<f64> {
        if iterations == 0 {
            return Err(SamplingError::ZeroIterations);
        }

        let mut last = self.sampler.sample(&mut self.engine);
        for _ in 1..iterations {
            last = self.sampler.sample(&mut self.engine);
        }
        Ok(last)
    }

    /// Like [`run`](Self::run), additionally timing the loop.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub fn run_timed(&mut self, iterations: u64) -> Result<SamplingReport> {
        let start = Instant::now();
        let last_sample = self.run(iterations)?;
        let report = SamplingReport {
            last_sample,
            iterations,
            elapsed: start.elapsed(),
        };

        info!(
            iterations,
            seed = self.seed,
            elapsed_ms = report.elapsed.as_secs_f64() * 1e3,
            samples_per_sec = report.samples_per_sec(),
            "sampling run complete"
        );
        Ok(report)
    }
}
