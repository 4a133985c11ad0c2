//! Normal (Gaussian) transform over engine output.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use crate::config::{validate_parameters, DEFAULT_STD_DEV};
use crate::error::{Result, SamplingError};

/// Maps uniform engine output to Normal(mean, std_dev) variates.
///
/// Uses the ZIGNOR Ziggurat algorithm via `rand_distr::Normal`, which
/// consumes one or more 64-bit draws per sample. The transform is stateless:
/// identical engine states yield identical samples.
///
/// # Algorithm Reference
///
/// - Marsaglia, G. & Tsang, W. W. (2000). "The Ziggurat Method for
///   Generating Random Variables". Journal of Statistical Software.
#[derive(Clone, Copy, Debug)]
pub struct NormalSampler {
    normal: Normal<f64>,
    mean: f64,
    std_dev: f64,
}

impl NormalSampler {
    /// Creates a sampler for Normal(`mean`, `std_dev`).
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::InvalidMean`](crate::SamplingError::InvalidMean)
    /// or [`SamplingError::InvalidStdDev`](crate::SamplingError::InvalidStdDev)
    /// for non-finite or negative parameters.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        validate_parameters(mean, std_dev)?;
        // Unreachable once validated
        let normal =
            Normal::new(mean, std_dev).map_err(|_| SamplingError::InvalidStdDev(std_dev))?;
        debug!(mean, std_dev, "normal sampler initialised");
        Ok(Self {
            normal,
            mean,
            std_dev,
        })
    }

    /// Creates a sampler with the given mean and unit standard deviation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use normal_bench::rng::NormalSampler;
    ///
    /// let sampler = NormalSampler::with_mean(2.0).unwrap();
    /// assert_eq!(sampler.mean(), 2.0);
    /// assert_eq!(sampler.std_dev(), 1.0);
    /// ```
    pub fn with_mean(mean: f64) -> Result<Self> {
        Self::new(mean, DEFAULT_STD_DEV)
    }

    /// Returns the distribution mean.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the distribution standard deviation.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Draws one sample, advancing `rng`.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.normal.sample(rng)
    }
}
