//! Sampling benchmark configuration.
//!
//! The benchmark has no runtime configuration surface: the binary always
//! runs [`SamplingConfig::default`], which carries the compiled-in
//! constants. The builder exists so tests and benches can shrink the run
//! or pin the seed.

use crate::error::{Result, SamplingError};

/// Iterations in the reference configuration (10^7).
pub const DEFAULT_ITERATIONS: u64 = 10_000_000;

/// Mean of the sampled normal distribution.
pub const DEFAULT_MEAN: f64 = 0.0;

/// Standard deviation of the sampled normal distribution.
pub const DEFAULT_STD_DEV: f64 = 1.0;

/// Immutable benchmark configuration.
///
/// Use [`SamplingConfig::builder`] to construct non-default instances.
///
/// # Examples
///
/// ```rust
/// use normal_bench::config::SamplingConfig;
///
/// let config = SamplingConfig::builder()
///     .iterations(10)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.iterations(), 10);
/// assert_eq!(config.seed(), Some(42));
/// assert_eq!(config.mean(), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SamplingConfig {
    iterations: u64,
    mean: f64,
    std_dev: f64,
    /// Fixed seed; `None` means seed from the entropy source.
    seed: Option<u32>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            mean: DEFAULT_MEAN,
            std_dev: DEFAULT_STD_DEV,
            seed: None,
        }
    }
}

impl SamplingConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplingConfigBuilder {
        SamplingConfigBuilder::default()
    }

    /// Returns the number of samples drawn per run.
    #[inline]
    pub fn iterations(&self) -> u64 {
        self.iterations
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

    /// Returns the fixed seed, if one was set.
    #[inline]
    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - [`SamplingError::ZeroIterations`] if `iterations` is 0
    /// - [`SamplingError::InvalidMean`] if `mean` is not finite
    /// - [`SamplingError::InvalidStdDev`] if `std_dev` is negative or not finite
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(SamplingError::ZeroIterations);
        }
        validate_parameters(self.mean, self.std_dev)
    }
}

/// Checks normal distribution parameters.
pub(crate) fn validate_parameters(mean: f64, std_dev: f64) -> Result<()> {
    if !mean.is_finite() {
        return Err(SamplingError::InvalidMean(mean));
    }
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(SamplingError::InvalidStdDev(std_dev));
    }
    Ok(())
}

/// Builder for [`SamplingConfig`].
///
/// Unset fields fall back to the compiled-in defaults.
#[derive(Clone, Debug, Default)]
pub struct SamplingConfigBuilder {
    iterations: Option<u64>,
    mean: Option<f64>,
    std_dev: Option<f64>,
    seed: Option<u32>,
}

impl SamplingConfigBuilder {
    /// Sets the number of samples drawn per run.
    #[inline]
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Sets the distribution mean.
    #[inline]
    pub fn mean(mut self, mean: f64) -> Self {
        self.mean = Some(mean);
        self
    }

    /// Sets the distribution standard deviation.
    #[inline]
    pub fn std_dev(mut self, std_dev: f64) -> Self {
        self.std_dev = Some(std_dev);
        self
    }

    /// Pins the engine seed instead of drawing one from the OS.
    #[inline]
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration after validation.
    ///
    /// # Errors
    ///
    /// See [`SamplingConfig::validate`].
    pub fn build(self) -> Result<SamplingConfig> {
        let config = SamplingConfig {
            iterations: self.iterations.unwrap_or(DEFAULT_ITERATIONS),
            mean: self.mean.unwrap_or(DEFAULT_MEAN),
            std_dev: self.std_dev.unwrap_or(DEFAULT_STD_DEV),
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
