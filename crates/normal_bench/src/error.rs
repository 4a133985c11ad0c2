//! Error types for the sampling benchmark.
//!
//! The sampling core itself is total; these errors only arise when a
//! configuration or distribution is constructed from invalid input, or when
//! the final report cannot be written.

use thiserror::Error;

/// Sampling benchmark error.
#[derive(Debug, Error)]
pub enum SamplingError {
    /// A run was requested with zero iterations, so no sample exists to report.
    #[error("Iteration count must be at least 1")]
    ZeroIterations,

    /// The distribution mean is NaN or infinite.
    #[error("Invalid mean {0}: must be finite")]
    InvalidMean(f64),

    /// The distribution standard deviation is negative, NaN or infinite.
    #[error("Invalid standard deviation {0}: must be finite and non-negative")]
    InvalidStdDev(f64),

    /// Writing the report to the output stream failed.
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SamplingError>;
