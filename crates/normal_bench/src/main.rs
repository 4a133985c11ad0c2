//! Normal sampling benchmark entry point.
//!
//! Runs the reference configuration (10^7 draws, mean 0.0, unit standard
//! deviation) seeded from OS entropy and writes the last sample to stdout
//! without a trailing newline. Takes no arguments.
//!
//! Diagnostics are emitted through `tracing` on stderr; set `RUST_LOG=info`
//! to see the throughput summary.

use std::io::{self, Write};

use normal_bench::rng::OsEntropy;
use normal_bench::{Result, SamplingConfig, SamplingLoop};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = SamplingConfig::default();
    let mut sampling = SamplingLoop::from_config(&config, &OsEntropy)?;
    let report = sampling.run_timed(config.iterations())?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", report.last_sample)?;
    stdout.flush()?;
    Ok(())
}
