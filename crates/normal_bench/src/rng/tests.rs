//! Statistical and property-based tests for the RNG module.
//!
//! - Engine determinism for arbitrary seeds
//! - Normal moments for standard and shifted distributions
//! - Uniformity of raw engine output

use super::*;
use proptest::prelude::*;

/// Sample mean and standard deviation of `values`.
fn moments(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, variance.sqrt())
}

fn draw(seed: u32, mean: f64, std_dev: f64, count: usize) -> Vec<f64> {
    let mut engine = Mt19937::new(seed);
    let sampler = NormalSampler::new(mean, std_dev).unwrap();
    (0..count).map(|_| sampler.sample(&mut engine)).collect()
}

#[test]
fn test_standard_normal_moments() {
    let samples = draw(42, 0.0, 1.0, 200_000);
    let (mean, std_dev) = moments(&samples);

    assert!(mean.abs() < 0.05, "Mean {:.4} is too far from 0", mean);
    assert!(
        (std_dev - 1.0).abs() < 0.05,
        "Std dev {:.4} is too far from 1",
        std_dev
    );
}

#[test]
fn test_shifted_mean_is_honoured() {
    let samples = draw(7, 10.0, 1.0, 100_000);
    let (mean, std_dev) = moments(&samples);

    approx::assert_abs_diff_eq!(mean, 10.0, epsilon = 0.05);
    approx::assert_abs_diff_eq!(std_dev, 1.0, epsilon = 0.05);
}

#[test]
fn test_scaled_std_dev_is_honoured() {
    let samples = draw(11, 0.0, 3.0, 100_000);
    let (mean, std_dev) = moments(&samples);

    approx::assert_abs_diff_eq!(mean, 0.0, epsilon = 0.1);
    approx::assert_abs_diff_eq!(std_dev, 3.0, epsilon = 0.1);
}

#[test]
fn test_symmetric_tails() {
    let samples = draw(2024, 0.0, 1.0, 100_000);
    let below = samples.iter().filter(|&&x| x < -1.96).count() as f64;
    let above = samples.iter().filter(|&&x| x > 1.96).count() as f64;
    let n = samples.len() as f64;

    // Each tail holds ~2.5% of the mass
    approx::assert_abs_diff_eq!(below / n, 0.025, epsilon = 0.005);
    approx::assert_abs_diff_eq!(above / n, 0.025, epsilon = 0.005);
}

#[test]
fn test_raw_output_covers_range() {
    let mut engine = Mt19937::new(1);
    let buckets = 16usize;
    let draws = 160_000usize;
    let mut counts = vec![0usize; buckets];

    for _ in 0..draws {
        counts[(engine.next_raw() >> 28) as usize] += 1;
    }

    let expected = draws / buckets;
    for (bucket, &count) in counts.iter().enumerate() {
        let deviation = (count as f64 - expected as f64).abs() / expected as f64;
        assert!(
            deviation < 0.05,
            "Bucket {} holds {} values, expected ~{}",
            bucket,
            count,
            expected
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Two engines from the same seed agree on every draw.
    #[test]
    fn prop_engine_determinism(seed in any::<u32>(), count in 1..2_000usize) {
        let mut a = Mt19937::new(seed);
        let mut b = Mt19937::new(seed);
        for _ in 0..count {
            prop_assert_eq!(a.next_raw(), b.next_raw());
        }
    }

    /// Normal sampling is reproducible from the seed alone.
    #[test]
    fn prop_sample_determinism(seed in any::<u32>(), mean in -100.0..100.0f64) {
        prop_assert_eq!(draw(seed, mean, 1.0, 64), draw(seed, mean, 1.0, 64));
    }

    /// Different seeds give different raw sequences.
    #[test]
    fn prop_different_seeds_diverge(seed1 in any::<u32>(), seed2 in any::<u32>()) {
        prop_assume!(seed1 != seed2);
        let mut a = Mt19937::new(seed1);
        let mut b = Mt19937::new(seed2);
        let seq_a: Vec<u32> = (0..8).map(|_| a.next_raw()).collect();
        let seq_b: Vec<u32> = (0..8).map(|_| b.next_raw()).collect();
        prop_assert_ne!(seq_a, seq_b);
    }
}
