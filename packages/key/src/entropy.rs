//! Randomness sources for key generation
//!
//! A generator pulls its key bytes from a [`RandomSource`]. Callers can plug in
//! any `rand` CSPRNG through [`CryptoRngSource`]; when nothing is supplied the
//! generator falls back to [`SystemRandom`], the thread-local CSPRNG guarded by
//! a start-up health test.

use crate::{KeyError, Result};
use rand::{CryptoRng, RngCore};

/// Minimum accepted min-entropy estimate (bits per byte) for the health test
pub const MIN_ENTROPY_THRESHOLD: f64 = 6.0;

/// Number of bytes sampled by the start-up health test
pub const HEALTH_SAMPLE_LEN: usize = 4096;

/// Longest run of identical bytes tolerated in the health sample
pub const REPETITION_CUTOFF: usize = 5;

/// Source of cryptographically secure, uniformly distributed bytes
pub trait RandomSource: Send {
    /// Fill `dest` entirely with random bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying generator cannot produce output.
    fn fill(&mut self, dest: &mut [u8]) -> Result<()>;
}

/// Adapter exposing any `rand` CSPRNG as a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct CryptoRngSource<R> {
    rng: R,
}

impl<R: CryptoRng + Send> CryptoRngSource<R> {
    /// Wrap a cryptographically secure generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Unwrap the inner generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: CryptoRng + Send> RandomSource for CryptoRngSource<R> {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.rng.fill_bytes(dest);
        Ok(())
    }
}

/// Default randomness source: the thread-local CSPRNG, health-checked once
#[derive(Debug, Clone)]
pub struct SystemRandom {
    estimated_entropy: f64,
}

impl SystemRandom {
    /// Create the source and run the health test on a fresh sample
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The most-common-value estimate is below [`MIN_ENTROPY_THRESHOLD`]
    /// - The sample contains a run of identical bytes reaching [`REPETITION_CUTOFF`]
    pub fn new() -> Result<Self> {
        let mut sample = vec![0u8; HEALTH_SAMPLE_LEN];
        rand::rng().fill_bytes(&mut sample);
        let estimated_entropy = Self::health_check(&sample)?;
        Ok(Self { estimated_entropy })
    }

    /// Min-entropy estimate (bits per byte) observed by the health test
    #[must_use]
    pub fn estimated_entropy(&self) -> f64 {
        self.estimated_entropy
    }

    /// Run the health test over `samples`, returning the entropy estimate
    ///
    /// # Errors
    ///
    /// Returns `InsufficientEntropy` when either test fails.
    pub fn health_check(samples: &[u8]) -> Result<f64> {
        let longest = Self::longest_run(samples);
        if longest >= REPETITION_CUTOFF {
            return Err(KeyError::InsufficientEntropy(format!(
                "repetition count test failed: {longest} identical bytes in a row"
            )));
        }

        let entropy = Self::mcv_estimate(samples);
        if entropy < MIN_ENTROPY_THRESHOLD {
            return Err(KeyError::InsufficientEntropy(format!(
                "min-entropy estimate {entropy:.2} bits/byte below {MIN_ENTROPY_THRESHOLD}"
            )));
        }

        Ok(entropy)
    }

    /// Most Common Value estimate - NIST SP 800-90B Section 6.3.1
    #[must_use]
    pub fn mcv_estimate(samples: &[u8]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }

        let mut counts = [0u32; 256];
        for &byte in samples {
            counts[byte as usize] += 1;
        }

        let max_count = counts.iter().copied().max().unwrap_or(0);
        #[allow(clippy::cast_precision_loss)]
        let p_max = f64::from(max_count) / samples.len() as f64;
        -p_max.log2()
    }

    /// Longest run of identical consecutive bytes - NIST SP 800-90B Section 4.4.1
    fn longest_run(samples: &[u8]) -> usize {
        let mut longest = 0;
        let mut run = 0;
        let mut previous = None;

        for &byte in samples {
            if previous == Some(byte) {
                run += 1;
            } else {
                run = 1;
                previous = Some(byte);
            }
            longest = longest.max(run);
        }

        longest
    }
}

impl RandomSource for SystemRandom {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        rand::rng().fill_bytes(dest);
        Ok(())
    }
}

/// Constructor for the source a generator adopts when `generate` runs first
pub type DefaultSourceFactory = fn() -> Result<Box<dyn RandomSource>>;

/// The built-in [`DefaultSourceFactory`]: a health-checked [`SystemRandom`]
///
/// # Errors
///
/// Propagates the health test failure from [`SystemRandom::new`].
pub fn system_random() -> Result<Box<dyn RandomSource>> {
    Ok(Box::new(SystemRandom::new()?))
}
