//! Key Material Generator
//!
//! Holds the per-instance state: which algorithm, which size, which randomness
//! source, and whether a size was ever explicitly requested. A generator is
//! owned by one caller; share it across threads only behind external locking.

use super::core_types::KeySizeState;
use super::registry::{self, AlgorithmEntry};
use crate::bits_macro::BitSize;
use crate::entropy::{DefaultSourceFactory, RandomSource, system_random};
use crate::{KeyError, Result};
use std::fmt;

/// Algorithm-specific parameters (IVs, effective key bits, ...) in encoded form
///
/// Generators only accept size-based initialization; handing them parameters
/// always fails with `UnsupportedInitialization`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmParameters {
    name: String,
    encoded: Vec<u8>,
}

impl AlgorithmParameters {
    /// Create parameters named `name` with their DER encoding
    pub fn new(name: impl Into<String>, encoded: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            encoded: encoded.into(),
        }
    }

    /// Parameter set name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Encoded parameter bytes
    #[must_use]
    pub fn encoded(&self) -> &[u8] {
        &self.encoded
    }
}

/// Generator of secret key bytes for one registered algorithm
pub struct KeyMaterialGenerator {
    pub(crate) entry: &'static AlgorithmEntry,
    pub(crate) state: KeySizeState,
    pub(crate) key_size: BitSize,
    pub(crate) source: Option<Box<dyn RandomSource>>,
    pub(crate) default_source: DefaultSourceFactory,
}

impl KeyMaterialGenerator {
    /// Create an uninitialized generator for a registered algorithm
    ///
    /// # Errors
    ///
    /// Returns `UnknownAlgorithm` if `algorithm` is not in the registry.
    pub fn for_algorithm(algorithm: &str) -> Result<Self> {
        registry::lookup(algorithm)
            .map(Self::from_entry)
            .ok_or_else(|| KeyError::UnknownAlgorithm(algorithm.to_string()))
    }

    /// Create an uninitialized generator from a registry entry
    #[must_use]
    pub fn from_entry(entry: &'static AlgorithmEntry) -> Self {
        Self {
            entry,
            state: KeySizeState::Uninitialized,
            key_size: entry.default_size(),
            source: None,
            default_source: system_random,
        }
    }

    /// Replace the constructor used when `generate` runs before any initialization
    #[must_use]
    pub fn with_default_source(mut self, factory: DefaultSourceFactory) -> Self {
        self.default_source = factory;
        self
    }

    /// Canonical algorithm name
    #[must_use]
    pub fn algorithm(&self) -> &'static str {
        self.entry.name
    }

    /// Registry entry backing this generator
    #[must_use]
    pub fn entry(&self) -> &'static AlgorithmEntry {
        self.entry
    }

    /// Current initialization state
    #[must_use]
    pub fn state(&self) -> KeySizeState {
        self.state
    }

    /// Size the next key will be generated with
    #[must_use]
    pub fn key_size(&self) -> BitSize {
        self.key_size
    }

    /// Initialize with the algorithm's default size and the given source
    pub fn initialize(&mut self, source: impl RandomSource + 'static) {
        self.adopt_default(Box::new(source));
    }

    /// Initialize with an explicit size and the given source
    ///
    /// The explicit request is remembered for the lifetime of the generator.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKeySize` if the algorithm's engine rejects `size`; the
    /// generator is left exactly as it was.
    pub fn initialize_with_size(
        &mut self,
        size: BitSize,
        source: impl RandomSource + 'static,
    ) -> Result<()> {
        self.entry.engine.key_length(self.entry.name, size)?;

        self.key_size = size;
        self.source = Some(Box::new(source));
        self.state = KeySizeState::ExplicitSize(size.bits);
        log::debug!(
            "{} generator initialized with explicit size {} bits",
            self.entry.name,
            size.bits
        );
        Ok(())
    }

    /// Parameter-based initialization, which no generator supports
    ///
    /// # Errors
    ///
    /// Always returns `UnsupportedInitialization`.
    pub fn initialize_with_parameters(
        &mut self,
        parameters: &AlgorithmParameters,
        _source: impl RandomSource + 'static,
    ) -> Result<()> {
        Err(KeyError::UnsupportedInitialization(format!(
            "{} generators cannot be initialized from {} parameters",
            self.entry.name,
            parameters.name()
        )))
    }

    pub(crate) fn adopt_default(&mut self, source: Box<dyn RandomSource>) {
        self.key_size = self.entry.default_size();
        self.source = Some(source);
        self.state = self.state.with_default(self.entry.default_bits);
        log::debug!(
            "{} generator initialized with default size {} bits",
            self.entry.name,
            self.key_size.bits
        );
    }
}

impl fmt::Debug for KeyMaterialGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterialGenerator")
            .field("algorithm", &self.entry.name)
            .field("state", &self.state)
            .field("key_size", &self.key_size)
            .field("has_source", &self.source.is_some())
            .finish_non_exhaustive()
    }
}
