//! Serializable generator configuration

use super::generation::KeyMaterialGenerator;
use crate::bits_macro::Bits;
use crate::entropy::{RandomSource, SystemRandom};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Which algorithm to generate keys for and, optionally, an explicit size
///
/// ```json
/// { "algorithm": "DESede", "key_size_bits": 128 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyGeneratorConfig {
    /// Registered algorithm name (case-insensitive)
    pub algorithm: String,
    /// Explicit key size; `None` keeps the algorithm default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_size_bits: Option<u32>,
}

impl KeyGeneratorConfig {
    /// Configuration using the algorithm's default size
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            key_size_bits: None,
        }
    }

    /// Request an explicit key size
    #[must_use]
    pub fn with_key_size(mut self, bits: u32) -> Self {
        self.key_size_bits = Some(bits);
        self
    }

    /// Read a configuration from JSON
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the JSON is malformed or fields are missing.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration to JSON
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Build a generator initialized with `source`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The algorithm is not registered
    /// - The explicit key size is rejected by the algorithm's engine
    pub fn build_with_source(
        &self,
        source: impl RandomSource + 'static,
    ) -> Result<KeyMaterialGenerator> {
        let mut generator = KeyMaterialGenerator::for_algorithm(&self.algorithm)?;
        match self.key_size_bits {
            Some(bits) => generator.initialize_with_size(bits.bits(), source)?,
            None => generator.initialize(source),
        }
        Ok(generator)
    }

    /// Build a generator backed by the default system source
    ///
    /// Without an explicit size the generator is left uninitialized and picks
    /// up its source lazily on the first `generate`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The algorithm is not registered
    /// - The explicit key size is rejected by the algorithm's engine
    /// - The system source fails its health test
    pub fn build(&self) -> Result<KeyMaterialGenerator> {
        match self.key_size_bits {
            Some(_) => self.build_with_source(SystemRandom::new()?),
            None => KeyMaterialGenerator::for_algorithm(&self.algorithm),
        }
    }
}
