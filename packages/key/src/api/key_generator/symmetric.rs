//! Symmetric key generation implementation
//!
//! Draws raw bytes from the configured engine and applies the algorithm's
//! post-processing policy to that fresh buffer only.

use super::generation::KeyMaterialGenerator;
use crate::api::symmetric_key::SymmetricKeySpec;
use crate::{KeyError, Result};
use certkey_common::LoggingTransformer;

impl KeyMaterialGenerator {
    /// Generate a new, independent key
    ///
    /// An uninitialized generator first initializes itself with the algorithm
    /// default size and a source from its default-source factory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The default randomness source cannot be constructed
    /// - The randomness source fails
    /// - The engine only produces weak keys
    pub fn generate(&mut self) -> Result<SymmetricKeySpec> {
        let result = self.generate_internal();
        if let Err(e) = &result {
            LoggingTransformer::log_crypto_error("key generation", e);
        }
        result
    }

    fn generate_internal(&mut self) -> Result<SymmetricKeySpec> {
        if !self.state.is_initialized() {
            let source = (self.default_source)()?;
            self.adopt_default(source);
        }

        let entry = self.entry;
        let len = entry.engine.key_length(entry.name, self.key_size)?;
        let source = self
            .source
            .as_deref_mut()
            .ok_or_else(|| {
                KeyError::RandomGeneration("no randomness source configured".to_string())
            })?;

        let mut key_bytes = entry.engine.generate(len, source)?;
        let aba_applied = entry.policy.apply(self.state, &mut key_bytes);

        LoggingTransformer::log_key_generation(entry.name, key_bytes.len() * 8, aba_applied);
        Ok(SymmetricKeySpec::new(entry.name, key_bytes))
    }
}
