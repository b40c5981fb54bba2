//! Error handling for key material generation

use thiserror::Error;

/// Key-specific errors
#[derive(Debug, Error)]
pub enum KeyError {
    /// Parameter-based initialization was requested; only size-based
    /// and source-only initialization exist
    #[error("Unsupported initialization: {0}")]
    UnsupportedInitialization(String),

    /// The engine behind an algorithm rejected the requested key size
    #[error("Invalid key size for {algorithm}: {bits} bits ({reason})")]
    InvalidKeySize {
        /// Algorithm the size was requested for
        algorithm: String,
        /// Requested size in bits
        bits: u32,
        /// Engine-specific explanation
        reason: String,
    },

    /// No registry entry exists for the algorithm name
    #[error("Unknown key algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Random number generation failed
    #[error("Random number generation failed: {0}")]
    RandomGeneration(String),

    /// Insufficient entropy for secure operation
    #[error("Insufficient entropy: {0}")]
    InsufficientEntropy(String),

    /// Generator configuration could not be read
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl KeyError {
    /// Create an `InvalidKeySize` error
    pub fn invalid_key_size(algorithm: &str, bits: u32, reason: impl Into<String>) -> Self {
        Self::InvalidKeySize {
            algorithm: algorithm.to_string(),
            bits,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for KeyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}

/// Result type for key operations
pub type Result<T> = std::result::Result<T, KeyError>;
