//! # Certkey Symmetric Key Generation
//!
//! Secret key generation for a fixed table of block-cipher and HMAC
//! algorithms.
//!
//! ## Features
//!
//! - **Registry**: algorithm name → default size, engine, post-processing policy
//! - **Engines**: uniform random keys, DES and triple-DES keys with odd parity
//!   and weak-key rejection
//! - **Pluggable randomness**: any `rand` CSPRNG, or a health-checked system source
//! - **Two-key triple-DES**: default-size `DESede` keys come out in ABA layout
//!
//! ## Quick Start
//!
//! ```rust
//! use certkey_key::{KeyMaterialGenerator, bits_macro::Bits, entropy::SystemRandom};
//!
//! # fn main() -> certkey_key::Result<()> {
//! let mut generator = KeyMaterialGenerator::for_algorithm("DESede")?;
//!
//! // No explicit size: 24 bytes, third block repeats the first
//! let key = generator.generate()?;
//! assert_eq!(key.as_bytes()[16..24], key.as_bytes()[0..8]);
//!
//! // Explicit size: raw engine output
//! generator.initialize_with_size(192u32.bits(), SystemRandom::new()?)?;
//! let key = generator.generate()?;
//! assert_eq!(key.len(), 24);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod bits_macro;
pub mod entropy;
pub mod error;

// Re-export core types
pub use api::{
    AlgorithmEntry, AlgorithmParameters, EngineKind, KeyGeneratorConfig, KeyMaterialGenerator,
    KeyPolicy, KeySizeState, SymmetricKeySpec,
};
pub use entropy::{CryptoRngSource, RandomSource, SystemRandom};
pub use error::{KeyError, Result};

/// Canonical names of every registered algorithm
pub fn supported_algorithms() -> impl Iterator<Item = &'static str> {
    api::key_generator::supported_algorithms()
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        KeyError, KeyMaterialGenerator, RandomSource, Result, SymmetricKeySpec, SystemRandom,
        bits_macro::{BitSize, Bits},
    };
}
