//! Public key generation API

pub mod key_generator;
pub mod symmetric_key;

pub use key_generator::{
    AlgorithmEntry, AlgorithmParameters, EngineKind, KeyGeneratorConfig, KeyMaterialGenerator,
    KeyPolicy, KeySizeState,
};
pub use symmetric_key::SymmetricKeySpec;
