//! Symmetric key generation
//!
//! - `registry`: algorithm table (name, default size, engine, policy)
//! - `engines`: size validation and raw key byte production
//! - `generation`: generator state and initialization
//! - `symmetric`: key generation and post-processing
//! - `config`: serde-backed generator configuration

pub mod config;
pub mod core_types;
pub mod engines;
pub mod generation;
pub mod registry;
pub mod symmetric;

pub use config::KeyGeneratorConfig;
pub use core_types::{KeyPolicy, KeySizeState};
pub use engines::EngineKind;
pub use generation::{AlgorithmParameters, KeyMaterialGenerator};
pub use registry::{ALGORITHMS, AlgorithmEntry, lookup, supported_algorithms};
