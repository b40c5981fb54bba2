//! Algorithm registry
//!
//! Every supported algorithm is one row: name, default size, engine and the
//! post-processing policy applied to default-size keys.

use super::core_types::KeyPolicy;
use super::engines::EngineKind;
use crate::bits_macro::{BitSize, Bits};

/// One registered key algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmEntry {
    /// Canonical algorithm name attached to generated keys
    pub name: &'static str,
    /// Size used when no explicit size is requested, in bits
    pub default_bits: u32,
    /// Engine producing the raw key bytes
    pub engine: EngineKind,
    /// Post-processing applied after generation
    pub policy: KeyPolicy,
}

impl AlgorithmEntry {
    const fn new(name: &'static str, default_bits: u32, engine: EngineKind, policy: KeyPolicy) -> Self {
        Self {
            name,
            default_bits,
            engine,
            policy,
        }
    }

    /// Default key size as a [`BitSize`]
    #[must_use]
    pub fn default_size(&self) -> BitSize {
        self.default_bits.bits()
    }
}

/// All registered algorithms
pub static ALGORITHMS: &[AlgorithmEntry] = &[
    AlgorithmEntry::new("DES", 64, EngineKind::Des, KeyPolicy::None),
    AlgorithmEntry::new("DESede", 192, EngineKind::DesEde, KeyPolicy::RepeatFirstHalf),
    AlgorithmEntry::new("DESede3", 192, EngineKind::DesEde, KeyPolicy::None),
    AlgorithmEntry::new("Blowfish", 128, EngineKind::Uniform, KeyPolicy::None),
    AlgorithmEntry::new("RC4", 128, EngineKind::Uniform, KeyPolicy::None),
    AlgorithmEntry::new("HMACMD5", 128, EngineKind::Uniform, KeyPolicy::None),
    AlgorithmEntry::new("HMACSHA1", 160, EngineKind::Uniform, KeyPolicy::None),
    AlgorithmEntry::new("HMACSHA256", 256, EngineKind::Uniform, KeyPolicy::None),
    AlgorithmEntry::new("HMACSHA384", 384, EngineKind::Uniform, KeyPolicy::None),
    AlgorithmEntry::new("HMACSHA512", 512, EngineKind::Uniform, KeyPolicy::None),
];

/// Find an algorithm by name, ignoring ASCII case
#[must_use]
pub fn lookup(name: &str) -> Option<&'static AlgorithmEntry> {
    ALGORITHMS
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
}

/// Canonical names of all registered algorithms
pub fn supported_algorithms() -> impl Iterator<Item = &'static str> {
    ALGORITHMS.iter().map(|entry| entry.name)
}
