//! Generated symmetric key material

use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Raw symmetric key tagged with its algorithm name
///
/// Immutable once constructed. The bytes are wiped when the last copy is
/// dropped; anything the caller copies out is theirs to manage.
#[derive(Clone)]
pub struct SymmetricKeySpec {
    algorithm: String,
    key_bytes: Zeroizing<Vec<u8>>,
}

impl SymmetricKeySpec {
    /// Wrap key bytes for `algorithm`
    pub fn new(algorithm: impl Into<String>, key_bytes: Zeroizing<Vec<u8>>) -> Self {
        Self {
            algorithm: algorithm.into(),
            key_bytes,
        }
    }

    /// Algorithm name the key was generated for
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// The raw key bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.key_bytes
    }

    /// Key length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.key_bytes.len()
    }

    /// Whether the key holds no bytes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key_bytes.is_empty()
    }

    /// Key size in bits (always `len() * 8`)
    #[must_use]
    pub fn key_size_bits(&self) -> usize {
        self.key_bytes.len() * 8
    }
}

impl PartialEq for SymmetricKeySpec {
    fn eq(&self, other: &Self) -> bool {
        self.algorithm == other.algorithm
            && bool::from(self.key_bytes.as_slice().ct_eq(other.key_bytes.as_slice()))
    }
}

impl Eq for SymmetricKeySpec {}

impl fmt::Debug for SymmetricKeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricKeySpec")
            .field("algorithm", &self.algorithm)
            .field("key_size_bits", &self.key_size_bits())
            .finish_non_exhaustive()
    }
}
