//! Cipher key engines
//!
//! An engine validates a requested key size and turns randomness into raw key
//! bytes of that size. DES-family engines additionally fix the parity bits and
//! refuse weak keys.

use super::core_types::{DES_BLOCK_LEN, SecureKeyBuffer};
use crate::bits_macro::BitSize;
use crate::entropy::RandomSource;
use crate::{KeyError, Result};
use certkey_common::LoggingTransformer;
use zeroize::Zeroizing;

/// Attempts before a DES-family engine gives up on a source that keeps
/// producing weak keys
pub const MAX_WEAK_KEY_RETRIES: usize = 16;

/// The sixteen DES weak and semi-weak keys, with odd parity applied
pub const DES_WEAK_KEYS: [[u8; DES_BLOCK_LEN]; 16] = [
    // weak keys
    [0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01],
    [0x1F, 0x1F, 0x1F, 0x1F, 0x0E, 0x0E, 0x0E, 0x0E],
    [0xE0, 0xE0, 0xE0, 0xE0, 0xF1, 0xF1, 0xF1, 0xF1],
    [0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0xFE],
    // semi-weak keys
    [0x01, 0xFE, 0x01, 0xFE, 0x01, 0xFE, 0x01, 0xFE],
    [0x1F, 0xE0, 0x1F, 0xE0, 0x0E, 0xF1, 0x0E, 0xF1],
    [0x01, 0xE0, 0x01, 0xE0, 0x01, 0xF1, 0x01, 0xF1],
    [0x1F, 0xFE, 0x1F, 0xFE, 0x0E, 0xFE, 0x0E, 0xFE],
    [0x01, 0x1F, 0x01, 0x1F, 0x01, 0x0E, 0x01, 0x0E],
    [0xE0, 0xFE, 0xE0, 0xFE, 0xF1, 0xFE, 0xF1, 0xFE],
    [0xFE, 0x01, 0xFE, 0x01, 0xFE, 0x01, 0xFE, 0x01],
    [0xE0, 0x1F, 0xE0, 0x1F, 0xF1, 0x0E, 0xF1, 0x0E],
    [0xE0, 0x01, 0xE0, 0x01, 0xF1, 0x01, 0xF1, 0x01],
    [0xFE, 0x1F, 0xFE, 0x1F, 0xFE, 0x0E, 0xFE, 0x0E],
    [0x1F, 0x01, 0x1F, 0x01, 0x0E, 0x01, 0x0E, 0x01],
    [0xFE, 0xE0, 0xFE, 0xE0, 0xFE, 0xF1, 0xFE, 0xF1],
];

/// Engine that produces raw key bytes for an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    /// Uniform random bytes of any positive length
    Uniform,
    /// Single DES: 8 bytes, odd parity, no weak keys
    Des,
    /// Triple DES: 16 or 24 bytes, odd parity, no weak subkeys
    DesEde,
}

impl EngineKind {
    /// Validate `size` and return the key length in bytes
    ///
    /// # Errors
    ///
    /// Returns `InvalidKeySize` if the engine cannot produce keys of that size.
    pub fn key_length(self, algorithm: &str, size: BitSize) -> Result<usize> {
        match self {
            Self::Uniform if size.bits == 0 => Err(KeyError::invalid_key_size(
                algorithm,
                size.bits,
                "key size must be positive",
            )),
            Self::Uniform => Ok(size.to_bytes()),
            Self::Des => match size.bits {
                56 | 64 => Ok(DES_BLOCK_LEN),
                bits => Err(KeyError::invalid_key_size(
                    algorithm,
                    bits,
                    "DES key must be 64 bits long",
                )),
            },
            Self::DesEde => match size.bits {
                112 | 128 => Ok(2 * DES_BLOCK_LEN),
                168 | 192 => Ok(3 * DES_BLOCK_LEN),
                bits => Err(KeyError::invalid_key_size(
                    algorithm,
                    bits,
                    "DESede key must be 192 or 128 bits long",
                )),
            },
        }
    }

    /// Generate `len` bytes of key material from `source`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The randomness source fails
    /// - A DES-family engine only gets weak keys after [`MAX_WEAK_KEY_RETRIES`] attempts
    pub fn generate(
        self,
        len: usize,
        source: &mut dyn RandomSource,
    ) -> Result<Zeroizing<Vec<u8>>> {
        match self {
            Self::Uniform => Ok(SecureKeyBuffer::new(len).fill_from(source)?.into_key_bytes()),
            Self::Des | Self::DesEde => Self::generate_des_family(len, source),
        }
    }

    fn generate_des_family(
        len: usize,
        source: &mut dyn RandomSource,
    ) -> Result<Zeroizing<Vec<u8>>> {
        for _ in 0..MAX_WEAK_KEY_RETRIES {
            let mut buffer = SecureKeyBuffer::new(len).fill_from(source)?;
            set_odd_parity(buffer.as_mut_slice());

            if !contains_weak_key(buffer.as_slice()) {
                return Ok(buffer.into_key_bytes());
            }
            LoggingTransformer::log_degraded(
                "DES engine",
                "discarded a candidate with a weak block",
            );
        }

        Err(KeyError::RandomGeneration(format!(
            "randomness source produced only weak DES keys in {MAX_WEAK_KEY_RETRIES} attempts"
        )))
    }
}

/// Force every byte to odd parity by adjusting its least significant bit
pub fn set_odd_parity(bytes: &mut [u8]) {
    for byte in bytes {
        let high = *byte & 0xFE;
        *byte = high | u8::from(high.count_ones() % 2 == 0);
    }
}

/// Whether every byte has odd parity
#[must_use]
pub fn has_odd_parity(bytes: &[u8]) -> bool {
    bytes.iter().all(|byte| byte.count_ones() % 2 == 1)
}

/// Whether any complete 8-byte block of `key` is a DES weak or semi-weak key
#[must_use]
pub fn contains_weak_key(key: &[u8]) -> bool {
    key.chunks_exact(DES_BLOCK_LEN)
        .any(|block| DES_WEAK_KEYS.iter().any(|weak| weak.as_slice() == block))
}
