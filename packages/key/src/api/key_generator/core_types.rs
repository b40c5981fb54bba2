//! Core Types for Key Generation
//!
//! Secure buffers, the initialization state machine and the post-processing
//! policy applied after an engine produces raw key bytes.

use crate::entropy::RandomSource;
use crate::Result;
use zeroize::Zeroizing;

/// Length of one DES block / subkey in bytes
pub const DES_BLOCK_LEN: usize = 8;

/// Secure key buffer that automatically zeroizes on drop
/// Prevents key material from remaining in memory
#[derive(Debug)]
pub(crate) struct SecureKeyBuffer {
    data: Zeroizing<Vec<u8>>,
}

impl SecureKeyBuffer {
    /// Create a new zero-filled buffer of `size` bytes
    #[inline]
    pub fn new(size: usize) -> Self {
        Self {
            data: Zeroizing::new(vec![0u8; size]),
        }
    }

    /// Overwrite the whole buffer with bytes from `source`
    #[inline]
    pub fn fill_from(mut self, source: &mut dyn RandomSource) -> Result<Self> {
        source.fill(&mut self.data)?;
        Ok(self)
    }

    /// Mutable view for engines that post-process the random bytes
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Hand the bytes over without an intermediate unprotected copy
    #[inline]
    pub fn into_key_bytes(self) -> Zeroizing<Vec<u8>> {
        self.data
    }
}

/// Initialization state of a generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySizeState {
    /// Nothing configured yet; `generate` initializes with defaults
    Uninitialized,
    /// Initialized with the algorithm's default size
    DefaultSize,
    /// A size was explicitly requested; holds the current size in bits
    ExplicitSize(u32),
}

impl KeySizeState {
    /// Whether any initialization has happened
    #[must_use]
    pub const fn is_initialized(self) -> bool {
        !matches!(self, Self::Uninitialized)
    }

    /// Whether an explicit size has been requested at some point
    #[must_use]
    pub const fn is_explicit(self) -> bool {
        matches!(self, Self::ExplicitSize(_))
    }

    /// State after a source-only initialization with `default_bits`
    ///
    /// An earlier explicit request stays explicit.
    #[must_use]
    pub const fn with_default(self, default_bits: u32) -> Self {
        match self {
            Self::ExplicitSize(_) => Self::ExplicitSize(default_bits),
            Self::Uninitialized | Self::DefaultSize => Self::DefaultSize,
        }
    }
}

/// Post-processing applied to freshly generated key bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPolicy {
    /// Return the engine output unchanged
    None,
    /// Two-key triple-DES in ABA form: the third 8-byte block repeats the
    /// first, but only when no explicit size was ever requested
    RepeatFirstHalf,
}

impl KeyPolicy {
    /// Whether the policy rewrites keys generated in `state`
    #[must_use]
    pub const fn applies_to(self, state: KeySizeState) -> bool {
        matches!((self, state), (Self::RepeatFirstHalf, KeySizeState::DefaultSize))
    }

    /// Apply the policy in place to a fresh key, returning whether it fired
    pub(crate) fn apply(self, state: KeySizeState, key: &mut [u8]) -> bool {
        if !self.applies_to(state) || key.len() < 3 * DES_BLOCK_LEN {
            return false;
        }

        key.copy_within(0..DES_BLOCK_LEN, 2 * DES_BLOCK_LEN);
        true
    }
}
