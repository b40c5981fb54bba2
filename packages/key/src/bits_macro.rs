//! Bit size helpers for type-safe key sizes

/// Type-safe bit size representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitSize {
    /// The number of bits
    pub bits: u32,
}

impl BitSize {
    /// Number of whole bytes needed to hold this many bits
    #[must_use]
    pub const fn to_bytes(&self) -> usize {
        self.bits.div_ceil(8) as usize
    }
}

impl From<BitSize> for u32 {
    fn from(size: BitSize) -> Self {
        size.bits
    }
}

/// Extension trait for bit conversion
pub trait Bits {
    /// Convert to `BitSize`
    fn bits(self) -> BitSize;
}

impl Bits for u32 {
    fn bits(self) -> BitSize {
        BitSize { bits: self }
    }
}
