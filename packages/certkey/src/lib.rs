//! # Certkey
//!
//! Key material generation for the DES family and HMAC algorithms, and
//! decoding of X.509 alternative names.
//!
//! ## Features
//!
//! - `key` - `KeyMaterialGenerator` with the two-key triple-DES policy
//! - `x509` - SubjectAltName / IssuerAltName decoding
//! - `full` - both (default)
//!
//! ```toml
//! [dependencies]
//! certkey = { version = "0.1", default-features = false, features = ["x509"] }
//! ```
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "full")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use certkey::{Certkey, GeneralNameTag};
//!
//! certkey::LoggingTransformer::init();
//!
//! // Two-key triple DES: the third block repeats the first
//! let key = Certkey::generate_key("DESede")?;
//! assert_eq!(key.len(), 24);
//! assert_eq!(key.as_bytes()[..8], key.as_bytes()[16..]);
//!
//! // OCTET STRING { SEQUENCE { [7] 192.0.2.1 } }
//! let encoded = [0x04, 0x08, 0x30, 0x06, 0x87, 0x04, 192, 0, 2, 1];
//! let names = Certkey::alternative_names(Some(&encoded))?;
//! assert_eq!(names[0].tag(), GeneralNameTag::IpAddress);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "full"))]
//! # fn main() {}
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod master;

pub use master::Certkey;

// === Core Re-exports ===

pub use certkey_common::LoggingTransformer;

// === Key Re-exports ===

#[cfg(feature = "key")]
#[cfg_attr(docsrs, doc(cfg(feature = "key")))]
pub use certkey_key::{
    AlgorithmParameters, CryptoRngSource, KeyError, KeyGeneratorConfig, KeyMaterialGenerator,
    KeyPolicy, KeySizeState, RandomSource, SymmetricKeySpec, SystemRandom,
};

#[cfg(feature = "key")]
#[cfg_attr(docsrs, doc(cfg(feature = "key")))]
pub use certkey_key::bits_macro::{BitSize, Bits};

#[cfg(feature = "key")]
#[cfg_attr(docsrs, doc(cfg(feature = "key")))]
pub use certkey_key as key;

// === X.509 Re-exports ===

#[cfg(feature = "x509")]
#[cfg_attr(docsrs, doc(cfg(feature = "x509")))]
pub use certkey_x509::{
    AlternativeNames, CertificateParsingError, GeneralNameEntry, GeneralNameTag,
    GeneralNameValue,
};

#[cfg(feature = "x509")]
#[cfg_attr(docsrs, doc(cfg(feature = "x509")))]
pub use certkey_x509 as x509;
