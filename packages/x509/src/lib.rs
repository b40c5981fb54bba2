//! X.509 alternative-name decoding
//!
//! Turns the encoded value of a SubjectAltName or IssuerAltName extension
//! into an ordered list of `(tag, value)` entries:
//!
//! | tag | name                      | value                               |
//! |-----|---------------------------|-------------------------------------|
//! | 0   | otherName                 | structure (universal SEQUENCE)      |
//! | 1   | rfc822Name                | text                                |
//! | 2   | dNSName                   | text                                |
//! | 3   | x400Address               | structure                           |
//! | 4   | directoryName             | text, e.g. `C=AU,O=Example`         |
//! | 5   | ediPartyName              | structure                           |
//! | 6   | uniformResourceIdentifier | text                                |
//! | 7   | iPAddress                 | octets                              |
//! | 8   | registeredID              | text, dotted OID                    |
//!
//! ```
//! use certkey_x509::{get_alternative_names, GeneralNameTag};
//!
//! // OCTET STRING { SEQUENCE { [2] "example.com" } }
//! let encoded = [
//!     0x04, 0x0F, 0x30, 0x0D, 0x82, 0x0B, b'e', b'x', b'a', b'm', b'p', b'l', b'e', b'.',
//!     b'c', b'o', b'm',
//! ];
//! let names = get_alternative_names(Some(&encoded)).unwrap();
//! assert_eq!(names[0].tag(), GeneralNameTag::DnsName);
//! assert_eq!(names[0].as_text(), Some("example.com"));
//! ```

#![forbid(unsafe_code)]

pub mod errors;
pub mod extensions;
pub mod parser;
pub mod types;

pub use errors::{CertificateParsingError, Result};
pub use extensions::{
    extension_value, issuer_alternative_names, load_certificate, subject_alternative_names,
    ISSUER_ALT_NAME, SUBJECT_ALT_NAME,
};
pub use parser::{
    decode_extension_value, decode_general_name, get_alternative_names,
    render_distinguished_name, render_encoded_name,
};
pub use types::{AlternativeNames, GeneralNameEntry, GeneralNameTag, GeneralNameValue};

/// Re-exported so callers can name certificate types without a direct dependency
pub use x509_cert::Certificate;
