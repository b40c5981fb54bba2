//! Certificate parsing error types

use crate::types::GeneralNameTag;

/// Failure while decoding certificate extensions or alternative names
///
/// Decoding is all-or-nothing: any of these aborts the whole name list.
#[derive(Debug, thiserror::Error)]
pub enum CertificateParsingError {
    /// The extension value is not an OCTET STRING wrapping a well-formed
    /// `SEQUENCE OF GeneralName`
    #[error("Malformed extension: {0}")]
    MalformedExtension(#[source] der::Error),
    /// A recognized entry whose body does not decode
    #[error("Malformed {tag} entry: {cause}")]
    MalformedName {
        /// Choice the entry was tagged with
        tag: GeneralNameTag,
        /// Underlying DER failure
        #[source]
        cause: der::Error,
    },
    /// Context-specific tag number outside 0..=8
    #[error("Bad tag number: {0}")]
    UnrecognizedNameTag(u32),
    /// Entry carries a universal, application or private tag
    #[error("GeneralName entry is not context-specific: {0}")]
    UnexpectedTagClass(der::Tag),
    /// The certificate itself does not parse as DER or PEM
    #[error("Certificate parsing failed: {0}")]
    Certificate(#[source] der::Error),
}

impl CertificateParsingError {
    pub(crate) fn malformed_name(tag: GeneralNameTag) -> impl FnOnce(der::Error) -> Self {
        move |cause| Self::MalformedName { tag, cause }
    }
}

/// Result type for certificate parsing
pub type Result<T> = std::result::Result<T, CertificateParsingError>;
