//! Certificate loading and extension lookup

use const_oid::ObjectIdentifier;
use der::{Decode, DecodePem, Encode};
use x509_cert::Certificate;

use crate::errors::{CertificateParsingError, Result};
use crate::parser::get_alternative_names;
use crate::types::AlternativeNames;

/// SubjectAltName (2.5.29.17)
pub const SUBJECT_ALT_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.17");

/// IssuerAltName (2.5.29.18)
pub const ISSUER_ALT_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.18");

const PEM_PREFIX: &[u8] = b"-----BEGIN";

/// Parse a certificate from DER or PEM bytes
pub fn load_certificate(bytes: &[u8]) -> Result<Certificate> {
    let trimmed = bytes.trim_ascii_start();
    if trimmed.starts_with(PEM_PREFIX) {
        Certificate::from_pem(trimmed).map_err(CertificateParsingError::Certificate)
    } else {
        Certificate::from_der(bytes).map_err(CertificateParsingError::Certificate)
    }
}

/// Encoded extension value for `oid`: the DER OCTET STRING wrapping the
/// extension body, or `None` when the certificate has no such extension.
pub fn extension_value(cert: &Certificate, oid: &ObjectIdentifier) -> Result<Option<Vec<u8>>> {
    let Some(extensions) = &cert.tbs_certificate.extensions else {
        return Ok(None);
    };
    extensions
        .iter()
        .find(|ext| ext.extn_id == *oid)
        .map(|ext| ext.extn_value.to_der())
        .transpose()
        .map_err(CertificateParsingError::MalformedExtension)
}

/// Decoded SubjectAltName entries
pub fn subject_alternative_names(cert: &Certificate) -> Result<AlternativeNames> {
    let encoded = extension_value(cert, &SUBJECT_ALT_NAME)?;
    get_alternative_names(encoded.as_deref())
}

/// Decoded IssuerAltName entries
pub fn issuer_alternative_names(cert: &Certificate) -> Result<AlternativeNames> {
    let encoded = extension_value(cert, &ISSUER_ALT_NAME)?;
    get_alternative_names(encoded.as_deref())
}
