//! Alternative-name extension decoding
//!
//! An extension value arrives as the DER OCTET STRING that wraps the
//! extension body. For SubjectAltName and IssuerAltName the body is a
//! `SEQUENCE OF GeneralName`.

use der::asn1::OctetStringRef;
use der::{Any, Decode, ErrorKind, Length, Reader, SliceReader, Tag, Tagged};

use certkey_common::LoggingTransformer;

use super::general_name::decode_general_name;
use crate::errors::{CertificateParsingError, Result};
use crate::types::{AlternativeNames, GeneralNameEntry, GeneralNameValue};

/// Strip the OCTET STRING wrapper and decode the DER value inside it
pub fn decode_extension_value(encoded: &[u8]) -> Result<Any> {
    let octets =
        OctetStringRef::from_der(encoded).map_err(CertificateParsingError::MalformedExtension)?;
    Any::from_der(octets.as_bytes()).map_err(CertificateParsingError::MalformedExtension)
}

/// Decode an encoded alternative-name extension value.
///
/// `None` means the certificate carries no such extension and yields an
/// empty list. Any malformed or unrecognized entry fails the whole call.
pub fn get_alternative_names(extension: Option<&[u8]>) -> Result<AlternativeNames> {
    let Some(encoded) = extension else {
        return Ok(AlternativeNames::default());
    };

    let result = decode_names(encoded);
    match &result {
        Ok(names) => log::debug!("Decoded {} alternative name entries", names.len()),
        Err(e) => LoggingTransformer::log_crypto_error("alternative name decoding", e),
    }
    result
}

fn decode_names(encoded: &[u8]) -> Result<AlternativeNames> {
    let names = decode_extension_value(encoded)?;
    if names.tag() != Tag::Sequence {
        return Err(CertificateParsingError::MalformedExtension(
            ErrorKind::TagUnexpected {
                expected: Some(Tag::Sequence),
                actual: names.tag(),
            }
            .into(),
        ));
    }

    let mut reader =
        SliceReader::new(names.value()).map_err(CertificateParsingError::MalformedExtension)?;
    let mut entries = Vec::new();
    while !reader.is_finished() {
        let offset = reader.position();
        let element = Any::decode(&mut reader)
            .map_err(|error| element_error(error, names.value(), offset))?;
        let entry = decode_general_name(&element)?;
        log_entry(&entry);
        entries.push(entry);
    }
    Ok(AlternativeNames::from_entries(entries))
}

/// An identifier in high-tag-number form can never be a GeneralName choice,
/// whether or not der can represent the number.
fn element_error(error: der::Error, body: &[u8], offset: Length) -> CertificateParsingError {
    let identifier = usize::try_from(offset).ok().and_then(|start| body.get(start..));
    match identifier.and_then(high_tag_number) {
        Some(number) => CertificateParsingError::UnrecognizedNameTag(number),
        None => CertificateParsingError::MalformedExtension(error),
    }
}

/// Tag number of identifier octets in high-tag-number form (X.690 8.1.2.4)
fn high_tag_number(identifier: &[u8]) -> Option<u32> {
    let (&first, rest) = identifier.split_first()?;
    if first & 0x1F != 0x1F {
        return None;
    }
    let mut number: u32 = 0;
    for &byte in rest {
        number = number.checked_mul(128)?.checked_add(u32::from(byte & 0x7F))?;
        if byte & 0x80 == 0 {
            return Some(number);
        }
    }
    None
}

fn log_entry(entry: &GeneralNameEntry) {
    let tag = entry.tag().to_string();
    match entry.value() {
        GeneralNameValue::Text(text) => LoggingTransformer::log_name_decoded(&tag, text),
        GeneralNameValue::Octets(octets) => {
            LoggingTransformer::log_name_decoded(&tag, &hex::encode(octets))
        }
        GeneralNameValue::Structure(_) => log::trace!("Decoded {tag} entry (structured)"),
    }
}
