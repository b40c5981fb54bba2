//! Single GeneralName decoding
//!
//! Dispatches on the context-specific tag number of one entry. Entry bodies
//! use IMPLICIT tagging except directoryName, whose body is a complete Name.

use const_oid::ObjectIdentifier;
use der::asn1::Ia5StringRef;
use der::{Any, ErrorKind, Tag, Tagged};

use super::name_extraction::render_encoded_name;
use crate::errors::{CertificateParsingError, Result};
use crate::types::{GeneralNameEntry, GeneralNameTag, GeneralNameValue};

/// Decode one element of a GeneralNames sequence
pub fn decode_general_name(element: &Any) -> Result<GeneralNameEntry> {
    let (constructed, number) = match element.tag() {
        Tag::ContextSpecific {
            constructed,
            number,
        } => (constructed, number.value()),
        other => return Err(CertificateParsingError::UnexpectedTagClass(other)),
    };

    let tag = GeneralNameTag::try_from(number)
        .map_err(|number| CertificateParsingError::UnrecognizedNameTag(u32::from(number)))?;

    if constructed != tag.is_constructed() {
        return Err(CertificateParsingError::MalformedName {
            tag,
            cause: ErrorKind::Value { tag: element.tag() }.into(),
        });
    }

    let value = decode_value(tag, element.value())
        .map_err(CertificateParsingError::malformed_name(tag))?;
    Ok(GeneralNameEntry::new(tag, value))
}

fn decode_value(tag: GeneralNameTag, body: &[u8]) -> der::Result<GeneralNameValue> {
    match tag {
        GeneralNameTag::OtherName | GeneralNameTag::X400Address | GeneralNameTag::EdiPartyName => {
            Ok(GeneralNameValue::Structure(Any::new(Tag::Sequence, body)?))
        }
        GeneralNameTag::Rfc822Name
        | GeneralNameTag::DnsName
        | GeneralNameTag::UniformResourceIdentifier => {
            Ok(GeneralNameValue::Text(Ia5StringRef::new(body)?.to_string()))
        }
        GeneralNameTag::DirectoryName => Ok(GeneralNameValue::Text(render_encoded_name(body)?)),
        GeneralNameTag::IpAddress => Ok(GeneralNameValue::Octets(body.to_vec())),
        GeneralNameTag::RegisteredId => {
            let oid = ObjectIdentifier::from_bytes(body).map_err(|_| {
                der::Error::from(ErrorKind::Value {
                    tag: Tag::ObjectIdentifier,
                })
            })?;
            Ok(GeneralNameValue::Text(oid.to_string()))
        }
    }
}
