//! Distinguished name rendering
//!
//! Produces the comma-separated `LABEL=value` form used for directoryName
//! entries. RDNs are emitted in encoded order, multi-valued RDNs are joined
//! with `+`, and attribute types without a short label fall back to their
//! dotted OID.
//!
//! A decoded [`Name`] stores each RDN as a DER `SET OF`, which sorts its
//! attributes. [`render_encoded_name`] walks the raw encoding instead and keeps
//! the attribute order exactly as it appears on the wire.

use const_oid::ObjectIdentifier;
use der::asn1::{Ia5StringRef, Utf8StringRef};
use der::{Any, Decode, Encode, ErrorKind, Reader, SliceReader, Tag, Tagged};
use x509_cert::attr::AttributeTypeAndValue;
use x509_cert::name::Name;

const ATTRIBUTE_LABELS: &[(ObjectIdentifier, &str)] = &[
    (ObjectIdentifier::new_unwrap("2.5.4.6"), "C"),
    (ObjectIdentifier::new_unwrap("2.5.4.10"), "O"),
    (ObjectIdentifier::new_unwrap("2.5.4.11"), "OU"),
    (ObjectIdentifier::new_unwrap("2.5.4.3"), "CN"),
    (ObjectIdentifier::new_unwrap("2.5.4.7"), "L"),
    (ObjectIdentifier::new_unwrap("2.5.4.8"), "ST"),
    (ObjectIdentifier::new_unwrap("2.5.4.9"), "STREET"),
    (ObjectIdentifier::new_unwrap("2.5.4.5"), "SERIALNUMBER"),
    (ObjectIdentifier::new_unwrap("1.2.840.113549.1.9.1"), "E"),
    (ObjectIdentifier::new_unwrap("0.9.2342.19200300.100.1.25"), "DC"),
    (ObjectIdentifier::new_unwrap("0.9.2342.19200300.100.1.1"), "UID"),
    (ObjectIdentifier::new_unwrap("2.5.4.12"), "T"),
    (ObjectIdentifier::new_unwrap("2.5.4.42"), "GIVENNAME"),
    (ObjectIdentifier::new_unwrap("2.5.4.4"), "SURNAME"),
];

/// Short label for a well-known attribute type
pub fn attribute_label(oid: &ObjectIdentifier) -> Option<&'static str> {
    ATTRIBUTE_LABELS
        .iter()
        .find(|(known, _)| known == oid)
        .map(|(_, label)| *label)
}

/// Render a decoded distinguished name as `C=AU,O=Example`
///
/// Attributes of a multi-valued RDN come out in DER `SET OF` order.
pub fn render_distinguished_name(name: &Name) -> String {
    let mut rendered = String::new();
    for (index, rdn) in name.0.iter().enumerate() {
        if index > 0 {
            rendered.push(',');
        }
        for (position, atv) in rdn.0.iter().enumerate() {
            if position > 0 {
                rendered.push('+');
            }
            render_attribute(atv, &mut rendered);
        }
    }
    rendered
}

/// Render a DER-encoded `Name`, keeping the encoded order of every attribute
///
/// # Errors
///
/// Returns a DER error if the encoding is not a `SEQUENCE OF SET OF
/// AttributeTypeAndValue` or an RDN is empty.
pub fn render_encoded_name(encoded: &[u8]) -> der::Result<String> {
    let name = Any::from_der(encoded)?;
    expect_tag(&name, Tag::Sequence)?;

    let mut rendered = String::new();
    let mut rdns = SliceReader::new(name.value())?;
    let mut index = 0;
    while !rdns.is_finished() {
        let rdn = Any::decode(&mut rdns)?;
        expect_tag(&rdn, Tag::Set)?;
        if index > 0 {
            rendered.push(',');
        }

        let mut attributes = SliceReader::new(rdn.value())?;
        let mut position = 0;
        while !attributes.is_finished() {
            let atv = AttributeTypeAndValue::decode(&mut attributes)?;
            if position > 0 {
                rendered.push('+');
            }
            render_attribute(&atv, &mut rendered);
            position += 1;
        }
        // RelativeDistinguishedName is SET SIZE (1..MAX)
        if position == 0 {
            return Err(ErrorKind::Value { tag: Tag::Set }.into());
        }
        index += 1;
    }
    Ok(rendered)
}

fn expect_tag(any: &Any, expected: Tag) -> der::Result<()> {
    if any.tag() == expected {
        Ok(())
    } else {
        Err(ErrorKind::TagUnexpected {
            expected: Some(expected),
            actual: any.tag(),
        }
        .into())
    }
}

fn render_attribute(atv: &AttributeTypeAndValue, out: &mut String) {
    match attribute_label(&atv.oid) {
        Some(label) => out.push_str(label),
        None => out.push_str(&atv.oid.to_string()),
    }
    out.push('=');
    match attribute_text(&atv.value) {
        Some(text) => escape_into(&text, out),
        None => {
            out.push('#');
            // Re-encoding an already decoded Any cannot fail short of allocation
            let encoded = atv.value.to_der().unwrap_or_default();
            out.push_str(&hex::encode(encoded));
        }
    }
}

fn attribute_text(value: &Any) -> Option<String> {
    match value.tag() {
        Tag::Utf8String => Utf8StringRef::try_from(value).ok().map(|s| s.to_string()),
        Tag::Ia5String => match Ia5StringRef::try_from(value) {
            Ok(ia5s) => Some(ia5s.to_string()),
            Err(_) => Some(latin1(value.value())),
        },
        // Real-world PrintableStrings carry `*`, `_`, `@` and `&` outside the
        // strict character set; render their bytes as-is
        Tag::PrintableString
        | Tag::TeletexString
        | Tag::VisibleString
        | Tag::NumericString => Some(latin1(value.value())),
        Tag::BmpString => decode_bmp(value.value()),
        _ => None,
    }
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

fn decode_bmp(bytes: &[u8]) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).ok()
}

fn escape_into(value: &str, out: &mut String) {
    for (index, ch) in value.chars().enumerate() {
        let needs_escape = matches!(ch, ',' | '+' | '"' | '\\' | '<' | '>' | ';' | '=')
            || (index == 0 && ch == '#');
        if needs_escape {
            out.push('\\');
        }
        out.push(ch);
    }
}
