//! Extension lookup on whole certificates

use std::time::Duration;

use certkey_x509::{
    extension_value, issuer_alternative_names, load_certificate, subject_alternative_names,
    CertificateParsingError, GeneralNameTag, ISSUER_ALT_NAME, SUBJECT_ALT_NAME,
};
use const_oid::ObjectIdentifier;
use der::asn1::{BitString, OctetString, UtcTime};
use der::pem::LineEnding;
use der::{Encode, EncodePem};
use hex_literal::hex;
use x509_cert::ext::Extension;
use x509_cert::name::Name;
use x509_cert::serial_number::SerialNumber;
use x509_cert::spki::{AlgorithmIdentifierOwned, SubjectPublicKeyInfoOwned};
use x509_cert::time::{Time, Validity};
use x509_cert::{Certificate, TbsCertificate, Version};

const ED25519: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.112");

fn utc(secs: u64) -> Time {
    Time::UtcTime(UtcTime::from_unix_duration(Duration::from_secs(secs)).unwrap())
}

fn extension(oid: ObjectIdentifier, body: &[u8]) -> Extension {
    Extension {
        extn_id: oid,
        critical: false,
        extn_value: OctetString::new(body.to_vec()).unwrap(),
    }
}

fn certificate(extensions: Option<Vec<Extension>>) -> Certificate {
    let algorithm = AlgorithmIdentifierOwned {
        oid: ED25519,
        parameters: None,
    };
    Certificate {
        tbs_certificate: TbsCertificate {
            version: Version::V3,
            serial_number: SerialNumber::new(&[0x01]).unwrap(),
            signature: algorithm.clone(),
            issuer: Name::default(),
            validity: Validity {
                not_before: utc(1_700_000_000),
                not_after: utc(1_800_000_000),
            },
            subject: Name::default(),
            subject_public_key_info: SubjectPublicKeyInfoOwned {
                algorithm: algorithm.clone(),
                subject_public_key: BitString::from_bytes(&[0x11; 32]).unwrap(),
            },
            issuer_unique_id: None,
            subject_unique_id: None,
            extensions,
        },
        signature_algorithm: algorithm,
        signature: BitString::from_bytes(&[0x22; 64]).unwrap(),
    }
}

// SEQUENCE { [2] "example.com", [7] 192.0.2.1 }
const SAN_BODY: [u8; 21] = hex!("30 13 82 0B 65 78 61 6D 70 6C 65 2E 63 6F 6D 87 04 C0 00 02 01");
// SEQUENCE { [1] "ca@example.com" }
const IAN_BODY: [u8; 18] = hex!("30 10 81 0E 63 61 40 65 78 61 6D 70 6C 65 2E 63 6F 6D");

#[test]
fn test_certificate_without_extensions_has_no_names() {
    let cert = certificate(None);
    assert_eq!(extension_value(&cert, &SUBJECT_ALT_NAME).unwrap(), None);
    assert!(subject_alternative_names(&cert).unwrap().is_empty());
    assert!(issuer_alternative_names(&cert).unwrap().is_empty());
}

#[test]
fn test_extension_value_keeps_octet_string_wrapper() {
    let cert = certificate(Some(vec![extension(SUBJECT_ALT_NAME, &SAN_BODY)]));
    let encoded = extension_value(&cert, &SUBJECT_ALT_NAME).unwrap().unwrap();
    assert_eq!(&encoded[..2], &[0x04, 0x15]);
    assert_eq!(&encoded[2..], &SAN_BODY[..]);
}

#[test]
fn test_reads_subject_and_issuer_names_separately() {
    let cert = certificate(Some(vec![
        extension(SUBJECT_ALT_NAME, &SAN_BODY),
        extension(ISSUER_ALT_NAME, &IAN_BODY),
    ]));

    let subject = subject_alternative_names(&cert).unwrap();
    assert_eq!(subject.dns_names().collect::<Vec<_>>(), vec!["example.com"]);
    assert_eq!(
        subject.ip_addresses().map(|ip| ip.to_string()).collect::<Vec<_>>(),
        vec!["192.0.2.1"]
    );

    let issuer = issuer_alternative_names(&cert).unwrap();
    assert_eq!(issuer.len(), 1);
    assert_eq!(issuer[0].tag(), GeneralNameTag::Rfc822Name);
    assert_eq!(issuer[0].as_text(), Some("ca@example.com"));
}

#[test]
fn test_malformed_san_body_fails() {
    let cert = certificate(Some(vec![extension(SUBJECT_ALT_NAME, &hex!("30 03 89 01 00"))]));
    assert!(matches!(
        subject_alternative_names(&cert),
        Err(CertificateParsingError::UnrecognizedNameTag(9))
    ));
}

#[test]
fn test_loads_der_and_pem() {
    let cert = certificate(Some(vec![extension(SUBJECT_ALT_NAME, &SAN_BODY)]));

    let der = cert.to_der().unwrap();
    assert_eq!(load_certificate(&der).unwrap(), cert);

    let pem = cert.to_pem(LineEnding::LF).unwrap();
    let loaded = load_certificate(pem.as_bytes()).unwrap();
    assert_eq!(loaded, cert);
    assert_eq!(subject_alternative_names(&loaded).unwrap().len(), 2);
}

#[test]
fn test_rejects_garbage_certificate_bytes() {
    assert!(matches!(
        load_certificate(b"not a certificate"),
        Err(CertificateParsingError::Certificate(_))
    ));
    assert!(matches!(
        load_certificate(b"-----BEGIN CERTIFICATE-----\n!!!\n-----END CERTIFICATE-----\n"),
        Err(CertificateParsingError::Certificate(_))
    ));
}
