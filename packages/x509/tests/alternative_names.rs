//! GeneralNames decoding from encoded extension values

use certkey_x509::{
    get_alternative_names, CertificateParsingError, GeneralNameTag, GeneralNameValue,
};
use der::{Encode, Tag, Tagged};
use hex_literal::hex;
use proptest::prelude::*;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// DER TLV with short or long-form length
fn tlv(tag: u8, content: &[u8]) -> Vec<u8> {
    let mut out = vec![tag];
    let len = content.len();
    if len < 0x80 {
        out.push(len as u8);
    } else if len <= 0xFF {
        out.extend_from_slice(&[0x81, len as u8]);
    } else {
        out.extend_from_slice(&[0x82, (len >> 8) as u8, len as u8]);
    }
    out.extend_from_slice(content);
    out
}

/// OCTET STRING { SEQUENCE { entries } }
fn extension(entries: &[Vec<u8>]) -> Vec<u8> {
    tlv(0x04, &tlv(0x30, &entries.concat()))
}

#[test]
fn test_absent_extension_yields_empty_list() {
    let names = get_alternative_names(None).unwrap();
    assert!(names.is_empty());
}

#[test]
fn test_empty_sequence_yields_empty_list() {
    let names = get_alternative_names(Some(&hex!("04 02 30 00"))).unwrap();
    assert_eq!(names.len(), 0);
}

#[test]
fn test_decodes_dns_name() {
    let encoded = hex!("04 0F 30 0D 82 0B 65 78 61 6D 70 6C 65 2E 63 6F 6D");
    let names = get_alternative_names(Some(&encoded)).unwrap();
    assert_eq!(names.len(), 1);
    assert_eq!(names[0].tag(), GeneralNameTag::DnsName);
    assert_eq!(
        names[0].value(),
        &GeneralNameValue::Text("example.com".to_string())
    );
    assert_eq!(names.dns_names().collect::<Vec<_>>(), vec!["example.com"]);
}

#[test]
fn test_decodes_ipv4_address_as_octets() {
    let encoded = hex!("04 08 30 06 87 04 C0 00 02 01");
    let names = get_alternative_names(Some(&encoded)).unwrap();
    assert_eq!(names[0].tag(), GeneralNameTag::IpAddress);
    assert_eq!(names[0].as_octets(), Some(&[192u8, 0, 2, 1][..]));
    assert_eq!(
        names[0].ip_addr(),
        Some(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)))
    );
}

#[test]
fn test_unrecognized_tag_fails_whole_list() {
    // [2] "example.com" followed by [9] 0x00
    let encoded = hex!("04 12 30 10 82 0B 65 78 61 6D 70 6C 65 2E 63 6F 6D 89 01 00");
    let err = get_alternative_names(Some(&encoded)).unwrap_err();
    assert!(matches!(err, CertificateParsingError::UnrecognizedNameTag(9)));
    assert_eq!(err.to_string(), "Bad tag number: 9");
}

#[test]
fn test_high_tag_numbers_are_unrecognized() {
    // [30] still fits the low-tag-number form
    let encoded = extension(&[hex!("9E 01 00").to_vec()]);
    let err = get_alternative_names(Some(&encoded)).unwrap_err();
    assert!(matches!(err, CertificateParsingError::UnrecognizedNameTag(30)));

    // [31] needs the high-tag-number form
    let encoded = extension(&[tlv(0x82, b"example.com"), hex!("9F 1F 01 00").to_vec()]);
    let err = get_alternative_names(Some(&encoded)).unwrap_err();
    assert!(matches!(err, CertificateParsingError::UnrecognizedNameTag(31)));
    assert_eq!(err.to_string(), "Bad tag number: 31");

    // Constructed [128], two-octet tag number
    let encoded = extension(&[hex!("BF 81 00 00").to_vec()]);
    let err = get_alternative_names(Some(&encoded)).unwrap_err();
    assert!(matches!(err, CertificateParsingError::UnrecognizedNameTag(128)));
}

#[test]
fn test_directory_name_keeps_encoded_attribute_order() {
    // One RDN holding O=Zedzedzed then CN=a, not in DER SET OF order
    let organization = tlv(
        0x30,
        &[hex!("06 03 55 04 0A").to_vec(), tlv(0x13, b"Zedzedzed")].concat(),
    );
    let common_name = tlv(
        0x30,
        &[hex!("06 03 55 04 03").to_vec(), tlv(0x13, b"a")].concat(),
    );
    let name = tlv(0x30, &tlv(0x31, &[organization, common_name].concat()));

    let names = get_alternative_names(Some(&extension(&[tlv(0xA4, &name)]))).unwrap();
    assert_eq!(names[0].as_text(), Some("O=Zedzedzed+CN=a"));
}

#[test]
fn test_universal_tag_inside_sequence_is_rejected() {
    let encoded = extension(&[tlv(0x16, b"example.com")]);
    let err = get_alternative_names(Some(&encoded)).unwrap_err();
    assert!(matches!(err, CertificateParsingError::UnexpectedTagClass(Tag::Ia5String)));
}

#[test]
fn test_wrong_constructed_form_is_malformed() {
    // dNSName must be primitive
    let encoded = extension(&[tlv(0xA2, &tlv(0x16, b"a"))]);
    let err = get_alternative_names(Some(&encoded)).unwrap_err();
    assert!(matches!(
        err,
        CertificateParsingError::MalformedName {
            tag: GeneralNameTag::DnsName,
            ..
        }
    ));
}

#[test]
fn test_missing_octet_string_wrapper_is_malformed() {
    let encoded = hex!("30 0D 82 0B 65 78 61 6D 70 6C 65 2E 63 6F 6D");
    let err = get_alternative_names(Some(&encoded)).unwrap_err();
    assert!(matches!(err, CertificateParsingError::MalformedExtension(_)));
}

#[test]
fn test_non_sequence_body_is_malformed() {
    // OCTET STRING { SET { } }
    let err = get_alternative_names(Some(&hex!("04 02 31 00"))).unwrap_err();
    assert!(matches!(err, CertificateParsingError::MalformedExtension(_)));
}

#[test]
fn test_truncated_entry_is_malformed() {
    // Inner [2] claims 11 bytes but carries 3
    let encoded = hex!("04 07 30 05 82 0B 65 78 61");
    let err = get_alternative_names(Some(&encoded)).unwrap_err();
    assert!(matches!(err, CertificateParsingError::MalformedExtension(_)));
}

#[test]
fn test_non_ascii_dns_name_is_malformed() {
    let encoded = extension(&[tlv(0x82, &[0x65, 0xC3, 0xA9])]);
    let err = get_alternative_names(Some(&encoded)).unwrap_err();
    assert!(matches!(
        err,
        CertificateParsingError::MalformedName {
            tag: GeneralNameTag::DnsName,
            ..
        }
    ));
}

#[test]
fn test_decodes_every_tag_in_encoded_order() {
    let mut ipv6 = [0u8; 16];
    ipv6[..4].copy_from_slice(&[0x20, 0x01, 0x0D, 0xB8]);
    ipv6[15] = 1;

    let other_name_body = hex!("06 03 2A 03 04 A0 05 0C 03 66 6F 6F");
    // Name: C=AU (PrintableString), O=Example (UTF8String)
    let directory = hex!(
        "30 1F"
        "31 0B 30 09 06 03 55 04 06 13 02 41 55"
        "31 10 30 0E 06 03 55 04 0A 0C 07 45 78 61 6D 70 6C 65"
    );
    let x400_body = hex!("02 01 07");
    let edi_body = hex!("A1 03 0C 01 78");

    let encoded = extension(&[
        tlv(0xA0, &other_name_body),
        tlv(0x81, b"a@b.c"),
        tlv(0x82, b"example.com"),
        tlv(0xA3, &x400_body),
        tlv(0xA4, &directory),
        tlv(0xA5, &edi_body),
        tlv(0x86, b"https://x.io"),
        tlv(0x87, &ipv6),
        tlv(0x88, &hex!("2A 03 04")),
    ]);

    let names = get_alternative_names(Some(&encoded)).unwrap();
    let tags: Vec<u8> = names.iter().map(|entry| entry.tag().number()).collect();
    assert_eq!(tags, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);

    let other_name = names[0].as_structure().unwrap();
    assert_eq!(other_name.tag(), Tag::Sequence);
    assert_eq!(other_name.value(), &other_name_body[..]);
    assert_eq!(other_name.to_der().unwrap(), tlv(0x30, &other_name_body));

    assert_eq!(names[1].as_text(), Some("a@b.c"));
    assert_eq!(names[2].as_text(), Some("example.com"));
    assert_eq!(names[3].as_structure().unwrap().value(), &x400_body[..]);
    assert_eq!(names[4].as_text(), Some("C=AU,O=Example"));
    assert_eq!(names[5].as_structure().unwrap().value(), &edi_body[..]);
    assert_eq!(names[6].as_text(), Some("https://x.io"));
    assert_eq!(
        names[7].ip_addr(),
        Some(IpAddr::V6(Ipv6Addr::new(0x2001, 0x0db8, 0, 0, 0, 0, 0, 1)))
    );
    assert_eq!(names[8].as_text(), Some("1.2.3.4"));
    assert_eq!(names.ip_addresses().count(), 1);
}

#[test]
fn test_masked_ip_octets_are_kept_verbatim() {
    let encoded = extension(&[tlv(0x87, &hex!("0A 00 00 00 FF 00 00 00"))]);
    let names = get_alternative_names(Some(&encoded)).unwrap();
    assert_eq!(names[0].as_octets().map(<[u8]>::len), Some(8));
    assert_eq!(names[0].ip_addr(), None);
}

#[test]
fn test_long_form_lengths_are_accepted() {
    let hosts: Vec<String> = (0..20).map(|i| format!("host{i:02}.example.org")).collect();
    let entries: Vec<Vec<u8>> = hosts.iter().map(|h| tlv(0x82, h.as_bytes())).collect();
    let names = get_alternative_names(Some(&extension(&entries))).unwrap();
    assert_eq!(names.dns_names().collect::<Vec<_>>(), hosts);
}

#[test]
fn test_tag_number_round_trips_through_try_from() {
    for number in 0u8..=8 {
        let tag = GeneralNameTag::try_from(number).unwrap();
        assert_eq!(tag.number(), number);
    }
    assert_eq!(GeneralNameTag::try_from(9), Err(9));
    assert_eq!(GeneralNameTag::DirectoryName.to_string(), "directoryName");
}

proptest! {
    #[test]
    fn test_preserves_order_of_mixed_entries(
        items in prop::collection::vec(
            prop_oneof![
                "[a-z]{1,12}\\.[a-z]{2,4}".prop_map(Ok::<String, [u8; 4]>),
                any::<[u8; 4]>().prop_map(Err::<String, [u8; 4]>),
            ],
            0..24,
        )
    ) {
        let entries: Vec<Vec<u8>> = items
            .iter()
            .map(|item| match item {
                Ok(host) => tlv(0x82, host.as_bytes()),
                Err(ip) => tlv(0x87, ip),
            })
            .collect();
        let names = get_alternative_names(Some(&extension(&entries))).unwrap();
        prop_assert_eq!(names.len(), items.len());
        for (entry, item) in names.iter().zip(&items) {
            match item {
                Ok(host) => {
                    prop_assert_eq!(entry.tag(), GeneralNameTag::DnsName);
                    prop_assert_eq!(entry.as_text(), Some(host.as_str()));
                }
                Err(ip) => {
                    prop_assert_eq!(entry.tag(), GeneralNameTag::IpAddress);
                    prop_assert_eq!(entry.as_octets(), Some(&ip[..]));
                }
            }
        }
    }
}
