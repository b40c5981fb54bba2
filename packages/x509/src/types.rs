//! Decoded alternative-name entries

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use der::Any;

/// GeneralName choice tags (RFC 5280, section 4.2.1.6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GeneralNameTag {
    /// `[0] otherName`
    OtherName = 0,
    /// `[1] rfc822Name`, an email address
    Rfc822Name = 1,
    /// `[2] dNSName`
    DnsName = 2,
    /// `[3] x400Address`
    X400Address = 3,
    /// `[4] directoryName`
    DirectoryName = 4,
    /// `[5] ediPartyName`
    EdiPartyName = 5,
    /// `[6] uniformResourceIdentifier`
    UniformResourceIdentifier = 6,
    /// `[7] iPAddress`
    IpAddress = 7,
    /// `[8] registeredID`
    RegisteredId = 8,
}

impl GeneralNameTag {
    /// Context-specific tag number on the wire
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Whether the entry is carried in constructed form
    pub fn is_constructed(self) -> bool {
        matches!(
            self,
            Self::OtherName | Self::X400Address | Self::DirectoryName | Self::EdiPartyName
        )
    }
}

impl TryFrom<u8> for GeneralNameTag {
    type Error = u8;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            0 => Ok(Self::OtherName),
            1 => Ok(Self::Rfc822Name),
            2 => Ok(Self::DnsName),
            3 => Ok(Self::X400Address),
            4 => Ok(Self::DirectoryName),
            5 => Ok(Self::EdiPartyName),
            6 => Ok(Self::UniformResourceIdentifier),
            7 => Ok(Self::IpAddress),
            8 => Ok(Self::RegisteredId),
            other => Err(other),
        }
    }
}

impl fmt::Display for GeneralNameTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::OtherName => "otherName",
            Self::Rfc822Name => "rfc822Name",
            Self::DnsName => "dNSName",
            Self::X400Address => "x400Address",
            Self::DirectoryName => "directoryName",
            Self::EdiPartyName => "ediPartyName",
            Self::UniformResourceIdentifier => "uniformResourceIdentifier",
            Self::IpAddress => "iPAddress",
            Self::RegisteredId => "registeredID",
        };
        f.write_str(label)
    }
}

/// Decoded payload of a single GeneralName
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneralNameValue {
    /// otherName, x400Address and ediPartyName, re-tagged as a universal SEQUENCE
    Structure(Any),
    /// rfc822Name, dNSName, URI, rendered directoryName, dotted registeredID
    Text(String),
    /// iPAddress octets (4 or 16 bytes, or 8/32 with a mask in name constraints)
    Octets(Vec<u8>),
}

/// One `(tag, value)` pair from an alternative-name extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralNameEntry {
    tag: GeneralNameTag,
    value: GeneralNameValue,
}

impl GeneralNameEntry {
    /// Pair a tag with its decoded value
    pub fn new(tag: GeneralNameTag, value: GeneralNameValue) -> Self {
        Self { tag, value }
    }

    /// Which GeneralName choice this entry is
    pub fn tag(&self) -> GeneralNameTag {
        self.tag
    }

    /// Decoded payload
    pub fn value(&self) -> &GeneralNameValue {
        &self.value
    }

    /// Text form, for string-valued entries
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            GeneralNameValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Raw octets, for iPAddress entries
    pub fn as_octets(&self) -> Option<&[u8]> {
        match &self.value {
            GeneralNameValue::Octets(octets) => Some(octets),
            _ => None,
        }
    }

    /// Structured value, for otherName, x400Address and ediPartyName
    pub fn as_structure(&self) -> Option<&Any> {
        match &self.value {
            GeneralNameValue::Structure(any) => Some(any),
            _ => None,
        }
    }

    /// Interpret an iPAddress entry as an address.
    ///
    /// Returns `None` for other tags and for octet strings that are not
    /// exactly 4 or 16 bytes long.
    pub fn ip_addr(&self) -> Option<IpAddr> {
        if self.tag != GeneralNameTag::IpAddress {
            return None;
        }
        let octets = self.as_octets()?;
        if let Ok(v4) = <[u8; 4]>::try_from(octets) {
            return Some(IpAddr::V4(Ipv4Addr::from(v4)));
        }
        <[u8; 16]>::try_from(octets)
            .ok()
            .map(|v6| IpAddr::V6(Ipv6Addr::from(v6)))
    }
}

/// Ordered, read-only list of decoded alternative names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlternativeNames {
    entries: Vec<GeneralNameEntry>,
}

impl AlternativeNames {
    pub(crate) fn from_entries(entries: Vec<GeneralNameEntry>) -> Self {
        Self { entries }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the extension was absent or empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in encoded order
    pub fn iter(&self) -> std::slice::Iter<'_, GeneralNameEntry> {
        self.entries.iter()
    }

    /// Entries as a slice
    pub fn as_slice(&self) -> &[GeneralNameEntry] {
        &self.entries
    }

    /// All dNSName values, in encoded order
    pub fn dns_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(|entry| entry.tag == GeneralNameTag::DnsName)
            .filter_map(GeneralNameEntry::as_text)
    }

    /// All well-formed iPAddress values, in encoded order
    pub fn ip_addresses(&self) -> impl Iterator<Item = IpAddr> + '_ {
        self.entries.iter().filter_map(GeneralNameEntry::ip_addr)
    }
}

impl std::ops::Deref for AlternativeNames {
    type Target = [GeneralNameEntry];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a AlternativeNames {
    type Item = &'a GeneralNameEntry;
    type IntoIter = std::slice::Iter<'a, GeneralNameEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for AlternativeNames {
    type Item = GeneralNameEntry;
    type IntoIter = std::vec::IntoIter<GeneralNameEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
