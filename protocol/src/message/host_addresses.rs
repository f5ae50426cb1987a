use crate::codec;
use crate::error::Result;
use crate::message::HostAddress;
use der::{DecodeValue, EncodeValue, FixedTag, Header, Length, Reader, Tag, Writer};
use std::net::IpAddr;

/// ```text
/// HostAddresses   ::= SEQUENCE OF HostAddress
/// ```
///
/// Always carried as an OPTIONAL field that should not be empty. Enforcing
/// that belongs to the embedding message; an empty list is representable here.
#[derive(Debug, Clone, Default)]
pub struct HostAddresses(Vec<HostAddress>);

impl HostAddresses {
    pub fn new(addresses: Vec<HostAddress>) -> Self {
        Self(addresses)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HostAddress> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[HostAddress] {
        &self.0
    }

    pub fn contains(&self, addr: &HostAddress) -> bool {
        contains(&self.0, addr)
    }

    /// Same length and every element of `other` is contained in `self`.
    /// Duplicates are not matched one to one, so this is not multiset
    /// equality and is not symmetric when either side repeats an element.
    pub fn set_eq(&self, other: &[HostAddress]) -> bool {
        set_equal(&self.0, other)
    }

    /// Whether the address an observed client presents from is listed.
    pub fn contains_ip(&self, ip: IpAddr) -> Result<bool> {
        let candidate = codec::from_ip(ip)?;
        Ok(self.contains(&candidate))
    }
}

pub fn contains(addresses: &[HostAddress], addr: &HostAddress) -> bool {
    addresses.iter().any(|e| e == addr)
}

pub fn set_equal(a: &[HostAddress], b: &[HostAddress]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    b.iter().all(|e| contains(a, e))
}

impl From<Vec<HostAddress>> for HostAddresses {
    fn from(addresses: Vec<HostAddress>) -> Self {
        Self(addresses)
    }
}

impl FromIterator<HostAddress> for HostAddresses {
    fn from_iter<I: IntoIterator<Item = HostAddress>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for HostAddresses {
    type Item = HostAddress;
    type IntoIter = std::vec::IntoIter<HostAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a HostAddresses {
    type Item = &'a HostAddress;
    type IntoIter = std::slice::Iter<'a, HostAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> DecodeValue<'a> for HostAddresses {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        <Vec<HostAddress> as DecodeValue<'a>>::decode_value(reader, header).map(Self)
    }
}

impl EncodeValue for HostAddresses {
    fn value_len(&self) -> der::Result<Length> {
        self.0.value_len()
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        self.0.encode_value(writer)
    }
}

impl FixedTag for HostAddresses {
    const TAG: Tag = Tag::Sequence;
}
