use crate::error::Result;
use crate::message::AddressFamily;
use der::Sequence;
use der::asn1::OctetString;

/// A single host address restriction.
///
/// ```text
/// HostAddress     ::= SEQUENCE  {
///         addr-type       [0] Int32,
///         address         [1] OCTET STRING
/// }
/// ```
///
/// Equality is exact: same tag and byte-identical payload. Nothing is
/// normalized, so an IPv4-mapped IPv6 value never equals its IPv4 form.
#[derive(Debug, Clone, PartialEq, Eq, Sequence)]
pub struct HostAddress {
    #[asn1(context_specific = "0")]
    addr_type: i32,
    #[asn1(context_specific = "1")]
    address: OctetString,
}

impl HostAddress {
    /// Build from a raw tag and payload. No consistency check is made between
    /// the two; use [`crate::codec`] to build from an endpoint.
    pub fn new(addr_type: i32, address: impl Into<Vec<u8>>) -> Result<Self> {
        Ok(Self {
            addr_type,
            address: OctetString::new(address.into())?,
        })
    }

    pub fn addr_type(&self) -> i32 {
        self.addr_type
    }

    /// Registered family for the tag, or `UnknownAddressType`
    pub fn family(&self) -> Result<AddressFamily> {
        AddressFamily::from_code(self.addr_type)
    }

    pub fn address(&self) -> &[u8] {
        self.address.as_bytes()
    }
}

impl std::fmt::Display for HostAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.family() {
            Ok(family) => write!(f, "{}:{}", family, hex::encode(self.address())),
            Err(_) => write!(f, "{}:{}", self.addr_type, hex::encode(self.address())),
        }
    }
}
