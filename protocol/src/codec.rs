//! Conversions between endpoint strings and [`HostAddress`] values.
//!
//! The `address` payload of an IP host address built here is the DER
//! OCTET STRING encoding of the address text (for example `04 0b "192.168.1.5"`),
//! not the packed binary address.

use crate::error::{AddressError, Result};
use crate::message::{AddressFamily, HostAddress};
use der::asn1::OctetStringRef;
use der::{Decode, Encode, SliceReader};
use std::net::{IpAddr, SocketAddr};
use tracing::{debug, trace};

/// Build a host address from a `host:port` or `[host]:port` endpoint.
/// The port is not interpreted and is discarded.
pub fn from_endpoint(endpoint: &str) -> Result<HostAddress> {
    let host = split_host(endpoint).inspect_err(|e| {
        debug!("Rejected client endpoint {:?}: {}", endpoint, e);
    })?;

    let ip: IpAddr = host.parse().map_err(|e| {
        debug!("Client host {:?} is not an IP literal: {}", host, e);
        AddressError::Format(format!("{:?} is not an IP address: {}", host, e))
    })?;

    from_ip(ip)
}

/// Build a host address for an already parsed peer address
pub fn from_socket_addr(addr: SocketAddr) -> Result<HostAddress> {
    from_ip(addr.ip())
}

pub fn from_ip(ip: IpAddr) -> Result<HostAddress> {
    let (family, ip) = classify(ip);
    trace!("Classified {} as {}", ip, family);
    HostAddress::new(family.code(), encode_address_text(&ip.to_string())?)
}

/// Wrap address text into the OCTET STRING payload carried by `address`
pub fn encode_address_text(text: &str) -> Result<Vec<u8>> {
    Ok(OctetStringRef::new(text.as_bytes())?.to_der()?)
}

/// Unwrap the OCTET STRING payload of `addr` back into its text form.
/// Bytes after the first OCTET STRING are ignored.
pub fn decode_address_text(addr: &HostAddress) -> Result<String> {
    let inner = SliceReader::new(addr.address())
        .and_then(|mut reader| OctetStringRef::decode(&mut reader))
        .map_err(|e| AddressError::Decode(e.to_string()))?;
    std::str::from_utf8(inner.as_bytes())
        .map(str::to_owned)
        .map_err(|e| AddressError::Decode(e.to_string()))
}

/// Recover the IP of an IPv4 or IPv6 host address
pub fn ip_addr(addr: &HostAddress) -> Result<IpAddr> {
    let family = addr.family()?;
    if !family.is_ip() {
        return Err(AddressError::UnsupportedFamily(family.to_string()));
    }

    let text = decode_address_text(addr)?;
    let ip: IpAddr = text
        .parse()
        .map_err(|e| AddressError::Decode(format!("{:?}: {}", text, e)))?;

    let (parsed_family, ip) = classify(ip);
    if parsed_family != family {
        return Err(AddressError::Decode(format!(
            "{} payload carries {} address {}",
            family, parsed_family, ip
        )));
    }
    Ok(ip)
}

/// IPv4 for anything with a 4-byte form, including IPv4-mapped IPv6
fn classify(ip: IpAddr) -> (AddressFamily, IpAddr) {
    match ip {
        IpAddr::V4(_) => (AddressFamily::Ipv4, ip),
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => (AddressFamily::Ipv4, IpAddr::V4(v4)),
            None => (AddressFamily::Ipv6, ip),
        },
    }
}

fn split_host(endpoint: &str) -> Result<&str> {
    let (host, port) = match endpoint.strip_prefix('[') {
        Some(rest) => {
            let (host, after) = rest
                .split_once(']')
                .ok_or_else(|| format_error(endpoint, "missing ']'"))?;
            let port = match after.strip_prefix(':') {
                Some(port) => port,
                None if after.is_empty() => return Err(format_error(endpoint, "missing port")),
                None => return Err(format_error(endpoint, "unexpected text after ']'")),
            };
            (host, port)
        }
        None => {
            let (host, port) = endpoint
                .rsplit_once(':')
                .ok_or_else(|| format_error(endpoint, "missing port"))?;
            if host.contains(':') {
                return Err(format_error(endpoint, "too many colons"));
            }
            (host, port)
        }
    };

    if host.contains(['[', ']']) || port.contains(['[', ']']) {
        return Err(format_error(endpoint, "unexpected bracket"));
    }
    Ok(host)
}

fn format_error(endpoint: &str, reason: &str) -> AddressError {
    AddressError::Format(format!("{:?}: {}", endpoint, reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_endpoint_ipv4() {
        let addr = from_endpoint("192.168.1.5:88").unwrap();
        assert_eq!(addr.addr_type(), 2);

        let mut expected = vec![0x04, 0x0b];
        expected.extend_from_slice(b"192.168.1.5");
        assert_eq!(addr.address(), expected.as_slice());
        assert_eq!(decode_address_text(&addr).unwrap(), "192.168.1.5");
    }

    #[test]
    fn test_from_endpoint_ipv6_uses_canonical_text() {
        let addr = from_endpoint("[2001:DB8:0:0::1]:88").unwrap();
        assert_eq!(addr.addr_type(), 24);
        assert_eq!(decode_address_text(&addr).unwrap(), "2001:db8::1");
    }

    #[test]
    fn test_from_endpoint_ipv4_mapped_is_ipv4() {
        let addr = from_endpoint("[::ffff:10.1.2.3]:88").unwrap();
        assert_eq!(addr.family().unwrap(), AddressFamily::Ipv4);
        assert_eq!(addr, from_endpoint("10.1.2.3:88").unwrap());
    }

    #[test]
    fn test_from_endpoint_port_is_ignored() {
        assert_eq!(
            from_endpoint("10.0.0.1:88").unwrap(),
            from_endpoint("10.0.0.1:464").unwrap()
        );
        assert!(from_endpoint("10.0.0.1:").is_ok());
        assert!(from_endpoint("[10.0.0.1]:kerberos").is_ok());
    }

    #[test]
    fn test_from_endpoint_format_errors() {
        for endpoint in [
            "not-an-ip:88",
            "localhost:88",
            "10.0.0.1",
            "",
            "2001:db8::1:88",
            "[2001:db8::1",
            "[2001:db8::1]",
            "[2001:db8::1]88",
            "[::1]:[88]",
            "10.0.0.1]:88",
            "[fe80::1%eth0]:88",
            "10.0.0.256:88",
        ] {
            let err = from_endpoint(endpoint).unwrap_err();
            assert!(
                matches!(err, AddressError::Format(_)),
                "Unexpected error for {:?}: {:?}",
                endpoint,
                err
            );
        }
    }

    #[test]
    fn test_roundtrip_through_text() {
        for (endpoint, host) in [
            ("127.0.0.1:88", "127.0.0.1"),
            ("0.0.0.0:0", "0.0.0.0"),
            ("[::1]:88", "::1"),
            ("[fe80::abcd:1]:749", "fe80::abcd:1"),
        ] {
            let addr = from_endpoint(endpoint).unwrap();
            assert_eq!(decode_address_text(&addr).unwrap(), host);
            assert_eq!(ip_addr(&addr).unwrap(), host.parse::<IpAddr>().unwrap());
        }
    }

    #[test]
    fn test_from_socket_addr_matches_endpoint() {
        let peer: SocketAddr = "[2001:db8::5]:50000".parse().unwrap();
        assert_eq!(
            from_socket_addr(peer).unwrap(),
            from_endpoint("[2001:db8::5]:88").unwrap()
        );
    }

    #[test]
    fn test_decode_rejects_malformed_payload() {
        for payload in [
            vec![],
            vec![0x04],
            vec![0x04, 0x05, b'1'],
            vec![0x0c, 0x01, b'1'],
            vec![10, 0, 0, 1],
        ] {
            let addr = HostAddress::new(2, payload).unwrap();
            assert!(matches!(
                decode_address_text(&addr),
                Err(AddressError::Decode(_))
            ));
        }
    }

    #[test]
    fn test_decode_ignores_bytes_after_octet_string() {
        let mut payload = encode_address_text("10.0.0.1").unwrap();
        payload.push(0x00);
        let addr = HostAddress::new(2, payload).unwrap();
        assert_eq!(decode_address_text(&addr).unwrap(), "10.0.0.1");

        let mut payload = encode_address_text("::1").unwrap();
        payload.extend_from_slice(&[0x04, 0x01, b'x']);
        let addr = HostAddress::new(24, payload).unwrap();
        assert_eq!(decode_address_text(&addr).unwrap(), "::1");
    }

    #[test]
    fn test_decode_rejects_non_utf8() {
        let addr = HostAddress::new(2, vec![0x04, 0x02, 0xff, 0xfe]).unwrap();
        assert!(matches!(
            decode_address_text(&addr),
            Err(AddressError::Decode(_))
        ));
    }

    #[test]
    fn test_ip_addr_rejects_unimplemented_families() {
        let netbios = HostAddress::new(20, encode_address_text("WORKSTATION").unwrap()).unwrap();
        assert!(matches!(
            ip_addr(&netbios),
            Err(AddressError::UnsupportedFamily(_))
        ));

        let unknown = HostAddress::new(42, encode_address_text("10.0.0.1").unwrap()).unwrap();
        assert!(matches!(
            ip_addr(&unknown),
            Err(AddressError::UnknownAddressType(42))
        ));
    }

    #[test]
    fn test_ip_addr_rejects_family_mismatch() {
        let addr = HostAddress::new(24, encode_address_text("10.0.0.1").unwrap()).unwrap();
        assert!(matches!(ip_addr(&addr), Err(AddressError::Decode(_))));
    }
}
