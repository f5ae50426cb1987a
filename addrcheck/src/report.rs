use anyhow::Result;
use der::Encode;
use hostaddr::{AddressFamily, HostAddress};
use serde::Serialize;

/// Printable view of a host address for the CLI
#[derive(Debug, Serialize)]
pub struct AddressReport {
    pub addr_type: i32,
    pub family: Option<AddressFamily>,
    pub text: Option<String>,
    pub payload_hex: String,
    pub der_hex: String,
}

impl AddressReport {
    pub fn new(addr: &HostAddress) -> Result<Self> {
        Ok(Self {
            addr_type: addr.addr_type(),
            family: addr.family().ok(),
            text: hostaddr::decode_address_text(addr).ok(),
            payload_hex: hex::encode(addr.address()),
            der_hex: hex::encode(addr.to_der()?),
        })
    }
}

impl std::fmt::Display for AddressReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.family {
            Some(family) => writeln!(f, "addr-type: {} ({})", self.addr_type, family)?,
            None => writeln!(f, "addr-type: {} (unregistered)", self.addr_type)?,
        }
        if let Some(text) = &self.text {
            writeln!(f, "address:   {}", text)?;
        }
        writeln!(f, "payload:   {}", self.payload_hex)?;
        write!(f, "der:       {}", self.der_hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_for_ipv4_endpoint() {
        let addr = hostaddr::from_endpoint("10.0.0.1:88").unwrap();
        let report = AddressReport::new(&addr).unwrap();

        assert_eq!(report.addr_type, 2);
        assert_eq!(report.family, Some(AddressFamily::Ipv4));
        assert_eq!(report.text.as_deref(), Some("10.0.0.1"));
        assert_eq!(report.payload_hex, "040831302e302e302e31");
        assert!(report.der_hex.starts_with("3013a003020102a10c040a0408"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["family"], "ipv4");
        assert_eq!(json["text"], "10.0.0.1");
    }

    #[test]
    fn report_for_opaque_address() {
        let addr = HostAddress::new(99, vec![0xde, 0xad]).unwrap();
        let report = AddressReport::new(&addr).unwrap();

        assert_eq!(report.family, None);
        assert_eq!(report.text, None);
        assert!(report.to_string().contains("unregistered"));
    }
}
