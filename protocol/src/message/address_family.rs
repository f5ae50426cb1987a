use crate::error::{AddressError, Result};
use serde::Serialize;
use std::str::FromStr;

/// Address families registered for the `addr-type` field of a host address
/// (RFC 4120 section 7.5.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum AddressFamily {
    Ipv4 = 2,
    Directional = 3,
    ChaosNet = 5,
    Xns = 6,
    Iso = 7,
    DecnetPhaseIv = 12,
    AppleTalkDdp = 16,
    NetBios = 20,
    Ipv6 = 24,
}

impl AddressFamily {
    pub const ALL: [AddressFamily; 9] = [
        AddressFamily::Ipv4,
        AddressFamily::Directional,
        AddressFamily::ChaosNet,
        AddressFamily::Xns,
        AddressFamily::Iso,
        AddressFamily::DecnetPhaseIv,
        AddressFamily::AppleTalkDdp,
        AddressFamily::NetBios,
        AddressFamily::Ipv6,
    ];

    /// Look up a family by its wire tag
    pub fn from_code(code: i32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.code() == code)
            .ok_or(AddressError::UnknownAddressType(code))
    }

    /// Wire tag carried in `addr-type`
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Only IPv4 and IPv6 addresses can be built from or decoded to an IP.
    /// The other registered families are recognized but not implemented.
    pub fn is_ip(self) -> bool {
        matches!(self, AddressFamily::Ipv4 | AddressFamily::Ipv6)
    }
}

impl TryFrom<i32> for AddressFamily {
    type Error = AddressError;

    fn try_from(code: i32) -> Result<Self> {
        Self::from_code(code)
    }
}

impl From<AddressFamily> for i32 {
    fn from(family: AddressFamily) -> Self {
        family.code()
    }
}

impl FromStr for AddressFamily {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ipv4" | "inet" => Ok(AddressFamily::Ipv4),
            "directional" => Ok(AddressFamily::Directional),
            "chaosnet" | "chaos" => Ok(AddressFamily::ChaosNet),
            "xns" => Ok(AddressFamily::Xns),
            "iso" => Ok(AddressFamily::Iso),
            "decnet" | "decnetphaseiv" => Ok(AddressFamily::DecnetPhaseIv),
            "appletalk" | "appletalkddp" => Ok(AddressFamily::AppleTalkDdp),
            "netbios" => Ok(AddressFamily::NetBios),
            "ipv6" | "inet6" => Ok(AddressFamily::Ipv6),
            other => Err(AddressError::UnsupportedFamily(other.to_string())),
        }
    }
}

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressFamily::Ipv4 => write!(f, "ipv4"),
            AddressFamily::Directional => write!(f, "directional"),
            AddressFamily::ChaosNet => write!(f, "chaosnet"),
            AddressFamily::Xns => write!(f, "xns"),
            AddressFamily::Iso => write!(f, "iso"),
            AddressFamily::DecnetPhaseIv => write!(f, "decnet"),
            AddressFamily::AppleTalkDdp => write!(f, "appletalk"),
            AddressFamily::NetBios => write!(f, "netbios"),
            AddressFamily::Ipv6 => write!(f, "ipv6"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_codes() {
        let codes: Vec<i32> = AddressFamily::ALL.iter().map(|f| f.code()).collect();
        assert_eq!(codes, vec![2, 3, 5, 6, 7, 12, 16, 20, 24]);
    }

    #[test]
    fn test_code_roundtrip() {
        for family in AddressFamily::ALL {
            assert_eq!(AddressFamily::from_code(family.code()).unwrap(), family);
            assert_eq!(AddressFamily::try_from(i32::from(family)).unwrap(), family);
        }
    }

    #[test]
    fn test_unknown_code() {
        for code in [0, 1, 4, 25, -2] {
            let err = AddressFamily::from_code(code).unwrap_err();
            assert!(matches!(err, AddressError::UnknownAddressType(c) if c == code));
        }
    }

    #[test]
    fn test_only_ip_families_are_implemented() {
        let implemented: Vec<AddressFamily> = AddressFamily::ALL
            .into_iter()
            .filter(|f| f.is_ip())
            .collect();
        assert_eq!(implemented, vec![AddressFamily::Ipv4, AddressFamily::Ipv6]);
    }

    #[test]
    fn test_family_from_str() {
        assert_eq!("IPv4".parse::<AddressFamily>().unwrap(), AddressFamily::Ipv4);
        assert_eq!("inet6".parse::<AddressFamily>().unwrap(), AddressFamily::Ipv6);
        assert_eq!(
            "netbios".parse::<AddressFamily>().unwrap(),
            AddressFamily::NetBios
        );
        assert!("ipx".parse::<AddressFamily>().is_err());

        for family in AddressFamily::ALL {
            assert_eq!(family.to_string().parse::<AddressFamily>().unwrap(), family);
        }
    }
}
