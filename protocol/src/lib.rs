//! Kerberos host addresses (RFC 4120 section 5.2.5): building them from
//! client endpoints and comparing them against address restrictions.

pub mod codec;
pub mod error;
pub mod message;

pub use codec::{decode_address_text, from_endpoint, from_ip, from_socket_addr, ip_addr};
pub use error::{AddressError, Result};
pub use message::{AddressFamily, HostAddress, HostAddresses, contains, set_equal};
