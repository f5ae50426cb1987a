pub mod address_family;
pub mod host_address;
pub mod host_addresses;

pub use address_family::AddressFamily;
pub use host_address::HostAddress;
pub use host_addresses::{HostAddresses, contains, set_equal};
