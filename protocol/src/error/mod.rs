mod address_error;

pub use address_error::AddressError;
pub type Result<T> = std::result::Result<T, AddressError>;
