use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressError {
    #[error("Invalid format of client address: {0}")]
    Format(String),

    #[error("Unsupported address family: {0}")]
    UnsupportedFamily(String),

    #[error("Could not decode address payload: {0}")]
    Decode(String),

    #[error("Unknown address type: {0}")]
    UnknownAddressType(i32),

    #[error("DER error: {0}")]
    Der(#[from] der::Error),
}
