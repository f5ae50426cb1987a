use hostaddr::AddressError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid permitted address #{index} {endpoint:?}: {source}")]
    PermittedAddress {
        index: usize,
        endpoint: String,
        #[source]
        source: AddressError,
    },
}
