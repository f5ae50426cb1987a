use crate::error::{CommonError, Result};
use hostaddr::HostAddresses;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Addresses a credential may be presented from, plus logging settings.
///
/// ```toml
/// permitted = ["192.168.1.5:88", "[2001:db8::1]:88"]
/// log_level = "debug"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressPolicyConfig {
    /// Client endpoints in `host:port` form; the port is ignored
    #[serde(default)]
    pub permitted: Vec<String>,

    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log directory for file-based logging, stderr when unset
    #[serde(default)]
    pub log_dir: Option<String>,

    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "addrcheck.log".to_string()
}

impl Default for AddressPolicyConfig {
    fn default() -> Self {
        Self {
            permitted: Vec::new(),
            log_level: default_log_level(),
            log_dir: None,
            log_file: default_log_file(),
        }
    }
}

impl AddressPolicyConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AddressPolicyConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Convert the permitted endpoints into host addresses, keeping their order
    pub fn host_addresses(&self) -> Result<HostAddresses> {
        let addresses = self
            .permitted
            .iter()
            .enumerate()
            .map(|(index, endpoint)| {
                hostaddr::from_endpoint(endpoint).map_err(|source| CommonError::PermittedAddress {
                    index,
                    endpoint: endpoint.clone(),
                    source,
                })
            })
            .collect::<Result<HostAddresses>>()?;
        debug!("Loaded {} permitted host addresses", addresses.len());
        Ok(addresses)
    }
}
