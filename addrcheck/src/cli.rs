use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "addrcheck")]
#[command(about = "Build and compare Kerberos host addresses", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "ADDRCHECK_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the host address built from a client endpoint
    Encode {
        /// Client endpoint (e.g., "192.168.1.5:88" or "[2001:db8::1]:88")
        endpoint: String,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Decode a DER encoded HostAddress given as hex
    Decode {
        /// DER bytes as hex (e.g., "300da003020102a106040412345678")
        der_hex: String,
    },
    /// Check whether a client endpoint is in the configured permitted addresses
    Check {
        /// Path to the address policy file
        #[arg(short, long, default_value = "addrcheck.toml")]
        config: String,

        /// Client endpoint to look up
        endpoint: String,
    },
    /// Compare two comma-separated endpoint lists as address sets
    Compare {
        first: String,
        second: String,
    },
}
