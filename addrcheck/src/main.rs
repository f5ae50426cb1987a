mod cli;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{CliArgs, Command};
use common::AddressPolicyConfig;
use der::{Decode, Encode};
use hostaddr::{HostAddress, HostAddresses};
use report::AddressReport;
use std::process::ExitCode;
use tracing::{debug, info, trace};

fn main() -> Result<ExitCode> {
    let args = CliArgs::parse();

    let mut cfg = match &args.command {
        Command::Check { config, .. } => AddressPolicyConfig::load(config)
            .with_context(|| format!("Failed to load address policy {}", config))?,
        _ => AddressPolicyConfig {
            log_level: "warn".to_string(),
            ..Default::default()
        },
    };
    if let Some(log_level) = args.log_level {
        cfg.log_level = log_level;
    }
    let _guard = common::init_tracing(cfg.log_dir.as_deref(), &cfg.log_file, &cfg.log_level);

    let success = match args.command {
        Command::Encode { endpoint, json } => encode(&endpoint, json).map(|_| true)?,
        Command::Decode { der_hex } => decode(&der_hex).map(|_| true)?,
        Command::Check { endpoint, .. } => check(&cfg, &endpoint)?,
        Command::Compare { first, second } => compare(&first, &second)?,
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn encode(endpoint: &str, json: bool) -> Result<()> {
    let addr = hostaddr::from_endpoint(endpoint)
        .with_context(|| format!("Invalid client endpoint {}", endpoint))?;
    trace!("DER encoding:\n{}", pretty_hex::pretty_hex(&addr.to_der()?));

    let report = AddressReport::new(&addr)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

fn decode(der_hex: &str) -> Result<()> {
    let der = hex::decode(der_hex.trim()).context("Input is not valid hex")?;
    let addr = HostAddress::from_der(&der).context("Input is not a DER HostAddress")?;
    debug!("Decoded host address {}", addr);

    println!("{}", AddressReport::new(&addr)?);
    Ok(())
}

fn check(cfg: &AddressPolicyConfig, endpoint: &str) -> Result<bool> {
    let permitted = cfg.host_addresses()?;
    let candidate = hostaddr::from_endpoint(endpoint)
        .with_context(|| format!("Invalid client endpoint {}", endpoint))?;

    if permitted.contains(&candidate) {
        info!("{} is in the {} permitted addresses", endpoint, permitted.len());
        println!("permitted");
        Ok(true)
    } else {
        info!("{} is not in the {} permitted addresses", endpoint, permitted.len());
        println!("not permitted");
        Ok(false)
    }
}

fn compare(first: &str, second: &str) -> Result<bool> {
    let first = parse_list(first)?;
    let second = parse_list(second)?;

    if first.set_eq(second.as_slice()) {
        println!("equal");
        Ok(true)
    } else {
        println!("not equal");
        Ok(false)
    }
}

fn parse_list(list: &str) -> Result<HostAddresses> {
    list.split(',')
        .map(str::trim)
        .filter(|endpoint| !endpoint.is_empty())
        .map(|endpoint| {
            hostaddr::from_endpoint(endpoint)
                .with_context(|| format!("Invalid client endpoint {}", endpoint))
        })
        .collect()
}
