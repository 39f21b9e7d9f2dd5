use crate::core::errors::{Error, Result};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::Resolver as DnsResolver;
use log::{debug, info};
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

/*-------------------------------------------------------------------------------------------------
  Address Echo Capability
-------------------------------------------------------------------------------------------------*/

/// An external service that reports the caller's own public address.
pub trait AddressEcho {
    /// Raw answer records, in the order received.
    fn echo_records(&self) -> Result<Vec<String>>;
}

/*-------------------------------------------------------------------------------------------------
  DNS TXT Echo
-------------------------------------------------------------------------------------------------*/

/// Looks up the TXT record of a "what is my address" hostname through the system resolver
/// configuration. Each lookup uses a fresh resolver, a bounded per-query timeout and no retry
/// attempts.
#[derive(Debug, Clone)]
pub struct DnsAddressEcho {
    host: String,
    timeout: Duration,
}

impl DnsAddressEcho {
    pub fn new(host: &str, timeout: Duration) -> Self {
        Self {
            host: host.to_string(),
            timeout,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

impl AddressEcho for DnsAddressEcho {
    fn echo_records(&self) -> Result<Vec<String>> {
        let (config, mut options) = read_system_conf().map_err(|error| {
            Error::AddressLookupFailure(format!("unable to read resolver configuration: {error}"))
        })?;
        options.timeout = self.timeout;
        options.attempts = 0;

        let resolver = DnsResolver::new(config, options).map_err(|error| {
            Error::AddressLookupFailure(format!("unable to create resolver: {error}"))
        })?;

        info!("TXT {}", self.host);
        let lookup = resolver.txt_lookup(self.host.as_str()).map_err(|error| {
            Error::AddressLookupFailure(format!("TXT lookup for {} failed: {error}", self.host))
        })?;

        let records: Vec<String> = lookup
            .iter()
            .map(|txt| {
                txt.txt_data()
                    .iter()
                    .map(|data| String::from_utf8_lossy(data))
                    .collect()
            })
            .collect();
        debug!("TXT {}: {:?}", self.host, records);

        Ok(records)
    }
}

/*-------------------------------------------------------------------------------------------------
  Public Address
-------------------------------------------------------------------------------------------------*/

/// Resolve the caller's public address from the first echo record.
pub fn public_address(echo: &dyn AddressEcho) -> Result<IpAddr> {
    let records = echo.echo_records()?;
    let record = records
        .first()
        .ok_or_else(|| Error::AddressLookupFailure("no records returned".to_string()))?;

    parse_address(record)
}

/// Parse an echoed address, removing surrounding whitespace and quotes. IPv6 is accepted here;
/// callers decide what an IPv6 address means for them.
pub fn parse_address(record: &str) -> Result<IpAddr> {
    let value = record.trim().trim_matches('"');
    value.parse().map_err(|error| {
        Error::AddressLookupFailure(format!("invalid IP address {record:?}: {error}"))
    })
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
