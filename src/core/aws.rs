use crate::core::address::{self, AddressEcho, DnsAddressEcho};
use crate::core::client::{HttpClient, RangeSource};
use crate::core::config::Config;
use crate::core::detector::{Detector, Provider};
use crate::core::errors::Result;
use crate::core::ip_ranges::IpRangeTable;
use log::{debug, info};
use std::net::IpAddr;

/*-------------------------------------------------------------------------------------------------
  Address Range Detector
-------------------------------------------------------------------------------------------------*/

/// Detects AWS by finding the host's public IPv4 address in the compute prefixes of the
/// published AWS IP Ranges.
pub struct AddressRangeDetector {
    ranges: Box<dyn RangeSource>,
    echo: Box<dyn AddressEcho>,
    service: String,
}

impl AddressRangeDetector {
    pub fn new(
        ranges: impl RangeSource + 'static,
        echo: impl AddressEcho + 'static,
        service: &str,
    ) -> Self {
        Self {
            ranges: Box::new(ranges),
            echo: Box::new(echo),
            service: service.to_string(),
        }
    }

    /// Detector wired to the configured IP Ranges URL and DNS echo host.
    pub fn from_config(config: &Config) -> Result<Self> {
        let ranges = HttpClient::new(config.aws_ip_ranges_url(), config.timeout())?;
        let echo = DnsAddressEcho::new(config.address_echo_host(), config.timeout());

        Ok(Self::new(ranges, echo, config.aws_service()))
    }

    pub fn service(&self) -> &str {
        &self.service
    }
}

impl Detector for AddressRangeDetector {
    fn provider(&self) -> Provider {
        Provider::Aws
    }

    fn detect(&self) -> Result<Option<String>> {
        let json = self.ranges.fetch_ranges()?;
        let table = IpRangeTable::from_json(&json)?;
        if let (Some(sync_token), Some(create_date)) = (table.sync_token(), table.create_date()) {
            debug!("AWS IP Ranges sync token {sync_token}, created {create_date}");
        }

        let candidates = table.service_entries(&self.service).count();
        debug!("{candidates} {} prefixes", self.service);

        let address = match address::public_address(self.echo.as_ref())? {
            IpAddr::V4(address) => address,
            IpAddr::V6(address) => {
                debug!("Public address {address} is IPv6; not in any IPv4 prefix");
                return Ok(None);
            }
        };
        info!("Public IPv4 address {address}");

        match table.find(address, &self.service) {
            Some(entry) => {
                info!("{address} is in {} ({})", entry.cidr, entry.region);
                Ok(Some(entry.region.to_string()))
            }
            None => {
                info!("{address} is not in any {} prefix", self.service);
                Ok(None)
            }
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
