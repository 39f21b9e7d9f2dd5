use crate::core::datetime;
use crate::core::errors::Result;
use crate::core::json;
use crate::core::utils;
use chrono::{DateTime, Utc};
use ipnetwork::Ipv4Network;
use log::debug;
use std::collections::BTreeSet;
use std::net::Ipv4Addr;
use std::rc::Rc;

/*-------------------------------------------------------------------------------------------------
  Range Entry
-------------------------------------------------------------------------------------------------*/

/// One IPv4 prefix record from the provider's IP-range document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RangeEntry {
    /// IPv4 prefix.
    pub cidr: Ipv4Network,

    /// Service tag the prefix is published under (`EC2`, `S3`, `ROUTE53`, ...).
    pub service: Rc<str>,

    /// Region the prefix is associated with.
    pub region: Rc<str>,
}

impl RangeEntry {
    pub fn contains(&self, address: Ipv4Addr) -> bool {
        self.cidr.contains(address)
    }
}

/*-------------------------------------------------------------------------------------------------
  IP Range Table
-------------------------------------------------------------------------------------------------*/

/// Parsed, immutable IP-range table. Entries keep the order of the source document.
#[derive(Clone, Debug, Default)]
pub struct IpRangeTable {
    sync_token: Option<String>,
    create_date: Option<DateTime<Utc>>,

    regions: BTreeSet<Rc<str>>,
    services: BTreeSet<Rc<str>>,

    entries: Vec<RangeEntry>,
}

impl IpRangeTable {
    /// Parse an IP-range JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let json_ip_ranges = json::parse(json)?;

        let mut regions = BTreeSet::new();
        let mut services = BTreeSet::new();

        let entries: Vec<RangeEntry> = json_ip_ranges
            .prefixes
            .iter()
            .map(|prefix| RangeEntry {
                cidr: prefix.ip_prefix,
                service: utils::intern_rc_str(prefix.service, &mut services),
                region: utils::intern_rc_str(prefix.region, &mut regions),
            })
            .collect();

        let table = IpRangeTable {
            sync_token: json_ip_ranges.sync_token.map(str::to_string),
            create_date: json_ip_ranges.create_date.and_then(datetime::parse),
            regions,
            services,
            entries,
        };

        debug!(
            "Parsed {} IPv4 prefixes across {} regions and {} services",
            table.entries.len(),
            table.regions.len(),
            table.services.len()
        );

        Ok(table)
    }

    /// The document's publication time in Unix epoch format, when present.
    pub fn sync_token(&self) -> Option<&str> {
        self.sync_token.as_deref()
    }

    pub fn create_date(&self) -> Option<&DateTime<Utc>> {
        self.create_date.as_ref()
    }

    pub fn regions(&self) -> &BTreeSet<Rc<str>> {
        &self.regions
    }

    pub fn services(&self) -> &BTreeSet<Rc<str>> {
        &self.services
    }

    pub fn entries(&self) -> &[RangeEntry] {
        &self.entries
    }

    /// Entries published under `service`, in document order.
    pub fn service_entries<'t>(
        &'t self,
        service: &'t str,
    ) -> impl Iterator<Item = &'t RangeEntry> + 't {
        self.entries
            .iter()
            .filter(move |entry| &*entry.service == service)
    }

    /// First entry published under `service` whose prefix contains `address`.
    pub fn find(&self, address: Ipv4Addr, service: &str) -> Option<&RangeEntry> {
        self.entries
            .iter()
            .find(|entry| &*entry.service == service && entry.contains(address))
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
