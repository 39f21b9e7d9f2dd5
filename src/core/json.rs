use crate::core::errors::{Error, Result};
use ipnetwork::Ipv4Network;
use serde::Deserialize;

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

pub fn parse(json: &str) -> Result<JsonIpRanges<'_>> {
    serde_json::from_str(json)
        .map_err(|error| Error::ReferenceDataUnavailable(format!("malformed JSON: {error}")))
}

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  JSON IP Ranges
--------------------------------------------------------------------------------------*/

/// The IP-range document. Only the IPv4 `prefixes` array is required; `ipv6_prefixes` and any
/// other members are ignored.
#[derive(Debug, Deserialize, Eq, PartialEq)]
pub struct JsonIpRanges<'j> {
    #[serde(rename = "syncToken", borrow, default)]
    pub sync_token: Option<&'j str>,

    #[serde(rename = "createDate", borrow, default)]
    pub create_date: Option<&'j str>,

    #[serde(borrow)]
    pub prefixes: Vec<JsonIpPrefix<'j>>,
}

/*--------------------------------------------------------------------------------------
  JSON IP (IPv4) Prefix
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq)]
pub struct JsonIpPrefix<'j> {
    pub ip_prefix: Ipv4Network,
    pub region: &'j str,
    pub service: &'j str,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
