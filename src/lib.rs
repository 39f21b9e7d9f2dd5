//! Detect the public cloud provider and region the current host runs in.
//!
//! Two strategies run in order and the first positive answer wins:
//!
//! 1. **AWS** - the host's public IPv4 address (echoed back by a DNS TXT lookup) is searched
//!    for in the `EC2` prefixes of the published
//!    [AWS IP Ranges](https://docs.aws.amazon.com/vpc/latest/userguide/aws-ip-ranges.html).
//! 2. **GCP** - the instance metadata server is asked for the instance zone. The server is
//!    only reachable from inside GCP, so an unreachable server simply means "not GCP".
//!
//! When neither strategy finds anything the result is unknown. Failing to fetch the AWS IP
//! Ranges or to determine the public address is an error, not an unknown result.
//!
//! ```no_run
//! let result = cloudlocate::locate()?;
//! println!("{result}"); // Cloud: AWS, Region: us-east-2
//! # Ok::<(), cloudlocate::Error>(())
//! ```

mod core;

/*-------------------------------------------------------------------------------------------------
  Primary Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::detector::{DetectionResult, Detector, Provider};
pub use crate::core::errors::{Error, Result};
pub use crate::core::resolver::{locate, Resolver};

/*-------------------------------------------------------------------------------------------------
  Detectors
-------------------------------------------------------------------------------------------------*/

pub use crate::core::aws::AddressRangeDetector;
pub use crate::core::gcp::{zone_to_region, MetadataDetector};

/*-------------------------------------------------------------------------------------------------
  Configuration
-------------------------------------------------------------------------------------------------*/

pub use crate::core::config::{Config, ConfigBuilder};

/*-------------------------------------------------------------------------------------------------
  Capabilities and Data
-------------------------------------------------------------------------------------------------*/

pub use crate::core::address::{parse_address, public_address, AddressEcho, DnsAddressEcho};
pub use crate::core::client::{
    HttpClient, MetadataResponse, MetadataSource, RangeSource, TransportError,
};
pub use crate::core::ip_ranges::{IpRangeTable, RangeEntry};

/*-------------------------------------------------------------------------------------------------
  Re-exports
-------------------------------------------------------------------------------------------------*/

pub use ipnetwork;
