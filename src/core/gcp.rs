use crate::core::client::{HttpClient, MetadataSource, TransportError};
use crate::core::config::Config;
use crate::core::detector::{Detector, Provider};
use crate::core::errors::{Error, Result};
use log::{debug, info};

pub const METADATA_FLAVOR_HEADER: &str = "Metadata-Flavor";
pub const METADATA_FLAVOR: &str = "Google";

/*-------------------------------------------------------------------------------------------------
  Metadata Detector
-------------------------------------------------------------------------------------------------*/

/// Detects GCP through the instance metadata server. The server is only reachable from inside
/// GCP, so an unreachable endpoint means "not on GCP".
pub struct MetadataDetector {
    metadata: Box<dyn MetadataSource>,
}

impl MetadataDetector {
    pub fn new(metadata: impl MetadataSource + 'static) -> Self {
        Self {
            metadata: Box::new(metadata),
        }
    }

    /// Detector querying the configured zone URL with the `Metadata-Flavor: Google` header.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = HttpClient::new(config.gcp_metadata_url(), config.timeout())?
            .header(METADATA_FLAVOR_HEADER, METADATA_FLAVOR);

        Ok(Self::new(client))
    }
}

impl Detector for MetadataDetector {
    fn provider(&self) -> Provider {
        Provider::Gcp
    }

    fn detect(&self) -> Result<Option<String>> {
        let response = match self.metadata.fetch_metadata() {
            Ok(response) => response,
            Err(TransportError::Unavailable(reason)) => {
                info!("GCP metadata server not reachable: {reason}");
                return Ok(None);
            }
            Err(TransportError::InvalidRequest(reason)) => {
                return Err(Error::InvalidRequest(reason));
            }
        };

        if !response.is_success() {
            info!("GCP metadata server responded with status {}", response.status);
            return Ok(None);
        }

        let region = zone_to_region(&response.body);
        debug!("Zone {:?} -> region {:?}", response.body.trim(), region);
        Ok(region)
    }
}

/*-------------------------------------------------------------------------------------------------
  Zone to Region
-------------------------------------------------------------------------------------------------*/

/// Derive the region from a metadata zone value such as `projects/123/zones/us-central1-a` by
/// dropping the trailing `-<suffix>` of the last path segment.
///
/// A zone without a `-` separator, or one that leaves an empty region, yields `None`.
///
/// ```
/// use cloudlocate::zone_to_region;
///
/// assert_eq!(zone_to_region("projects/123/zones/us-central1-a").as_deref(), Some("us-central1"));
/// assert_eq!(zone_to_region("europe-west1-b").as_deref(), Some("europe-west1"));
/// assert_eq!(zone_to_region("projects/123/zones/local"), None);
/// ```
pub fn zone_to_region(zone: &str) -> Option<String> {
    let zone = zone.trim().rsplit('/').next().unwrap_or_default();

    match zone.rsplit_once('-') {
        Some((region, _)) if !region.is_empty() => Some(region.to_string()),
        _ => None,
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::tests::StaticMetadataSource;
    use test_log::test;

    /*----------------------------------------------------------------------------------
      zone_to_region
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_zone_to_region() {
        assert_eq!(
            zone_to_region("projects/123/zones/us-central1-a").as_deref(),
            Some("us-central1")
        );
        assert_eq!(zone_to_region("europe-west1-b").as_deref(), Some("europe-west1"));
        assert_eq!(
            zone_to_region("projects/123/zones/asia-northeast1-c\n").as_deref(),
            Some("asia-northeast1")
        );
    }

    #[test]
    fn test_zone_without_suffix_is_not_found() {
        assert_eq!(zone_to_region("projects/123/zones/uscentral1"), None);
        assert_eq!(zone_to_region("uscentral1"), None);
        assert_eq!(zone_to_region("projects/123/zones/-a"), None);
        assert_eq!(zone_to_region(""), None);
        assert_eq!(zone_to_region("projects/123/zones/"), None);
    }

    /*----------------------------------------------------------------------------------
      MetadataDetector
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_metadata_zone() {
        let detector =
            MetadataDetector::new(StaticMetadataSource::ok("projects/123/zones/us-central1-a"));
        assert_eq!(detector.detect().unwrap().as_deref(), Some("us-central1"));
    }

    #[test]
    fn test_metadata_unavailable() {
        let detector = MetadataDetector::new(StaticMetadataSource::unavailable());
        assert_eq!(detector.detect().unwrap(), None);
    }

    #[test]
    fn test_metadata_error_status() {
        for status in [301, 403, 404, 500, 503] {
            let detector = MetadataDetector::new(StaticMetadataSource::status(status));
            assert_eq!(detector.detect().unwrap(), None);
        }
    }

    #[test]
    fn test_metadata_zone_without_suffix() {
        let detector = MetadataDetector::new(StaticMetadataSource::ok("projects/123/zones/local"));
        assert_eq!(detector.detect().unwrap(), None);
    }

    #[test]
    fn test_metadata_invalid_request() {
        let detector = MetadataDetector::new(StaticMetadataSource(Err(
            TransportError::InvalidRequest("relative URL without a base".into()),
        )));
        assert!(matches!(detector.detect(), Err(Error::InvalidRequest(_))));
    }
}
