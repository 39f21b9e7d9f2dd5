use crate::core::errors::Result;
use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Provider
-------------------------------------------------------------------------------------------------*/

/// Public cloud provider.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Provider {
    Aws,
    Gcp,
    Unknown,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Aws => write!(f, "AWS"),
            Provider::Gcp => write!(f, "GCP"),
            Provider::Unknown => write!(f, "unknown"),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Detector
-------------------------------------------------------------------------------------------------*/

/// A strategy that recognises one provider.
///
/// `Ok(None)` means the strategy ran cleanly and the host is not (detectably) on this provider;
/// `Err` is a hard failure that aborts the whole resolution.
pub trait Detector {
    fn provider(&self) -> Provider;

    fn detect(&self) -> Result<Option<String>>;
}

/*-------------------------------------------------------------------------------------------------
  Detection Result
-------------------------------------------------------------------------------------------------*/

/// Outcome of a resolution. The region is present if and only if the provider is known.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DetectionResult {
    provider: Provider,
    region: Option<String>,
}

impl DetectionResult {
    /// A located host. A [Provider::Unknown] provider yields [DetectionResult::unknown].
    pub fn located(provider: Provider, region: impl Into<String>) -> Self {
        match provider {
            Provider::Unknown => Self::unknown(),
            _ => Self {
                provider,
                region: Some(region.into()),
            },
        }
    }

    pub fn unknown() -> Self {
        Self {
            provider: Provider::Unknown,
            region: None,
        }
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn is_unknown(&self) -> bool {
        self.provider == Provider::Unknown
    }
}

impl fmt::Display for DetectionResult {
    /// `Cloud: <AWS|GCP|unknown>, Region: <region|unknown>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cloud: {}, Region: {}",
            self.provider,
            self.region().unwrap_or("unknown")
        )
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
