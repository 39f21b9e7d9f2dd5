use crate::core::aws::AddressRangeDetector;
use crate::core::config::Config;
use crate::core::detector::{DetectionResult, Detector};
use crate::core::errors::Result;
use crate::core::gcp::MetadataDetector;
use log::info;

/*-------------------------------------------------------------------------------------------------
  Simple Interface
-------------------------------------------------------------------------------------------------*/

/// _**Simple library interface**_ that detects the provider and region of the current host
/// using the configuration from the environment (see [crate::ConfigBuilder::new]).
///
/// ```no_run
/// let result = cloudlocate::locate()?;
/// println!("{result}");
/// # Ok::<(), cloudlocate::Error>(())
/// ```
pub fn locate() -> Result<DetectionResult> {
    Resolver::from_config(&Config::new())?.resolve()
}

/*-------------------------------------------------------------------------------------------------
  Resolver
-------------------------------------------------------------------------------------------------*/

/// Runs detectors in order and reports the first one that locates the host.
///
/// Each detector runs at most once. A hard failure from any detector aborts the resolution; it
/// is never treated as "try the next provider". New providers are appended after the existing
/// ones.
///
/// ```no_run
/// use cloudlocate::{Config, MetadataDetector, Resolver};
///
/// let config = Config::new();
/// let resolver = Resolver::new().with_detector(MetadataDetector::from_config(&config)?);
/// let result = resolver.resolve()?;
/// # Ok::<(), cloudlocate::Error>(())
/// ```
#[derive(Default)]
pub struct Resolver {
    detectors: Vec<Box<dyn Detector>>,
}

impl Resolver {
    /// An empty pipeline; always resolves to unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default pipeline: AWS (IP ranges), then GCP (metadata server).
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new()
            .with_detector(AddressRangeDetector::from_config(config)?)
            .with_detector(MetadataDetector::from_config(config)?))
    }

    /// Append a detector to the end of the pipeline.
    pub fn with_detector(mut self, detector: impl Detector + 'static) -> Self {
        self.push(Box::new(detector));
        self
    }

    pub fn push(&mut self, detector: Box<dyn Detector>) {
        self.detectors.push(detector);
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }

    pub fn resolve(&self) -> Result<DetectionResult> {
        for detector in &self.detectors {
            let provider = detector.provider();
            info!("Trying {provider}");

            if let Some(region) = detector.detect()? {
                info!("Located in {provider} region {region}");
                return Ok(DetectionResult::located(provider, region));
            }
        }

        info!("No provider detected");
        Ok(DetectionResult::unknown())
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
