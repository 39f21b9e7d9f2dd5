use crate::cli::Args;
use cloudlocate::DetectionResult;
use log::{info, warn};

/*-------------------------------------------------------------------------------------------------
  Logging Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Initialize stderr Logging
--------------------------------------------------------------------------------------*/

pub fn init(args: &Args) {
    stderrlog::new()
        .module("cloudlocate")
        .verbosity(args.verbose.log_level_filter())
        .init()
        .ok(); // already initialized
}

/*--------------------------------------------------------------------------------------
  Detection Result
--------------------------------------------------------------------------------------*/

pub fn detection_result(result: &DetectionResult) {
    match result.region() {
        Some(region) => info!("Detected provider {} in region {region}", result.provider()),
        None => warn!("Unable to detect the cloud provider of this host"),
    }
}
