use clap::Parser;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Detect the public cloud provider and region this host runs in.",
    long_about = "Detect the public cloud provider and region this host runs in.\n\n\
        Endpoints and the network timeout can be overridden with the CLOUDLOCATE_AWS_IP_RANGES_URL, \
        CLOUDLOCATE_AWS_SERVICE, CLOUDLOCATE_ADDRESS_ECHO_HOST, CLOUDLOCATE_GCP_METADATA_URL and \
        CLOUDLOCATE_TIMEOUT (milliseconds) environment variables."
)]
pub struct Args {
    /// Logging verbosity
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}
