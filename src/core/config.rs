use log::{info, warn};
use std::env;
use std::time::Duration;

/*-------------------------------------------------------------------------------------------------
  Defaults
-------------------------------------------------------------------------------------------------*/

pub const DEFAULT_AWS_IP_RANGES_URL: &str = "https://ip-ranges.amazonaws.com/ip-ranges.json";
pub const DEFAULT_AWS_SERVICE: &str = "EC2";
pub const DEFAULT_ADDRESS_ECHO_HOST: &str = "o-o.myaddr.l.google.com";
pub const DEFAULT_GCP_METADATA_URL: &str =
    "http://169.254.169.254/computeMetadata/v1/instance/zone";
pub const DEFAULT_TIMEOUT: u64 = 5000; // 5 seconds

/*-------------------------------------------------------------------------------------------------
  Config Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [Config] struct. Provides a setter for each configuration value and a
/// [ConfigBuilder::build] method to create the [Config].
///
/// ```
/// let config = cloudlocate::ConfigBuilder::default()
///     .aws_ip_ranges_url("https://ip-ranges.amazonaws.com/ip-ranges.json")
///     .aws_service("EC2")
///     .timeout(2000) // 2 seconds
///     .build();
///
/// assert_eq!(config.aws_service(), "EC2");
/// assert_eq!(config.timeout().as_millis(), 2000);
/// ```
///
/// [ConfigBuilder::new] sources initial values from environment variables when they are set
/// and uses the defaults otherwise. [ConfigBuilder::default] ignores the environment.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    aws_ip_ranges_url: String,
    aws_service: String,
    address_echo_host: String,
    gcp_metadata_url: String,
    timeout: u64,
}

/*--------------------------------------------------------------------------------------
  Config Builder Implementation
--------------------------------------------------------------------------------------*/

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            aws_ip_ranges_url: DEFAULT_AWS_IP_RANGES_URL.to_string(),
            aws_service: DEFAULT_AWS_SERVICE.to_string(),
            address_echo_host: DEFAULT_ADDRESS_ECHO_HOST.to_string(),
            gcp_metadata_url: DEFAULT_GCP_METADATA_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ConfigBuilder {
    /// Create a new [ConfigBuilder] reading initial values from these environment variables
    /// when set:
    /// - `CLOUDLOCATE_AWS_IP_RANGES_URL`
    /// - `CLOUDLOCATE_AWS_SERVICE`
    /// - `CLOUDLOCATE_ADDRESS_ECHO_HOST`
    /// - `CLOUDLOCATE_GCP_METADATA_URL`
    /// - `CLOUDLOCATE_TIMEOUT`
    pub fn new() -> Self {
        let default = ConfigBuilder::default();

        Self {
            aws_ip_ranges_url: get_env_var(
                "CLOUDLOCATE_AWS_IP_RANGES_URL",
                default.aws_ip_ranges_url,
            ),
            aws_service: get_env_var("CLOUDLOCATE_AWS_SERVICE", default.aws_service),
            address_echo_host: get_env_var(
                "CLOUDLOCATE_ADDRESS_ECHO_HOST",
                default.address_echo_host,
            ),
            gcp_metadata_url: get_env_var("CLOUDLOCATE_GCP_METADATA_URL", default.gcp_metadata_url),
            timeout: get_env_var("CLOUDLOCATE_TIMEOUT", default.timeout),
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the URL of the AWS IP Ranges JSON document.
    pub fn aws_ip_ranges_url(&mut self, url: &str) -> &mut Self {
        self.aws_ip_ranges_url = url.to_string();
        self
    }

    /// Set the service tag that identifies compute-instance prefixes; defaults to `EC2`.
    pub fn aws_service(&mut self, service: &str) -> &mut Self {
        self.aws_service = service.to_string();
        self
    }

    /// Set the hostname queried for a TXT record echoing the caller's public address.
    pub fn address_echo_host(&mut self, host: &str) -> &mut Self {
        self.address_echo_host = host.to_string();
        self
    }

    /// Set the GCP metadata URL returning the instance zone.
    pub fn gcp_metadata_url(&mut self, url: &str) -> &mut Self {
        self.gcp_metadata_url = url.to_string();
        self
    }

    /// Set the timeout (in milliseconds) applied to every network operation; defaults to
    /// `5000` milliseconds.
    pub fn timeout(&mut self, timeout: u64) -> &mut Self {
        self.timeout = timeout;
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(&self) -> Config {
        Config {
            aws_ip_ranges_url: self.aws_ip_ranges_url.clone(),
            aws_service: self.aws_service.clone(),
            address_echo_host: self.address_echo_host.clone(),
            gcp_metadata_url: self.gcp_metadata_url.clone(),
            timeout: self.timeout,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Config
-------------------------------------------------------------------------------------------------*/

/// Endpoints and limits used by the default detection pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    aws_ip_ranges_url: String,
    aws_service: String,
    address_echo_host: String,
    gcp_metadata_url: String,
    timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        ConfigBuilder::default().build()
    }
}

impl Config {
    pub fn new() -> Self {
        ConfigBuilder::new().build()
    }

    pub fn aws_ip_ranges_url(&self) -> &str {
        &self.aws_ip_ranges_url
    }

    pub fn aws_service(&self) -> &str {
        &self.aws_service
    }

    pub fn address_echo_host(&self) -> &str {
        &self.address_echo_host
    }

    pub fn gcp_metadata_url(&self) -> &str {
        &self.gcp_metadata_url
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Get and parse an environment variable value or return a default value.
fn get_env_var<T: std::str::FromStr>(env_var: &str, default: T) -> T {
    env::var(env_var)
        .ok()
        .and_then(|value| {
            value
                .parse::<T>()
                .inspect(|_| info!("Using {}: {}", env_var, value))
                .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
                .ok()
        })
        .unwrap_or(default)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
