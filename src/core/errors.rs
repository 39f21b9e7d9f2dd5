use thiserror::Error;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Hard failures that abort a resolution. A detector that simply finds nothing returns
/// `Ok(None)` instead of one of these.
#[derive(Debug, Error)]
pub enum Error {
    /// The provider's IP-range document could not be fetched or parsed.
    #[error("IP range data unavailable: {0}")]
    ReferenceDataUnavailable(String),

    /// The host's public IPv4 address could not be determined.
    #[error("unable to determine public IPv4 address: {0}")]
    AddressLookupFailure(String),

    /// A request could not be built; points at a configuration or programming fault rather
    /// than at the remote host.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    HttpClient(#[from] reqwest::Error),
}

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Log Error Function
--------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) fn log_error(error: &Error) {
    log::error!("{}", error);
}
