use crate::core::errors::{Error, Result};
use log::{debug, info};
use reqwest::blocking;
use std::time::Duration;
use thiserror::Error;

/*-------------------------------------------------------------------------------------------------
  Capabilities
-------------------------------------------------------------------------------------------------*/

/// Source of a provider's published IP-range JSON document.
pub trait RangeSource {
    /// Fetch the raw document. Any failure is a [Error::ReferenceDataUnavailable].
    fn fetch_ranges(&self) -> Result<String>;
}

/// Instance metadata endpoint.
pub trait MetadataSource {
    fn fetch_metadata(&self) -> std::result::Result<MetadataResponse, TransportError>;
}

/// Status and body of a metadata response.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MetadataResponse {
    pub status: u16,
    pub body: String,
}

impl MetadataResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Why a metadata request produced no response.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum TransportError {
    /// The endpoint could not be reached (refused, timed out, unresolvable, reset, ...).
    #[error("metadata endpoint unavailable: {0}")]
    Unavailable(String),

    /// The request itself could not be built.
    #[error("invalid metadata request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            TransportError::InvalidRequest(error.to_string())
        } else {
            TransportError::Unavailable(error.to_string())
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  HTTP Client
-------------------------------------------------------------------------------------------------*/

/// Blocking HTTP client for a single endpoint. Every request is bounded by the client timeout
/// and is attempted once.
///
/// ```
/// use cloudlocate::{HttpClient, MetadataSource};
/// use std::time::Duration;
///
/// let client = HttpClient::new("http://127.0.0.1:1/zone", Duration::from_millis(500))?
///     .header("Metadata-Flavor", "Google");
/// assert!(client.fetch_metadata().is_err());
/// # Ok::<(), cloudlocate::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    url: String,
    headers: Vec<(String, String)>,
    client: blocking::Client,
}

impl HttpClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = blocking::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            url: url.to_string(),
            headers: Vec::new(),
            client,
        })
    }

    /// Add a header sent with every request.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn get(&self) -> reqwest::Result<blocking::Response> {
        info!("GET {}", self.url);
        self.headers
            .iter()
            .fold(self.client.get(&self.url), |request, (name, value)| {
                request.header(name.as_str(), value.as_str())
            })
            .send()
    }
}

impl RangeSource for HttpClient {
    fn fetch_ranges(&self) -> Result<String> {
        self.get()
            .and_then(blocking::Response::error_for_status)
            .and_then(blocking::Response::text)
            .inspect(|json| debug!("Received {} bytes from {}", json.len(), self.url))
            .map_err(|error| Error::ReferenceDataUnavailable(format!("GET {}: {error}", self.url)))
    }
}

impl MetadataSource for HttpClient {
    fn fetch_metadata(&self) -> std::result::Result<MetadataResponse, TransportError> {
        let response = self.get()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        debug!("GET {}: {} {:?}", self.url, status, body);

        Ok(MetadataResponse { status, body })
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::errors::log_error;
    use test_log::test;

    /*----------------------------------------------------------------------------------
      Test Capabilities
    ----------------------------------------------------------------------------------*/

    /// Range source serving a fixed document, or failing when `None`.
    pub(crate) struct StaticRangeSource(pub Option<&'static str>);

    impl RangeSource for StaticRangeSource {
        fn fetch_ranges(&self) -> Result<String> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| Error::ReferenceDataUnavailable("connection refused".into()))
        }
    }

    /// Metadata source returning a fixed outcome.
    pub(crate) struct StaticMetadataSource(
        pub std::result::Result<MetadataResponse, TransportError>,
    );

    impl StaticMetadataSource {
        pub(crate) fn ok(body: &str) -> Self {
            Self(Ok(MetadataResponse {
                status: 200,
                body: body.to_string(),
            }))
        }

        pub(crate) fn status(status: u16) -> Self {
            Self(Ok(MetadataResponse {
                status,
                body: String::new(),
            }))
        }

        pub(crate) fn unavailable() -> Self {
            Self(Err(TransportError::Unavailable(
                "error trying to connect: Connection refused".into(),
            )))
        }
    }

    impl MetadataSource for StaticMetadataSource {
        fn fetch_metadata(&self) -> std::result::Result<MetadataResponse, TransportError> {
            self.0.clone()
        }
    }

    /*----------------------------------------------------------------------------------
      MetadataResponse
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_metadata_response_is_success() {
        let response = |status| MetadataResponse {
            status,
            body: String::new(),
        };

        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(301).is_success());
        assert!(!response(403).is_success());
        assert!(!response(500).is_success());
    }

    /*----------------------------------------------------------------------------------
      HttpClient
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_connection_refused_is_unavailable() {
        let client = HttpClient::new("http://127.0.0.1:1/zone", Duration::from_millis(500))
            .unwrap()
            .header("Metadata-Flavor", "Google");

        let result = client.fetch_metadata();
        assert!(matches!(result, Err(TransportError::Unavailable(_))));
    }

    #[test]
    fn test_malformed_url_is_invalid_request() {
        let client = HttpClient::new("not a url", Duration::from_millis(500)).unwrap();

        let result = client.fetch_metadata();
        assert!(matches!(result, Err(TransportError::InvalidRequest(_))));
    }

    #[test]
    fn test_unreachable_range_source() {
        let client =
            HttpClient::new("http://127.0.0.1:1/ip-ranges.json", Duration::from_millis(500))
                .unwrap();

        let result = client.fetch_ranges().inspect_err(log_error);
        assert!(matches!(result, Err(Error::ReferenceDataUnavailable(_))));
    }
}
