//! Blocking HTTP fetch for remote datasets.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::source::MAX_DATASET_BYTES;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin wrapper over a blocking `reqwest` client.
///
/// No retries: a failed fetch is surfaced to the user as-is.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| IngestError::Http {
                url: String::new(),
                message: e.to_string(),
            })?;
        Ok(Self { client })
    }

    /// Download `url` and return the response body.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!(%url, "fetching dataset");
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, format!("dinemap/{}", env!("CARGO_PKG_VERSION")))
            .send()
            .map_err(|e| IngestError::Http {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "dataset fetch rejected");
            return Err(IngestError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(|e| IngestError::Http {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        let size = body.len() as u64;
        if size > MAX_DATASET_BYTES {
            return Err(IngestError::TooLarge {
                origin: url.to_string(),
                size,
                max_size: MAX_DATASET_BYTES,
            });
        }
        debug!(%url, bytes = size, "dataset downloaded");
        Ok(body.to_vec())
    }
}
