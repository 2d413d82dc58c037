//! Remote puzzle input retrieval.
//! Downloads a day's personalized input with a single authenticated GET.
//! Failures are never retried: inputs are rate-limited per account, and a
//! human re-run is the recovery path.

use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::{COOKIE, USER_AGENT};
use url::Url;

use crate::constants::USER_AGENT as AGENT;
use crate::error::{Error, Result};

/// Outcome of an input download that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// The response body; may legitimately be empty.
    Fetched(String),
    /// No credential was configured, so nothing was requested.
    NoCredential,
}

/// Trait for retrieving puzzle inputs.
pub trait InputFetcher {
    /// Downloads the input for `year`/`day` using the session `credential`.
    fn fetch(&self, year: u32, day: u32, credential: &str) -> Result<String>;
}

/// Fetches inputs from the puzzle host over HTTP(S).
pub struct HttpFetcher {
    client: Client,
    base_url: Url,
}

impl HttpFetcher {
    /// Creates a fetcher for `host` whose requests give up after `timeout`.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the host is not a valid URL
    /// * `Error::FetchError` if the HTTP client cannot be initialized
    pub fn new(host: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(host)
            .map_err(|e| Error::ConfigError(format!("invalid host '{host}': {e}")))?;
        // Url::join replaces the last segment unless the path ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::FetchError { url: host.to_string(), reason: error_chain(&e) })?;

        Ok(Self { client, base_url })
    }

    /// URL of the input endpoint for a puzzle day.
    pub fn input_url(&self, year: u32, day: u32) -> Result<Url> {
        self.base_url
            .join(&format!("{year}/day/{day}/input"))
            .map_err(|e| Error::ConfigError(format!("invalid input URL: {e}")))
    }
}

impl InputFetcher for HttpFetcher {
    fn fetch(&self, year: u32, day: u32, credential: &str) -> Result<String> {
        let url = self.input_url(year, day)?;
        info!("Downloading puzzle input from {url}.");

        let fetch_error = |reason: String| Error::FetchError { url: url.to_string(), reason };

        let response = self
            .client
            .get(url.clone())
            .header(COOKIE, format!("session={credential}"))
            .header(USER_AGENT, AGENT)
            .send()
            .map_err(|e| fetch_error(error_chain(&e)))?;

        let status = response.status();
        debug!("Input request answered with {status}.");
        if !status.is_success() {
            return Err(fetch_error(format!("server responded with HTTP {status}")));
        }

        response.text().map_err(|e| fetch_error(error_chain(&e)))
    }
}

/// Downloads the input when a credential is available.
///
/// Without a credential the fetcher is not called at all and
/// [`FetchResult::NoCredential`] is returned.
pub fn fetch_input(
    fetcher: &dyn InputFetcher,
    year: u32,
    day: u32,
    credential: Option<&str>,
) -> Result<FetchResult> {
    match credential {
        Some(credential) => fetcher.fetch(year, day, credential).map(FetchResult::Fetched),
        None => Ok(FetchResult::NoCredential),
    }
}

/// Formats an error with all of its sources, e.g. `error sending request: connection refused`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
