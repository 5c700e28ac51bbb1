//! HTTP client for the monitoring server command API.
//!
//! A single blocking `POST` is sent with basic authentication and a JSON body.
//! Transport failures are not returned as errors: they are classified into a
//! [`Dispatch`] variant so the caller always gets something to report.
use std::error::Error as StdError;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Configuration;
use crate::outcome::Dispatch;
use crate::request::StatusUpdateRequest;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("Invalid URL: {err}")]
    InvalidUrl { err: url::ParseError },
    #[error("Failed to build a HTTP client: {err}")]
    ClientBuildingError { err: Arc<reqwest::Error> },
}

impl From<Error> for Dispatch {
    fn from(err: Error) -> Self {
        Dispatch::Other(err.to_string())
    }
}

/// Sends one status update to the server.
#[cfg_attr(test, automock)]
pub trait Transport {
    fn send(&self, config: &Configuration, request: &StatusUpdateRequest) -> Dispatch;
}

/// [`Transport`] over HTTPS using `reqwest`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpTransport;

impl HttpTransport {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn build_client(config: &Configuration) -> Result<HttpClient, Error> {
        HttpClient::builder()
            .no_proxy()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()
            .map_err(|e| Error::ClientBuildingError { err: e.into() })
    }
}

impl Transport for HttpTransport {
    fn send(&self, config: &Configuration, request: &StatusUpdateRequest) -> Dispatch {
        let url = match config.endpoint() {
            Ok(url) => url,
            Err(err) => return Error::InvalidUrl { err }.into(),
        };

        let client = match Self::build_client(config) {
            Ok(client) => client,
            Err(err) => return err.into(),
        };

        debug!(%url, verify_tls = config.verify_tls, timeout = ?config.timeout, "Sending service status update ...");

        let response = client
            .post(url)
            .basic_auth(&config.username, Some(&config.password))
            .header(CONTENT_TYPE, "application/json")
            .json(&request.payload())
            .send();

        match response {
            Ok(response) => {
                debug!(status = %response.status(), "Received response");
                Dispatch::Success(response.status().as_u16())
            }
            Err(err) => {
                warn!("Status update request failed: {err:?}");
                classify(&err)
            }
        }
    }
}

/// It maps a `reqwest` failure to the matching [`Dispatch`] variant.
///
/// TLS errors are checked before connection errors because a failed
/// handshake is reported by `reqwest` as a connection error too.
#[must_use]
pub fn classify(err: &reqwest::Error) -> Dispatch {
    if err.is_timeout() {
        Dispatch::Timeout
    } else if is_tls_error(err) {
        Dispatch::Tls
    } else if err.is_connect() {
        Dispatch::Connection
    } else {
        Dispatch::Other(err.to_string())
    }
}

fn is_tls_error(err: &(dyn StdError + 'static)) -> bool {
    let mut source = Some(err);

    while let Some(err) = source {
        if err.downcast_ref::<rustls::Error>().is_some() {
            return true;
        }

        // `io::Error::source` skips the wrapped error, so the walk continues from it.
        source = match err.downcast_ref::<std::io::Error>().and_then(std::io::Error::get_ref) {
            Some(inner) => Some(inner as &(dyn StdError + 'static)),
            None => err.source(),
        };
    }

    false
}
